use reqwest::Client;

use crate::config::Config;

pub struct AppState {
    pub client: Client,
    pub config: Config,
}

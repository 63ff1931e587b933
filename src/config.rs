use std::env;

pub const DEFAULT_API_ADDRESS: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PLAYLIST_ID: &str = "DtVRqDNU";
pub const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:3000";

/// Runtime configuration, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base address of the playlist manager API.
    pub api_address: String,
    /// Playlist rendered by the index page.
    pub playlist_id: String,
    pub listen_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_address: env::var("API_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_API_ADDRESS.to_string()),
            playlist_id: env::var("PLAYLIST_ID")
                .unwrap_or_else(|_| DEFAULT_PLAYLIST_ID.to_string()),
            listen_address: env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string()),
        }
    }
}

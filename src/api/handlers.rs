use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};

use super::error::ApiError;
use super::types::AppState;
use crate::config::Config;
use crate::render::page::Page;
use crate::render::view::load_playlist;

async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    render_page(&state, &state.config.playlist_id).await
}

async fn playlist_handler(
    State(state): State<Arc<AppState>>,
    Path(playlist_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    render_page(&state, &playlist_id).await
}

async fn render_page(state: &AppState, playlist_id: &str) -> Result<Html<String>, ApiError> {
    let mut page = Page::standard();
    load_playlist(&state.client, &state.config.api_address, playlist_id, &mut page).await?;
    Ok(Html(page.to_html()))
}

pub fn create_router(config: Config) -> Router {
    let client = reqwest::Client::new();
    let state = Arc::new(AppState { client, config });

    Router::new()
        .route("/", get(index_handler))
        .route("/playlist/:playlist_id", get(playlist_handler))
        .with_state(state)
}

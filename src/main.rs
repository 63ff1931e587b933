use playlist_view::api;
use playlist_view::config::Config;
use playlist_view::manager::playlists::get_playlist_title;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // probe the manager so a bad API_ADDRESS shows up at startup instead of
    // on the first page load
    let client = reqwest::Client::new();
    match get_playlist_title(&client, &config.api_address, &config.playlist_id).await {
        Ok(title) => tracing::info!("Playlist manager reachable, default playlist: {}", title),
        Err(e) => tracing::warn!(
            "Playlist manager not reachable at {}: {}",
            config.api_address,
            e
        ),
    }

    let listen_address = config.listen_address.clone();
    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(&listen_address).await.unwrap();
    tracing::info!("Server starting on http://{}", listen_address);

    axum::serve(listener, app).await.unwrap();
}

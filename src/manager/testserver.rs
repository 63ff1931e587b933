//! In-process stand-in for the playlist manager API, bound to an ephemeral
//! port. Serves the same JSON shapes as the real endpoints.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Starts the fixture server and returns its base address.
pub async fn spawn() -> String {
    let app = Router::new()
        .route("/playlist/data/:playlist_id", get(playlist_data))
        .route("/playlist/title/:playlist_id", get(playlist_title))
        .route("/video/:video_id", get(video));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let api_address = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    api_address
}

async fn playlist_data(Path(playlist_id): Path<String>) -> Response {
    if playlist_id != "xKFHDg6h" {
        return not_found();
    }

    Json(json!({
        "id": "xKFHDg6h",
        "full_path": "/home/user/playlists/workout mix.json",
        "title": "workout mix",
        "entries": [
            { "id": "3onlW9wKxVc", "insertedAt": "2024-11-02T10:05:12" },
            { "id": "kXYiU_JCYtU", "insertedAt": "2024-12-24T15:40:58" },
            { "id": "9bZkp7q19f0", "insertedAt": "2025-01-18T22:10:05" }
        ],
        "created_at": "2024-11-02T10:04:31",
        "last_modified_at": "2025-01-18T22:10:05"
    }))
    .into_response()
}

async fn playlist_title(Path(playlist_id): Path<String>) -> Response {
    if playlist_id != "xKFHDg6h" {
        return not_found();
    }

    Json(json!({ "title": "workout mix" })).into_response()
}

async fn video(Path(video_id): Path<String>) -> Response {
    match video_id.as_str() {
        "malformed00" => "{ not json".into_response(),
        "teapot00000" => StatusCode::IM_A_TEAPOT.into_response(),
        _ => match video_fixture(&video_id) {
            Some(body) => Json(body).into_response(),
            None => not_found(),
        },
    }
}

fn video_fixture(video_id: &str) -> Option<Value> {
    // duration and description are delivered by the real API too; clients
    // that don't display them are expected to ignore them
    match video_id {
        "3onlW9wKxVc" => Some(json!({
            "url": "https://www.youtube.com/watch?v=3onlW9wKxVc",
            "title": "Mr. Blue Sky (Audio)",
            "uploader": "ELOVEVO",
            "view_count": 174_000_000,
            "upload_date": "20170120",
            "duration": 285,
            "thumbnail": "https://i.ytimg.com/vi/3onlW9wKxVc/sddefault.jpg",
            "description": "Official audio for Mr. Blue Sky"
        })),
        "kXYiU_JCYtU" => Some(json!({
            "url": "https://www.youtube.com/watch?v=kXYiU_JCYtU",
            "title": "Numb (Official Music Video)",
            "uploader": "Linkin Park",
            "view_count": 2_300_000_000u64,
            "upload_date": "20070305",
            "duration": 187,
            "thumbnail": "https://i.ytimg.com/vi/kXYiU_JCYtU/sddefault.jpg",
            "description": "Numb by Linkin Park"
        })),
        "9bZkp7q19f0" => Some(json!({
            "url": "https://www.youtube.com/watch?v=9bZkp7q19f0",
            "title": "Gangnam Style",
            "uploader": "officialpsy",
            "view_count": 5_100_000_000u64,
            "upload_date": "20120715",
            "duration": 253,
            "thumbnail": null,
            "description": null
        })),
        _ => None,
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}

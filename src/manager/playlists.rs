use reqwest::Client;
use serde::Deserialize;

use crate::errors::ManagerError;
use crate::models::{Playlist, PlaylistEntry};

#[derive(Debug, Deserialize)]
struct PlaylistDataResponse {
    id: Option<String>,
    full_path: Option<String>,
    title: Option<String>,
    entries: Option<Vec<ApiEntry>>,
    created_at: Option<String>,
    last_modified_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiEntry {
    id: Option<String>,
    #[serde(rename = "insertedAt")]
    inserted_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TitleResponse {
    title: Option<String>,
}

pub async fn get_playlist_data(
    client: &Client,
    api_address: &str,
    playlist_id: &str,
) -> Result<Playlist, ManagerError> {
    let url = format!("{}/playlist/data/{}", api_address, playlist_id);

    let resp = client.get(&url).send().await?;

    match resp.status() {
        reqwest::StatusCode::NOT_FOUND => return Err(ManagerError::NotFound),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            return Err(ManagerError::InternalServerError);
        }
        reqwest::StatusCode::OK => (), // Continue processing
        status => {
            let body = resp
                .text()
                .await
                .map_err(|e| ManagerError::ParseError(e.to_string()))?;
            tracing::warn!("Unknown status code {}: {}", status.as_u16(), body);
            return Err(ManagerError::UnknownStatusCode(status));
        }
    }

    let data: PlaylistDataResponse = resp
        .json()
        .await
        .map_err(|e| ManagerError::ParseError(e.to_string()))?;

    let entries = data
        .entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id?;
            Some(PlaylistEntry {
                id,
                inserted_at: entry.inserted_at,
            })
        })
        .collect();

    Ok(Playlist {
        id: data.id.unwrap_or_else(|| playlist_id.to_string()),
        title: data.title.unwrap_or_default(),
        full_path: data.full_path.unwrap_or_default(),
        created_at: data.created_at.unwrap_or_default(),
        last_modified_at: data.last_modified_at.unwrap_or_default(),
        entries,
    })
}

pub async fn get_playlist_title(
    client: &Client,
    api_address: &str,
    playlist_id: &str,
) -> Result<String, ManagerError> {
    let url = format!("{}/playlist/title/{}", api_address, playlist_id);

    let resp = client.get(&url).send().await?;

    match resp.status() {
        reqwest::StatusCode::NOT_FOUND => return Err(ManagerError::NotFound),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            return Err(ManagerError::InternalServerError);
        }
        reqwest::StatusCode::OK => (),
        status => {
            let body = resp
                .text()
                .await
                .map_err(|e| ManagerError::ParseError(e.to_string()))?;
            tracing::warn!("Unknown status code {}: {}", status.as_u16(), body);
            return Err(ManagerError::UnknownStatusCode(status));
        }
    }

    let data: TitleResponse = resp
        .json()
        .await
        .map_err(|e| ManagerError::ParseError(e.to_string()))?;

    Ok(data.title.unwrap_or_default())
}

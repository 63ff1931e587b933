use reqwest::Client;
use serde::Deserialize;

use crate::errors::ManagerError;
use crate::models::Video;

#[derive(Debug, Deserialize)]
struct VideoResponse {
    url: Option<String>,
    title: Option<String>,
    uploader: Option<String>,
    view_count: Option<i64>,
    upload_date: Option<String>,
    thumbnail: Option<String>,
}

pub async fn get_video(
    client: &Client,
    api_address: &str,
    video_id: &str,
) -> Result<Video, ManagerError> {
    let url = format!("{}/video/{}", api_address, video_id);

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

    let data: VideoResponse = resp
        .json()
        .await
        .map_err(|e| ManagerError::ParseError(e.to_string()))?;

    Ok(Video {
        video_id: video_id.to_string(),
        url: data.url.unwrap_or_default(),
        title: data.title.unwrap_or_default(),
        uploader: data.uploader.unwrap_or_default(),
        view_count: data.view_count.unwrap_or_default(),
        upload_date: data.upload_date.unwrap_or_default(),
        thumbnail: data.thumbnail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::testserver;

    #[tokio::test]
    async fn test_get_video() {
        let api_address = testserver::spawn().await;
        let client = Client::new();

        let video = get_video(&client, &api_address, "3onlW9wKxVc")
            .await
            .expect("video should resolve");

        assert_eq!(video.video_id, "3onlW9wKxVc");
        assert_eq!(video.url, "https://www.youtube.com/watch?v=3onlW9wKxVc");
        assert_eq!(video.title, "Mr. Blue Sky (Audio)");
        assert_eq!(video.uploader, "ELOVEVO");
        assert_eq!(video.view_count, 174_000_000);
        assert_eq!(video.upload_date, "20170120");
        assert_eq!(
            video.thumbnail.as_deref(),
            Some("https://i.ytimg.com/vi/3onlW9wKxVc/sddefault.jpg")
        );
    }

    #[tokio::test]
    async fn test_get_video_not_found() {
        let api_address = testserver::spawn().await;
        let client = Client::new();

        let result = get_video(&client, &api_address, "missing0000").await;
        assert!(matches!(result, Err(ManagerError::NotFound)));
    }

    #[tokio::test]
    async fn test_get_video_malformed_body() {
        let api_address = testserver::spawn().await;
        let client = Client::new();

        let result = get_video(&client, &api_address, "malformed00").await;
        assert!(matches!(result, Err(ManagerError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_get_video_unknown_status() {
        let api_address = testserver::spawn().await;
        let client = Client::new();

        let result = get_video(&client, &api_address, "teapot00000").await;
        assert!(matches!(result, Err(ManagerError::UnknownStatusCode(_))));
    }

    #[tokio::test]
    async fn test_get_video_unreachable_manager() {
        // nothing listens on port 1
        let client = Client::new();

        let result = get_video(&client, "http://127.0.0.1:1", "3onlW9wKxVc").await;
        assert!(matches!(result, Err(ManagerError::HttpError(_))));
    }
}

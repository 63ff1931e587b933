use futures_util::stream;
use futures_util::{pin_mut, StreamExt, TryStreamExt};
use reqwest::Client;

use crate::errors::ManagerError;
use crate::manager::playlists::get_playlist_data;
use crate::manager::videos::get_video;
use crate::models::{Playlist, Video};
use crate::render::targets::{
    DisplayTargets, VideoBlock, PLACEHOLDER_THUMBNAIL, PLAYLIST_CREATED_AT,
    PLAYLIST_LAST_MODIFIED_AT, PLAYLIST_PATH, PLAYLIST_THUMBNAIL, PLAYLIST_TITLE,
};

/// Fetches the playlist's metadata and renders it into `surface`.
pub async fn load_playlist(
    client: &Client,
    api_address: &str,
    playlist_id: &str,
    surface: &mut impl DisplayTargets,
) -> Result<(), ManagerError> {
    let playlist = get_playlist_data(client, api_address, playlist_id).await?;
    render_playlist(client, api_address, &playlist, surface).await
}

/// Writes the playlist's display fields, then resolves each entry and appends
/// one block per video.
///
/// Videos are fetched one at a time, in entry order, so the append order of
/// the blocks always matches the playlist. The playlist thumbnail is borrowed
/// from the first video that carries one.
pub async fn render_playlist(
    client: &Client,
    api_address: &str,
    playlist: &Playlist,
    surface: &mut impl DisplayTargets,
) -> Result<(), ManagerError> {
    apply_value(surface, PLAYLIST_PATH, &playlist.full_path);
    apply_text(surface, PLAYLIST_TITLE, &playlist.title);
    apply_text(surface, PLAYLIST_CREATED_AT, &playlist.created_at);
    apply_text(surface, PLAYLIST_LAST_MODIFIED_AT, &playlist.last_modified_at);

    let fetches = stream::iter(playlist.video_ids())
        .then(|video_id| get_video(client, api_address, video_id));
    pin_mut!(fetches);

    let mut playlist_thumbnail: Option<String> = None;
    while let Some(video) = fetches.try_next().await? {
        if playlist_thumbnail.is_none() {
            playlist_thumbnail = video.thumbnail.clone();
        }
        if !surface.append_video_block(video_block(&video)) {
            tracing::debug!("video list missing, skipped block for {}", video.video_id);
        }
    }

    if let Some(thumbnail) = playlist_thumbnail {
        apply_image(surface, PLAYLIST_THUMBNAIL, &thumbnail);
    }

    Ok(())
}

fn video_block(video: &Video) -> VideoBlock {
    VideoBlock {
        title: video.title.clone(),
        url: video.url.clone(),
        uploader: video.uploader.clone(),
        view_count: video.view_count,
        upload_date: video.upload_date.clone(),
        thumbnail: video
            .thumbnail
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
    }
}

fn apply_text(surface: &mut impl DisplayTargets, target: &str, text: &str) {
    if !surface.set_text(target, text) {
        tracing::debug!("display target {} missing, skipped", target);
    }
}

fn apply_value(surface: &mut impl DisplayTargets, target: &str, value: &str) {
    if !surface.set_value(target, value) {
        tracing::debug!("display target {} missing, skipped", target);
    }
}

fn apply_image(surface: &mut impl DisplayTargets, target: &str, source: &str) {
    if !surface.set_image(target, source) {
        tracing::debug!("display target {} missing, skipped", target);
    }
}

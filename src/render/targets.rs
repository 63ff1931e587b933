//! Display targets the renderer writes into. The host page addresses its
//! elements by these ids; a surface may carry any subset of them.

pub const PLAYLIST_PATH: &str = "playlist-path";
pub const PLAYLIST_TITLE: &str = "playlist-title";
pub const PLAYLIST_CREATED_AT: &str = "playlist-created-at";
pub const PLAYLIST_LAST_MODIFIED_AT: &str = "playlist-last-modified-at";
pub const PLAYLIST_THUMBNAIL: &str = "playlist-thumbnail";
pub const VIDEO_LIST: &str = "video-list";
pub const SELECTED_COUNT: &str = "selected-count";
pub const MOVE_SELECTED: &str = "move-selected";

/// Shown for videos delivered without a thumbnail of their own.
pub const PLACEHOLDER_THUMBNAIL: &str = "placeholders/sddefault.jpg";

/// One synthesized entry in the video list.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoBlock {
    pub title: String,
    pub url: String,
    pub uploader: String,
    pub view_count: i64,
    pub upload_date: String,
    pub thumbnail: String,
}

/// A display surface the renderer can write into.
///
/// Every write reports whether the surface carried the target; writing to a
/// missing target is a skip, never a failure.
pub trait DisplayTargets {
    fn set_text(&mut self, target: &str, text: &str) -> bool;
    fn set_value(&mut self, target: &str, value: &str) -> bool;
    fn set_image(&mut self, target: &str, source: &str) -> bool;
    fn append_video_block(&mut self, block: VideoBlock) -> bool;
}

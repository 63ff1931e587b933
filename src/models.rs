#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub full_path: String,
    pub created_at: String,
    pub last_modified_at: String,
    pub entries: Vec<PlaylistEntry>,
}

impl Playlist {
    /// Video ids in playlist order.
    pub fn video_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    pub id: String,
    pub inserted_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub video_id: String,
    pub url: String,
    pub title: String,
    pub uploader: String,
    pub view_count: i64,
    pub upload_date: String,
    pub thumbnail: Option<String>,
}

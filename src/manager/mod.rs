pub mod playlists;
pub mod videos;

#[cfg(test)]
pub mod testserver;

//! Playlist model

use serde::{Deserialize, Serialize};

/// A playlist: a duplicate-free set of song references owned by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Database ID
    pub id: i64,
    /// Playlist name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Owning client ID (plain foreign key, not verified here)
    pub clientid: i64,
    /// Member song IDs, no duplicates, order not meaningful
    #[serde(default)]
    pub songids: Vec<i64>,
    /// Last updated timestamp
    pub last_updated: String,
    /// Song count (computed)
    #[serde(default)]
    pub count: i32,
}

impl Playlist {
    /// Create a new playlist
    pub fn new(name: String, clientid: i64) -> Self {
        Self {
            id: 0,
            name,
            description: String::new(),
            clientid,
            songids: Vec::new(),
            last_updated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            count: 0,
        }
    }

    /// Initialize computed fields
    pub fn init(&mut self) {
        self.count = self.songids.len() as i32;
    }

    /// Create from database row
    pub fn from_db_row(
        id: i64,
        name: String,
        description: String,
        clientid: i64,
        songids: Vec<i64>,
        last_updated: String,
    ) -> Self {
        let mut playlist = Self {
            id,
            name,
            description,
            clientid,
            songids,
            last_updated,
            count: 0,
        };
        playlist.init();
        playlist
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::new(String::new(), 0)
    }
}

impl PartialEq for Playlist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Playlist {}

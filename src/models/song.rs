//! Song model

use serde::{Deserialize, Serialize};

/// A catalog entry created by the importer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// Database ID
    pub id: i64,
    /// Path to the audio file (unique)
    pub filepath: String,
    /// Track title
    pub title: String,
    /// Artist name
    #[serde(default)]
    pub artist: String,
    /// Album name
    #[serde(default)]
    pub album: String,
    /// Release year, 0 when unknown
    #[serde(default)]
    pub year: i32,
    /// Genre reference, absent when the tag had none
    #[serde(default)]
    pub genre_id: Option<i64>,
}

impl Song {
    pub fn new(filepath: String, title: String) -> Self {
        Self {
            id: 0,
            filepath,
            title,
            artist: String::new(),
            album: String::new(),
            year: 0,
            genre_id: None,
        }
    }
}

impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Song {}

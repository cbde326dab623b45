//! Playlist CRUD functions

use anyhow::Result;

use crate::db::tables::PlaylistTable;
use crate::models::Playlist;

/// Playlist library functions
pub struct PlaylistLib;

impl PlaylistLib {
    /// Get all playlists, optionally scoped to a client
    pub async fn get_all(clientid: Option<i64>) -> Result<Vec<Playlist>> {
        PlaylistTable::all(clientid).await
    }

    /// Get playlist by id
    pub async fn get_by_id(id: i64) -> Result<Option<Playlist>> {
        PlaylistTable::get_by_id(id).await
    }

    /// Create a new playlist
    pub async fn create(name: &str, description: Option<&str>, clientid: i64) -> Result<i64> {
        let mut playlist = Playlist::new(name.to_string(), clientid);
        if let Some(desc) = description {
            playlist.description = desc.to_string();
        }
        PlaylistTable::insert(&playlist).await
    }

    /// Update playlist metadata
    pub async fn update(id: i64, name: Option<&str>, description: Option<&str>) -> Result<()> {
        if let Some(mut playlist) = PlaylistTable::get_by_id(id).await? {
            if let Some(n) = name {
                playlist.name = n.to_string();
            }
            if let Some(d) = description {
                playlist.description = d.to_string();
            }
            PlaylistTable::update(&playlist).await
        } else {
            Err(anyhow::anyhow!("Playlist not found"))
        }
    }

    /// Delete playlist
    pub async fn delete(id: i64, clientid: i64) -> Result<()> {
        PlaylistTable::delete(id, clientid).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testdb;

    #[tokio::test]
    async fn test_create_update_delete() {
        testdb::setup().await;

        let id = PlaylistLib::create("lib_roadtrip", Some("long drives"), 1)
            .await
            .unwrap();

        let playlist = PlaylistLib::get_by_id(id).await.unwrap().unwrap();
        assert_eq!(playlist.name, "lib_roadtrip");
        assert_eq!(playlist.description, "long drives");
        assert_eq!(playlist.clientid, 1);

        PlaylistLib::update(id, Some("lib_roadtrip2"), None)
            .await
            .unwrap();
        let playlist = PlaylistLib::get_by_id(id).await.unwrap().unwrap();
        assert_eq!(playlist.name, "lib_roadtrip2");
        assert_eq!(playlist.description, "long drives");

        PlaylistLib::delete(id, 1).await.unwrap();
        assert!(PlaylistLib::get_by_id(id).await.unwrap().is_none());
    }
}

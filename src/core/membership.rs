//! Playlist membership mutation

use anyhow::Result;
use thiserror::Error;

use crate::db::tables::{PlaylistTable, SongTable};
use crate::models::Song;

/// Expected failures when adding a song to a playlist
///
/// Only the add path has these; removal and reads never report a missing
/// playlist or song.
#[derive(Debug, Error)]
pub enum AddSongError {
    #[error("playlist not found")]
    PlaylistNotFound,
    #[error("song not found")]
    SongNotFound,
    #[error("store failure: {0}")]
    Store(anyhow::Error),
}

/// Playlist membership functions
pub struct Membership;

impl Membership {
    /// Add a song to a playlist
    ///
    /// Idempotent: adding an existing member succeeds without change.
    pub async fn add_song(playlist_id: i64, song_id: i64) -> Result<(), AddSongError> {
        let playlist = PlaylistTable::get_by_id(playlist_id)
            .await
            .map_err(AddSongError::Store)?;

        let mut playlist = match playlist {
            Some(p) => p,
            None => return Err(AddSongError::PlaylistNotFound),
        };

        let song = SongTable::get_by_id(song_id)
            .await
            .map_err(AddSongError::Store)?;
        if song.is_none() {
            return Err(AddSongError::SongNotFound);
        }

        if playlist.songids.contains(&song_id) {
            return Ok(());
        }

        playlist.songids.push(song_id);
        PlaylistTable::update(&playlist)
            .await
            .map_err(AddSongError::Store)
    }

    /// Remove a song from a playlist
    ///
    /// Deliberately asymmetric with add: a missing playlist or non-member
    /// song is a silent no-op, so removal is always safe to retry.
    pub async fn remove_song(playlist_id: i64, song_id: i64) -> Result<()> {
        let mut playlist = match PlaylistTable::get_by_id(playlist_id).await? {
            Some(p) => p,
            None => return Ok(()),
        };

        if !playlist.songids.contains(&song_id) {
            return Ok(());
        }

        playlist.songids.retain(|id| *id != song_id);
        PlaylistTable::update(&playlist).await
    }

    /// Resolve a playlist's membership to songs
    ///
    /// A missing or empty playlist yields an empty vec, never an error.
    pub async fn get_songs(playlist_id: i64) -> Result<Vec<Song>> {
        let playlist = match PlaylistTable::get_by_id(playlist_id).await? {
            Some(p) => p,
            None => return Ok(Vec::new()),
        };

        let mut songs = Vec::with_capacity(playlist.songids.len());
        for id in &playlist.songids {
            if let Some(song) = SongTable::get_by_id(*id).await? {
                songs.push(song);
            }
        }

        Ok(songs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testdb;
    use crate::models::{Playlist, Song};

    async fn make_playlist(name: &str) -> i64 {
        PlaylistTable::insert(&Playlist::new(name.to_string(), 1))
            .await
            .unwrap()
    }

    async fn make_song(filepath: &str) -> i64 {
        SongTable::insert(&Song::new(filepath.to_string(), filepath.to_string()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        testdb::setup().await;

        let pl = make_playlist("mem_idem").await;
        let song = make_song("mem/idem.mp3").await;

        Membership::add_song(pl, song).await.unwrap();
        Membership::add_song(pl, song).await.unwrap();

        let songs = Membership::get_songs(pl).await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, song);
    }

    #[tokio::test]
    async fn test_add_missing_playlist_errors() {
        testdb::setup().await;

        let song = make_song("mem/orphan.mp3").await;

        let err = Membership::add_song(999_999, song).await.unwrap_err();
        assert!(matches!(err, AddSongError::PlaylistNotFound));
    }

    #[tokio::test]
    async fn test_add_missing_song_errors() {
        testdb::setup().await;

        let pl = make_playlist("mem_nosong").await;

        let err = Membership::add_song(pl, 999_999).await.unwrap_err();
        assert!(matches!(err, AddSongError::SongNotFound));

        assert!(Membership::get_songs(pl).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_remove_twice_is_a_noop() {
        testdb::setup().await;

        let pl = make_playlist("mem_remove").await;
        let a = make_song("mem/remove_a.mp3").await;
        let b = make_song("mem/remove_b.mp3").await;

        Membership::add_song(pl, a).await.unwrap();
        Membership::add_song(pl, b).await.unwrap();

        Membership::remove_song(pl, a).await.unwrap();
        Membership::remove_song(pl, a).await.unwrap();

        let songs = Membership::get_songs(pl).await.unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, b);
    }

    #[tokio::test]
    async fn test_remove_missing_playlist_is_silent() {
        testdb::setup().await;

        Membership::remove_song(999_999, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_songs_missing_playlist_is_empty() {
        testdb::setup().await;

        assert!(Membership::get_songs(999_999).await.unwrap().is_empty());
    }
}

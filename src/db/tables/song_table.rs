//! Song table operations

use anyhow::Result;
use sqlx::FromRow;

use crate::db::DbEngine;
use crate::models::Song;

/// Database row for song table
#[derive(Debug, FromRow)]
struct SongRow {
    id: i64,
    filepath: String,
    title: String,
    artist: String,
    album: String,
    year: i32,
    genreid: Option<i64>,
}

impl SongRow {
    fn into_song(self) -> Song {
        Song {
            id: self.id,
            filepath: self.filepath,
            title: self.title,
            artist: self.artist,
            album: self.album,
            year: self.year,
            genre_id: self.genreid,
        }
    }
}

/// Song table operations
pub struct SongTable;

impl SongTable {
    /// Get all songs
    pub async fn all() -> Result<Vec<Song>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let rows: Vec<SongRow> = sqlx::query_as("SELECT * FROM song").fetch_all(pool).await?;

        Ok(rows.into_iter().map(|r| r.into_song()).collect())
    }

    /// Get song by ID
    pub async fn get_by_id(id: i64) -> Result<Option<Song>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: Option<SongRow> = sqlx::query_as("SELECT * FROM song WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|r| r.into_song()))
    }

    /// Get all songs tagged with a genre
    pub async fn get_by_genre(genre_id: i64) -> Result<Vec<Song>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let rows: Vec<SongRow> = sqlx::query_as("SELECT * FROM song WHERE genreid = ?")
            .bind(genre_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_song()).collect())
    }

    /// Insert a song
    ///
    /// Duplicate filepaths are rejected by the unique index; the importer
    /// checks first and treats a hit as "already cataloged".
    pub async fn insert(song: &Song) -> Result<i64> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let result = sqlx::query(
            "INSERT INTO song (filepath, title, artist, album, year, genreid) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&song.filepath)
        .bind(&song.title)
        .bind(&song.artist)
        .bind(&song.album)
        .bind(song.year)
        .bind(song.genre_id)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Check whether a filepath is already cataloged
    pub async fn exists_by_filepath(filepath: &str) -> Result<bool> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM song WHERE filepath = ?")
            .bind(filepath)
            .fetch_one(pool)
            .await?;

        Ok(row.0 > 0)
    }

    /// Get song count
    pub async fn count() -> Result<i64> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM song")
            .fetch_one(pool)
            .await?;

        Ok(row.0)
    }
}

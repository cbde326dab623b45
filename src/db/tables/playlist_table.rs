//! Playlist table operations

use anyhow::Result;
use sqlx::FromRow;

use crate::db::DbEngine;
use crate::models::Playlist;

/// Database row for playlist table
#[derive(Debug, FromRow)]
struct PlaylistRow {
    id: i64,
    clientid: i64,
    name: String,
    description: String,
    songids: String,
    last_updated: String,
}

impl PlaylistRow {
    fn into_playlist(self) -> Playlist {
        let songids: Vec<i64> = serde_json::from_str(&self.songids).unwrap_or_default();

        Playlist::from_db_row(
            self.id,
            self.name,
            self.description,
            self.clientid,
            songids,
            self.last_updated,
        )
    }
}

/// Playlist table operations
pub struct PlaylistTable;

impl PlaylistTable {
    /// Get all playlists, optionally scoped to a client
    pub async fn all(clientid: Option<i64>) -> Result<Vec<Playlist>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let rows: Vec<PlaylistRow> = if let Some(cid) = clientid {
            sqlx::query_as("SELECT * FROM playlist WHERE clientid = ?")
                .bind(cid)
                .fetch_all(pool)
                .await?
        } else {
            sqlx::query_as("SELECT * FROM playlist")
                .fetch_all(pool)
                .await?
        };

        Ok(rows.into_iter().map(|r| r.into_playlist()).collect())
    }

    /// Get playlist by ID
    pub async fn get_by_id(id: i64) -> Result<Option<Playlist>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: Option<PlaylistRow> = sqlx::query_as("SELECT * FROM playlist WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|r| r.into_playlist()))
    }

    /// Insert playlist
    pub async fn insert(playlist: &Playlist) -> Result<i64> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let songids = serde_json::to_string(&playlist.songids)?;

        let result = sqlx::query(
            "INSERT INTO playlist (clientid, name, description, songids, last_updated) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(playlist.clientid)
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(&songids)
        .bind(&playlist.last_updated)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Update playlist, refreshing the last_updated stamp
    ///
    /// Concurrent writers to the same playlist are last-writer-wins.
    pub async fn update(playlist: &Playlist) -> Result<()> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let songids = serde_json::to_string(&playlist.songids)?;
        let last_updated = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        sqlx::query(
            "UPDATE playlist SET name = ?, description = ?, songids = ?, last_updated = ? WHERE id = ?",
        )
        .bind(&playlist.name)
        .bind(&playlist.description)
        .bind(&songids)
        .bind(&last_updated)
        .bind(playlist.id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Delete playlist
    pub async fn delete(id: i64, clientid: i64) -> Result<bool> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let result = if clientid > 0 {
            sqlx::query("DELETE FROM playlist WHERE id = ? AND clientid = ?")
                .bind(id)
                .bind(clientid)
                .execute(pool)
                .await?
        } else {
            sqlx::query("DELETE FROM playlist WHERE id = ?")
                .bind(id)
                .execute(pool)
                .await?
        };

        Ok(result.rows_affected() > 0)
    }
}

//! Genre table operations

use anyhow::Result;
use sqlx::FromRow;

use crate::db::DbEngine;
use crate::models::Genre;

/// Database row for genre table
#[derive(Debug, FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

impl GenreRow {
    fn into_genre(self) -> Genre {
        Genre {
            id: self.id,
            name: self.name,
        }
    }
}

/// Genre table operations
pub struct GenreTable;

impl GenreTable {
    /// Get all genres
    pub async fn all() -> Result<Vec<Genre>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let rows: Vec<GenreRow> = sqlx::query_as("SELECT * FROM genre ORDER BY name")
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_genre()).collect())
    }

    /// Get genre by ID
    pub async fn get_by_id(id: i64) -> Result<Option<Genre>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: Option<GenreRow> = sqlx::query_as("SELECT * FROM genre WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|r| r.into_genre()))
    }

    /// Get genre by name, case-insensitive
    pub async fn get_by_name(name: &str) -> Result<Option<Genre>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: Option<GenreRow> = sqlx::query_as("SELECT * FROM genre WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|r| r.into_genre()))
    }

    /// Get the genre with the given name, creating it if missing
    pub async fn ensure(name: &str) -> Result<Genre> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        sqlx::query("INSERT INTO genre (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;

        Self::get_by_name(name)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Genre '{}' missing after insert", name))
    }
}

//! Database engine and connection management

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

static DB_ENGINE: OnceCell<Arc<DbEngine>> = OnceCell::new();

/// Database engine wrapper
pub struct DbEngine {
    pool: SqlitePool,
}

impl DbEngine {
    /// Get the global database engine instance
    pub fn get() -> Result<Arc<DbEngine>> {
        DB_ENGINE
            .get()
            .map(Arc::clone)
            .context("Database not initialized")
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Setup the SQLite database at the given path
pub async fn setup_sqlite(db_path: &Path) -> Result<()> {
    // Create connection options with SQLite pragmas
    let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", db_path.display()))?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30))
        .pragma("cache_size", "5000")
        .pragma("foreign_keys", "ON");

    // Create connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    // Initialize the engine
    let engine = DbEngine { pool };

    DB_ENGINE
        .set(Arc::new(engine))
        .map_err(|_| anyhow::anyhow!("Database already initialized"))?;

    // Create tables
    create_tables().await?;

    Ok(())
}

/// Create all database tables
async fn create_tables() -> Result<()> {
    let engine = DbEngine::get()?;
    let pool = engine.pool();

    // Client table. The NOCASE unique index is the enforcement point for
    // case-insensitive username uniqueness under concurrent registration.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS client (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            password TEXT NOT NULL,
            salt TEXT NOT NULL,
            bio TEXT NOT NULL DEFAULT '',
            image TEXT NOT NULL DEFAULT '',
            preferred_genres TEXT NOT NULL DEFAULT '[]'
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_client_username
            ON client(username COLLATE NOCASE);
        "#,
    )
    .execute(pool)
    .await?;

    // Genre table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS genre (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL COLLATE NOCASE UNIQUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Song table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS song (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            filepath TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            artist TEXT NOT NULL DEFAULT '',
            album TEXT NOT NULL DEFAULT '',
            year INTEGER NOT NULL DEFAULT 0,
            genreid INTEGER REFERENCES genre(id)
        );
        CREATE INDEX IF NOT EXISTS idx_song_genreid ON song(genreid);
        CREATE INDEX IF NOT EXISTS idx_song_filepath ON song(filepath);
        "#,
    )
    .execute(pool)
    .await?;

    // Playlist table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS playlist (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            clientid INTEGER NOT NULL,
            name TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            songids TEXT NOT NULL DEFAULT '[]',
            last_updated TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_playlist_clientid ON playlist(clientid);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
pub(crate) mod testdb {
    use super::setup_sqlite;

    static TEST_DB: tokio::sync::OnceCell<tempfile::TempDir> =
        tokio::sync::OnceCell::const_new();

    /// Initialize a scratch database shared by all tests in the binary
    ///
    /// The TempDir guard is held for the life of the process so the database
    /// file stays valid across tests.
    pub(crate) async fn setup() {
        TEST_DB
            .get_or_init(|| async {
                let dir = tempfile::tempdir().expect("scratch dir");
                setup_sqlite(&dir.path().join("tunebox-test.db"))
                    .await
                    .expect("test db setup");
                dir
            })
            .await;
    }
}

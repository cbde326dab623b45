//! Client table operations

use anyhow::Result;
use sqlx::FromRow;

use crate::db::DbEngine;
use crate::models::Client;

/// Database row for client table
#[derive(Debug, FromRow)]
struct ClientRow {
    id: i64,
    username: String,
    password: String,
    salt: String,
    bio: String,
    image: String,
    preferred_genres: String,
}

impl ClientRow {
    fn into_client(self) -> Client {
        let preferred_genres: Vec<i64> =
            serde_json::from_str(&self.preferred_genres).unwrap_or_default();

        Client {
            id: self.id,
            username: self.username,
            password: self.password,
            salt: self.salt,
            bio: self.bio,
            image: self.image,
            preferred_genres,
        }
    }
}

/// Client table operations
pub struct ClientTable;

impl ClientTable {
    /// Get all clients
    pub async fn all() -> Result<Vec<Client>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let rows: Vec<ClientRow> = sqlx::query_as("SELECT * FROM client")
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_client()).collect())
    }

    /// Get client by ID
    pub async fn get_by_id(id: i64) -> Result<Option<Client>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let row: Option<ClientRow> = sqlx::query_as("SELECT * FROM client WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(|r| r.into_client()))
    }

    /// Find clients by case-insensitive username match
    ///
    /// Returns all matches; uniqueness is enforced at write time, so callers
    /// pick the first row if the index ever let more than one through.
    pub async fn find_by_username(username: &str) -> Result<Vec<Client>> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let rows: Vec<ClientRow> =
            sqlx::query_as("SELECT * FROM client WHERE username = ? COLLATE NOCASE")
                .bind(username)
                .fetch_all(pool)
                .await?;

        Ok(rows.into_iter().map(|r| r.into_client()).collect())
    }

    /// Insert a client
    ///
    /// A duplicate username surfaces as a sqlx unique-violation error, which
    /// the registration path maps to its own taxonomy.
    pub async fn insert(client: &Client) -> Result<i64> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let preferred_genres = serde_json::to_string(&client.preferred_genres)?;

        let result = sqlx::query(
            "INSERT INTO client (username, password, salt, bio, image, preferred_genres) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&client.username)
        .bind(&client.password)
        .bind(&client.salt)
        .bind(&client.bio)
        .bind(&client.image)
        .bind(&preferred_genres)
        .execute(pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Update client profile fields
    pub async fn update(client: &Client) -> Result<()> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let preferred_genres = serde_json::to_string(&client.preferred_genres)?;

        sqlx::query(
            "UPDATE client SET username = ?, bio = ?, image = ?, preferred_genres = ? WHERE id = ?",
        )
        .bind(&client.username)
        .bind(&client.bio)
        .bind(&client.image)
        .bind(&preferred_genres)
        .bind(client.id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Replace a client's preferred genres
    ///
    /// Preferences are a set: duplicate ids collapse before persisting.
    pub async fn set_preferred_genres(id: i64, genre_ids: &[i64]) -> Result<()> {
        let engine = DbEngine::get()?;
        let pool = engine.pool();

        let mut ids = genre_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let preferred_genres = serde_json::to_string(&ids)?;

        sqlx::query("UPDATE client SET preferred_genres = ? WHERE id = ?")
            .bind(&preferred_genres)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testdb;

    #[tokio::test]
    async fn test_preferred_genres_are_a_set() {
        testdb::setup().await;

        let client = Client::new("tbl_gina".to_string(), "h".to_string(), "s".to_string());
        let id = ClientTable::insert(&client).await.unwrap();

        ClientTable::set_preferred_genres(id, &[7, 3, 7, 3, 9])
            .await
            .unwrap();

        let stored = ClientTable::get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.preferred_genres, vec![3, 7, 9]);
    }
}

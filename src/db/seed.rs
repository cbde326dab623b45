//! Startup genre seeding

use anyhow::Result;
use tracing::debug;

use crate::db::tables::GenreTable;

/// Genres created on first startup
const DEFAULT_GENRES: &[&str] = &[
    "Rock",
    "Pop",
    "Jazz",
    "Classical",
    "Hip-Hop",
    "Electronic",
    "Country",
    "Blues",
    "Reggae",
    "Metal",
];

/// Insert the default genres, skipping any that already exist
pub async fn seed_genres() -> Result<()> {
    for name in DEFAULT_GENRES {
        let genre = GenreTable::ensure(name).await?;
        debug!("Seeded genre '{}' (id {})", genre.name, genre.id);
    }

    Ok(())
}

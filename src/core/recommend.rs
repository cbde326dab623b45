//! Genre-weighted song recommendations

use anyhow::Result;
use rand::seq::SliceRandom;

use crate::db::tables::SongTable;
use crate::models::{Client, Song};

/// Maximum number of songs returned per call
const RECOMMEND_LIMIT: usize = 5;

/// Recommendation functions
pub struct Recommender;

impl Recommender {
    /// Recommend up to 5 songs for a client
    ///
    /// Picks one preferred genre uniformly at random and samples from its
    /// songs. A sparse genre is not topped up from the rest of the catalog.
    /// When the client has no preferences, or the chosen genre has no songs,
    /// the whole catalog is sampled instead. An empty catalog yields an
    /// empty vec.
    pub async fn recommend(client: &Client) -> Result<Vec<Song>> {
        if let Some(&genre_id) = client.preferred_genres.choose(&mut rand::thread_rng()) {
            let songs = SongTable::get_by_genre(genre_id).await?;
            if !songs.is_empty() {
                return Ok(sample(songs));
            }
        }

        Ok(sample(SongTable::all().await?))
    }
}

/// Shuffle uniformly and keep the first `min(5, n)` songs
fn sample(mut songs: Vec<Song>) -> Vec<Song> {
    songs.shuffle(&mut rand::thread_rng());
    songs.truncate(RECOMMEND_LIMIT);
    songs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tables::GenreTable;
    use crate::db::testdb;
    use std::collections::HashSet;

    fn song(id: i64, genre_id: Option<i64>) -> Song {
        Song {
            id,
            genre_id,
            ..Song::new(format!("rec/{}.mp3", id), format!("song {}", id))
        }
    }

    fn song_at(path: &str, genre_id: Option<i64>) -> Song {
        Song {
            genre_id,
            ..Song::new(path.to_string(), path.to_string())
        }
    }

    #[test]
    fn test_sample_empty() {
        assert!(sample(Vec::new()).is_empty());
    }

    #[test]
    fn test_sample_caps_at_limit() {
        let songs: Vec<Song> = (1..=20).map(|i| song(i, None)).collect();

        let picked = sample(songs);
        assert_eq!(picked.len(), 5);

        let ids: HashSet<i64> = picked.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_sample_keeps_all_when_few() {
        let songs: Vec<Song> = (1..=3).map(|i| song(i, None)).collect();
        assert_eq!(sample(songs).len(), 3);
    }

    #[tokio::test]
    async fn test_preferred_genre_never_leaks() {
        testdb::setup().await;

        let jazz = GenreTable::ensure("RecJazz").await.unwrap();
        let rock = GenreTable::ensure("RecRock").await.unwrap();

        for i in 0..3 {
            SongTable::insert(&song_at(&format!("rec/jazz{}.mp3", i), Some(jazz.id)))
                .await
                .unwrap();
        }
        for i in 0..2 {
            SongTable::insert(&song_at(&format!("rec/rock{}.mp3", i), Some(rock.id)))
                .await
                .unwrap();
        }

        let mut client = Client::new("rec_lena".to_string(), String::new(), String::new());
        client.preferred_genres = vec![jazz.id];

        // 2 rock + 3 jazz in the catalog, jazz preferred: every run returns
        // exactly the 3 jazz songs, never a rock song
        for _ in 0..10 {
            let picks = Recommender::recommend(&client).await.unwrap();
            assert_eq!(picks.len(), 3);
            assert!(picks.iter().all(|s| s.genre_id == Some(jazz.id)));

            let ids: HashSet<i64> = picks.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), picks.len());
        }
    }

    #[tokio::test]
    async fn test_empty_genre_falls_back_to_catalog() {
        testdb::setup().await;

        let silent = GenreTable::ensure("RecSilent").await.unwrap();
        SongTable::insert(&song_at("rec/fallback.mp3", None))
            .await
            .unwrap();

        let mut client = Client::new("rec_mo".to_string(), String::new(), String::new());
        client.preferred_genres = vec![silent.id];

        let picks = Recommender::recommend(&client).await.unwrap();
        assert!(!picks.is_empty());
        assert!(picks.len() <= 5);
    }

    #[tokio::test]
    async fn test_bounds_hold_without_preferences() {
        testdb::setup().await;

        let client = Client::new("rec_nia".to_string(), String::new(), String::new());

        let picks = Recommender::recommend(&client).await.unwrap();
        assert!(picks.len() <= 5);

        let ids: HashSet<i64> = picks.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), picks.len());
    }
}

//! Catalog importer
//!
//! Walks a music directory, reads tags and inserts new songs. Files whose
//! path is already cataloged are skipped, so rescans are cheap.

use anyhow::Result;
use lofty::{Accessor, Probe, TaggedFileExt};
use std::path::Path;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::db::tables::{GenreTable, SongTable};
use crate::models::Song;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "m4a", "ogg", "opus", "wav"];

/// Outcome of one scan pass
#[derive(Debug, Default, serde::Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Catalog importer
pub struct Importer;

impl Importer {
    /// Scan a directory tree and catalog any new audio files
    pub async fn scan(root: &Path) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let ext = match path.extension().and_then(|e| e.to_str()) {
                Some(e) => e.to_lowercase(),
                None => continue,
            };
            if !AUDIO_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }

            let filepath = path.to_string_lossy().to_string();
            if SongTable::exists_by_filepath(&filepath).await? {
                report.skipped += 1;
                continue;
            }

            match Self::import_file(path, &filepath).await {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    warn!("Failed to import {}: {}", filepath, e);
                    report.failed += 1;
                }
            }
        }

        info!(
            "Import finished: {} new, {} skipped, {} failed",
            report.imported, report.skipped, report.failed
        );

        Ok(report)
    }

    /// Read tags from one file and insert it
    async fn import_file(path: &Path, filepath: &str) -> Result<()> {
        let tagged = Probe::open(path)?.read()?;
        let tag = tagged.primary_tag().or_else(|| tagged.first_tag());

        let fallback_title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Unknown")
            .to_string();

        let mut song = Song::new(filepath.to_string(), fallback_title);

        if let Some(tag) = tag {
            if let Some(title) = tag.title() {
                if !title.trim().is_empty() {
                    song.title = title.to_string();
                }
            }
            if let Some(artist) = tag.artist() {
                song.artist = artist.to_string();
            }
            if let Some(album) = tag.album() {
                song.album = album.to_string();
            }
            if let Some(year) = tag.year() {
                song.year = year as i32;
            }
            if let Some(genre) = tag.genre() {
                let name = genre.trim().to_string();
                if !name.is_empty() {
                    song.genre_id = Some(GenreTable::ensure(&name).await?.id);
                }
            }
        }

        SongTable::insert(&song).await?;

        Ok(())
    }
}

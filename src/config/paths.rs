//! Path management for tunebox

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;

static PATHS: OnceCell<Arc<Paths>> = OnceCell::new();

/// Manages filesystem paths for the application
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config directory path
    config_dir: PathBuf,
    /// Music library root, when configured
    music_dir: Option<PathBuf>,
}

impl Paths {
    /// Initialize the paths singleton
    pub fn init(config: Option<PathBuf>, music: Option<PathBuf>) -> Result<Arc<Paths>> {
        let paths = PATHS.get_or_try_init(|| {
            let paths = Self::new(config, music)?;
            Ok::<_, anyhow::Error>(Arc::new(paths))
        })?;
        Ok(Arc::clone(paths))
    }

    /// Get the global paths instance
    pub fn get() -> Result<Arc<Paths>> {
        PATHS.get().map(Arc::clone).context("Paths not initialized")
    }

    fn new(config_override: Option<PathBuf>, music: Option<PathBuf>) -> Result<Self> {
        let config_dir = if let Some(path) = config_override {
            path
        } else {
            directories::ProjectDirs::from("", "", "tunebox")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".tunebox"))
        };

        std::fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create config dir {:?}", config_dir))?;

        Ok(Self {
            config_dir,
            music_dir: music,
        })
    }

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the application database path
    pub fn app_db_path(&self) -> PathBuf {
        self.config_dir.join("tunebox.db")
    }

    /// Get the music library root, if configured
    pub fn music_dir(&self) -> Option<&Path> {
        self.music_dir.as_deref()
    }
}

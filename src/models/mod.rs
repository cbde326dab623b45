//! Data models for tunebox
//!
//! This module contains all the core data structures used throughout the application.

mod client;
mod genre;
mod playlist;
mod song;

pub use client::{Client, PublicClient, DEFAULT_AVATAR};
pub use genre::Genre;
pub use playlist::Playlist;
pub use song::Song;

//! Client (user account) model

use serde::{Deserialize, Serialize};

/// Sentinel avatar used when a client has not set an image
pub const DEFAULT_AVATAR: &str = "default-avatar.webp";

/// A registered client account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Database ID
    pub id: i64,
    /// Username (unique, case-insensitive)
    pub username: String,
    /// Password hash, base64 (not serialized to JSON)
    #[serde(skip_serializing)]
    pub password: String,
    /// Per-client random salt, base64 (not serialized to JSON)
    #[serde(skip_serializing)]
    pub salt: String,
    /// Free-text bio
    #[serde(default)]
    pub bio: String,
    /// Profile image reference
    #[serde(default)]
    pub image: String,
    /// Preferred genre IDs
    #[serde(default)]
    pub preferred_genres: Vec<i64>,
}

impl Client {
    /// Create a new client with defaults applied
    pub fn new(username: String, password_hash: String, salt: String) -> Self {
        Self {
            id: 0,
            username,
            password: password_hash,
            salt,
            bio: String::new(),
            image: DEFAULT_AVATAR.to_string(),
            preferred_genres: Vec::new(),
        }
    }

    /// Serialize without credentials (for API responses)
    pub fn to_public(&self) -> PublicClient {
        PublicClient {
            id: self.id,
            username: self.username.clone(),
            bio: self.bio.clone(),
            image: self.image.clone(),
            preferred_genres: self.preferred_genres.clone(),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(String::new(), String::new(), String::new())
    }
}

/// Public client info (no credentials)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicClient {
    pub id: i64,
    pub username: String,
    pub bio: String,
    pub image: String,
    pub preferred_genres: Vec<i64>,
}

//! Genre model

use serde::{Deserialize, Serialize};

/// A named music category, unique by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    /// Database ID
    pub id: i64,
    /// Genre name
    pub name: String,
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

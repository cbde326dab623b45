//! Database module for tunebox
//!
//! This module handles all database operations using SQLx with SQLite.

mod engine;
mod seed;
pub mod tables;

pub use engine::{setup_sqlite, DbEngine};
pub use seed::seed_genres;
pub use tables::*;

#[cfg(test)]
pub(crate) use engine::testdb;

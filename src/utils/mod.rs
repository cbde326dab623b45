//! Utility modules for tunebox

pub mod auth;

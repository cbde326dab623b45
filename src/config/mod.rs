//! Configuration module for tunebox

mod paths;

pub use paths::Paths;

//! Core library functions for tunebox

pub mod accounts;
pub mod importer;
pub mod membership;
pub mod playlistlib;
pub mod recommend;

pub use accounts::Accounts;
pub use importer::Importer;
pub use membership::Membership;
pub use playlistlib::PlaylistLib;
pub use recommend::Recommender;

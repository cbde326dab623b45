//! Database table operations

mod client_table;
mod genre_table;
mod playlist_table;
mod song_table;

pub use client_table::ClientTable;
pub use genre_table::GenreTable;
pub use playlist_table::PlaylistTable;
pub use song_table::SongTable;

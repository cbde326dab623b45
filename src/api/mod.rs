//! REST API routes for tunebox

pub mod auth;
pub mod catalog;
pub mod client;
pub mod playlist;

use actix_web::web;

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Auth routes
        .service(web::scope("/auth").configure(auth::configure))
        // Client routes
        .service(web::scope("/clients").configure(client::configure))
        // Playlist routes
        .service(web::scope("/playlists").configure(playlist::configure));

    // Catalog routes (top level)
    catalog::configure(cfg);
}

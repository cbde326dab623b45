//! Playlist API routes

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::core::membership::{AddSongError, Membership};
use crate::core::PlaylistLib;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub clientid: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePlaylistBody {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub clientid: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlaylistBody {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SongBody {
    pub songid: i64,
}

/// GET /playlists
#[get("")]
pub async fn list_playlists(query: web::Query<ListQuery>) -> impl Responder {
    match PlaylistLib::get_all(query.clientid).await {
        Ok(mut playlists) => {
            playlists.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
            HttpResponse::Ok().json(serde_json::json!({ "data": playlists }))
        }
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to get playlists"
        })),
    }
}

/// POST /playlists/new
#[post("/new")]
pub async fn create_playlist(body: web::Json<CreatePlaylistBody>) -> impl Responder {
    match PlaylistLib::create(&body.name, body.description.as_deref(), body.clientid).await {
        Ok(id) => match PlaylistLib::get_by_id(id).await {
            Ok(Some(playlist)) => {
                HttpResponse::Created().json(serde_json::json!({ "playlist": playlist }))
            }
            _ => HttpResponse::Created().json(serde_json::json!({ "id": id })),
        },
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Playlist could not be created"
        })),
    }
}

/// GET /playlists/{id}
#[get("/{id}")]
pub async fn get_playlist(path: web::Path<i64>) -> impl Responder {
    match PlaylistLib::get_by_id(*path).await {
        Ok(Some(playlist)) => HttpResponse::Ok().json(serde_json::json!({ "playlist": playlist })),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Playlist not found"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// PUT /playlists/{id}
#[put("/{id}")]
pub async fn update_playlist(
    path: web::Path<i64>,
    body: web::Json<UpdatePlaylistBody>,
) -> impl Responder {
    match PlaylistLib::update(*path, body.name.as_deref(), body.description.as_deref()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "msg": "Playlist updated" })),
        Err(_) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Playlist not found"
        })),
    }
}

/// DELETE /playlists/{id}
#[delete("/{id}")]
pub async fn delete_playlist(path: web::Path<i64>) -> impl Responder {
    match PlaylistLib::delete(*path, 0).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "msg": "Playlist deleted" })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to delete playlist"
        })),
    }
}

/// GET /playlists/{id}/songs
#[get("/{id}/songs")]
pub async fn get_songs(path: web::Path<i64>) -> impl Responder {
    match Membership::get_songs(*path).await {
        Ok(songs) => HttpResponse::Ok().json(serde_json::json!({ "songs": songs })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// POST /playlists/{id}/songs/add
#[post("/{id}/songs/add")]
pub async fn add_song(path: web::Path<i64>, body: web::Json<SongBody>) -> impl Responder {
    match Membership::add_song(*path, body.songid).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "msg": "Song added" })),
        Err(AddSongError::PlaylistNotFound) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Playlist not found"
        })),
        Err(AddSongError::SongNotFound) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Song not found"
        })),
        Err(AddSongError::Store(_)) => HttpResponse::InternalServerError().json(
            serde_json::json!({
                "error": "Failed to add song"
            }),
        ),
    }
}

/// POST /playlists/{id}/songs/remove
#[post("/{id}/songs/remove")]
pub async fn remove_song(path: web::Path<i64>, body: web::Json<SongBody>) -> impl Responder {
    match Membership::remove_song(*path, body.songid).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "msg": "Song removed" })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to remove song"
        })),
    }
}

/// Configure playlist routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_playlists)
        .service(create_playlist)
        .service(get_playlist)
        .service(update_playlist)
        .service(delete_playlist)
        .service(get_songs)
        .service(add_song)
        .service(remove_song);
}

//! Catalog API routes: genres, songs and import

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use std::path::PathBuf;

use crate::config::Paths;
use crate::core::Importer;
use crate::db::tables::{GenreTable, SongTable};

#[derive(Debug, Deserialize)]
pub struct ScanBody {
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// GET /genres
#[get("/genres")]
pub async fn list_genres() -> impl Responder {
    match GenreTable::all().await {
        Ok(genres) => HttpResponse::Ok().json(serde_json::json!({ "genres": genres })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// GET /songs
#[get("/songs")]
pub async fn list_songs() -> impl Responder {
    match SongTable::all().await {
        Ok(songs) => HttpResponse::Ok().json(serde_json::json!({ "songs": songs })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// POST /scan
#[post("/scan")]
pub async fn scan(body: web::Json<ScanBody>) -> impl Responder {
    let dir = match body.dir.clone() {
        Some(d) => d,
        None => match Paths::get().ok().and_then(|p| p.music_dir().map(PathBuf::from)) {
            Some(d) => d,
            None => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": "No music directory configured"
                }))
            }
        },
    };

    match Importer::scan(&dir).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Scan failed"
        })),
    }
}

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_genres).service(list_songs).service(scan);
}

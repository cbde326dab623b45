//! Client profile and recommendation API routes

use actix_web::{get, put, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::core::accounts::is_unique_violation;
use crate::core::Recommender;
use crate::db::tables::{ClientTable, GenreTable};

#[derive(Debug, Deserialize)]
pub struct UpdateProfileBody {
    pub username: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetGenresBody {
    pub genre_ids: Vec<i64>,
}

/// GET /clients
#[get("")]
pub async fn list_clients() -> impl Responder {
    match ClientTable::all().await {
        Ok(clients) => {
            let data: Vec<_> = clients.iter().map(|c| c.to_public()).collect();
            HttpResponse::Ok().json(serde_json::json!({ "clients": data }))
        }
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// GET /clients/{id}
#[get("/{id}")]
pub async fn get_client(path: web::Path<i64>) -> impl Responder {
    match ClientTable::get_by_id(*path).await {
        Ok(Some(client)) => HttpResponse::Ok().json(client.to_public()),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Client not found"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// PUT /clients/{id}/profile
#[put("/{id}/profile")]
pub async fn update_profile(
    path: web::Path<i64>,
    body: web::Json<UpdateProfileBody>,
) -> impl Responder {
    let mut client = match ClientTable::get_by_id(*path).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Client not found"
            }))
        }
        Err(_) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    };

    if let Some(ref username) = body.username {
        let username = username.trim();
        if username.is_empty() {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Invalid username"
            }));
        }
        client.username = username.to_string();
    }
    if let Some(ref bio) = body.bio {
        client.bio = bio.clone();
    }
    if let Some(ref image) = body.image {
        client.image = image.clone();
    }

    // a rename can collide with another account; the NOCASE unique index
    // still guards the invariant here
    match ClientTable::update(&client).await {
        Ok(()) => HttpResponse::Ok().json(client.to_public()),
        Err(e) if is_unique_violation(&e) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Username already taken"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to update profile"
        })),
    }
}

/// PUT /clients/{id}/genres
#[put("/{id}/genres")]
pub async fn set_preferred_genres(
    path: web::Path<i64>,
    body: web::Json<SetGenresBody>,
) -> impl Responder {
    // preferred genres must reference existing genres
    for genre_id in &body.genre_ids {
        match GenreTable::get_by_id(*genre_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return HttpResponse::BadRequest().json(serde_json::json!({
                    "error": format!("Unknown genre id {}", genre_id)
                }))
            }
            Err(_) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "Database error"
                }))
            }
        }
    }

    match ClientTable::set_preferred_genres(*path, &body.genre_ids).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "msg": "Preferences updated"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to update preferences"
        })),
    }
}

/// GET /clients/{id}/recommendations
#[get("/{id}/recommendations")]
pub async fn recommendations(path: web::Path<i64>) -> impl Responder {
    let client = match ClientTable::get_by_id(*path).await {
        Ok(Some(c)) => c,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "Client not found"
            }))
        }
        Err(_) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Database error"
            }))
        }
    };

    match Recommender::recommend(&client).await {
        Ok(songs) => HttpResponse::Ok().json(serde_json::json!({ "songs": songs })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Failed to build recommendations"
        })),
    }
}

/// Configure client routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_clients)
        .service(get_client)
        .service(update_profile)
        .service(set_preferred_genres)
        .service(recommendations);
}

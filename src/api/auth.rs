//! Authentication API routes

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;

use crate::core::accounts::{Accounts, RegisterError};

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// POST /auth/register
#[post("/register")]
pub async fn register(body: web::Json<RegisterBody>) -> impl Responder {
    match Accounts::register(&body.username, &body.password).await {
        Ok(client) => HttpResponse::Created().json(serde_json::json!({
            "client": client.to_public()
        })),
        Err(RegisterError::InvalidUsername) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid username"
        })),
        Err(RegisterError::InvalidPassword) => HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Invalid password"
        })),
        Err(RegisterError::UsernameTaken) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Username already taken"
        })),
        Err(RegisterError::Persistence(_)) => {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to save account"
            }))
        }
    }
}

/// POST /auth/login
#[post("/login")]
pub async fn login(body: web::Json<LoginBody>) -> impl Responder {
    match Accounts::authenticate(&body.username, &body.password).await {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "msg": "Login successful"
        })),
        Ok(false) => HttpResponse::Unauthorized().json(serde_json::json!({
            "msg": "Invalid username or password"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Database error"
        })),
    }
}

/// Configure auth routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, post, put, HttpResponse, Result};
use serde::Serialize;

use crate::models::user::{CreateUserRequest, DeleteUserRequest, UpdateUserRequest};
use crate::services::database::DatabaseService;

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(MessageResponse::new("Internal Server Error"))
}

#[get("")]
pub async fn list_users(db: Data<DatabaseService>) -> Result<HttpResponse> {
    match db.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => {
            log::error!("Failed to list users: {}", e);
            Ok(internal_error())
        }
    }
}

/// The only path that distinguishes 400, 404 and 500. A non-numeric id
/// is rejected before any store access happens.
#[get("/{id}")]
pub async fn get_user(db: Data<DatabaseService>, path: Path<String>) -> Result<HttpResponse> {
    let id: i64 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(MessageResponse::new("Invalid ID")));
        }
    };

    match db.get_user(id).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(user)),
        Ok(None) => Ok(HttpResponse::NotFound().json(MessageResponse::new("User not found"))),
        Err(e) => {
            log::error!("Failed to fetch user {}: {}", id, e);
            Ok(internal_error())
        }
    }
}

#[post("")]
pub async fn create_user(
    db: Data<DatabaseService>,
    payload: Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    if payload.name.is_empty() || payload.email.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(MessageResponse::new("Name and email are required")));
    }

    match db.create_user(&payload.name, &payload.email).await {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => {
            log::error!("Failed to create user: {}", e);
            Ok(internal_error())
        }
    }
}

// Update and delete deliberately collapse every store failure, an
// unmatched id included, into a 500. Only get-by-id maps NotFound to 404.

#[put("")]
pub async fn update_user(
    db: Data<DatabaseService>,
    payload: Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    if payload.name.is_empty() || payload.email.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(MessageResponse::new("Name and email are required")));
    }

    match db
        .update_user(payload.id, &payload.name, &payload.email)
        .await
    {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => {
            log::error!("Failed to update user {}: {}", payload.id, e);
            Ok(internal_error())
        }
    }
}

#[delete("")]
pub async fn delete_user(
    db: Data<DatabaseService>,
    payload: Json<DeleteUserRequest>,
) -> Result<HttpResponse> {
    match db.delete_user(payload.id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => {
            log::error!("Failed to delete user {}: {}", payload.id, e);
            Ok(internal_error())
        }
    }
}

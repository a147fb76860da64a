use actix_web::{web, HttpResponse};

use crate::database::Store;
use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, ProfileResponse, RegisterRequest,
    UpdateProfileRequest, UserResponse,
};
use crate::services::user_service;
use crate::utils::AppError;

#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse),
        (status = 500, description = "Registration failed (including duplicate email)", body = MessageResponse)
    )
)]
pub async fn register(
    db: web::Data<dyn Store>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    let email = request.email.as_deref().unwrap_or("N/A");
    log::info!("📝 POST /register - email: {}", email);

    match user_service::register(db.get_ref(), &request).await {
        Ok(_) => {
            log::info!("✅ Registration successful: {}", email);
            HttpResponse::Ok().json(MessageResponse::new("User registered successfully."))
        }
        Err(e) => {
            log::error!("❌ Registration failed: {} - {}", email, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error registering user"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Login error", body = MessageResponse)
    )
)]
pub async fn login(db: web::Data<dyn Store>, request: web::Json<LoginRequest>) -> HttpResponse {
    let email = request.email.as_deref().unwrap_or("N/A");
    log::info!("🔐 POST /login - email: {}", email);

    match user_service::login(db.get_ref(), &request).await {
        Ok(username) => {
            log::info!("✅ Login successful: {}", email);
            HttpResponse::Ok().json(LoginResponse {
                message: "Login Successful".to_string(),
                username,
            })
        }
        Err(AppError::InvalidCredentials) => {
            log::warn!("❌ Login failed: {} - invalid credentials", email);
            HttpResponse::BadRequest().json(MessageResponse::new("Invalid Credentials"))
        }
        Err(e) => {
            log::error!("❌ Login error: {} - {}", email, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Login error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/profile/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Account email")),
    responses(
        (status = 200, description = "Username and email", body = ProfileResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Lookup failed", body = MessageResponse)
    )
)]
pub async fn get_profile(db: web::Data<dyn Store>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("👤 GET /profile/{}", email);

    match user_service::get_profile(db.get_ref(), &email).await {
        Ok(user) => HttpResponse::Ok().json(ProfileResponse::from(user)),
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ Profile not found: {}", email);
            HttpResponse::NotFound().json(MessageResponse::new("User not found"))
        }
        Err(e) => {
            log::error!("❌ Failed to fetch profile {}: {}", email, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error fetching profile"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/update/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Account email")),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated; body carries `message` and `user`", body = UserResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Update failed", body = MessageResponse)
    )
)]
pub async fn update_profile(
    db: web::Data<dyn Store>,
    path: web::Path<String>,
    request: web::Json<UpdateProfileRequest>,
) -> HttpResponse {
    let email = path.into_inner();
    log::info!("✏️ PUT /update/{}", email);

    match user_service::update_profile(db.get_ref(), &email, &request).await {
        Ok(user) => {
            log::info!("✅ Profile updated: {}", email);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "Profile updated successfully",
                "user": UserResponse::from(user)
            }))
        }
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ Profile not found: {}", email);
            HttpResponse::NotFound().json(MessageResponse::new("User not found"))
        }
        Err(e) => {
            log::error!("❌ Failed to update profile {}: {}", email, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error updating profile"))
        }
    }
}

/// Removes the account only; the user's recipes stay.
#[utoipa::path(
    delete,
    path = "/delete/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Account email")),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Delete failed", body = MessageResponse)
    )
)]
pub async fn delete_account(db: web::Data<dyn Store>, path: web::Path<String>) -> HttpResponse {
    let email = path.into_inner();
    log::info!("🗑️ DELETE /delete/{}", email);

    match user_service::delete_account(db.get_ref(), &email).await {
        Ok(()) => {
            log::info!("✅ Account deleted successfully: {}", email);
            HttpResponse::Ok().json(MessageResponse::new("Account deleted successfully"))
        }
        Err(AppError::NotFound(_)) => {
            log::warn!("⚠️ Account not found: {}", email);
            HttpResponse::NotFound().json(MessageResponse::new("User not found"))
        }
        Err(e) => {
            log::error!("❌ Failed to delete account {}: {}", email, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error deleting account"))
        }
    }
}

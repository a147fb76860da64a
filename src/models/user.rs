use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::AppError;

/// Usuário (armazenado no MongoDB, coleção `users`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub username: String,

    /// Unique across all users (unique index)
    pub email: String,

    /// Hash bcrypt, nunca texto puro
    pub password: String,

    /// Declared for parity with the document layout; no handler fills it.
    #[serde(default)]
    pub recipes: Vec<ObjectId>,

    #[serde(rename = "createdAt", default = "BsonDateTime::now")]
    pub created_at: BsonDateTime,
}

impl User {
    /// Builds a new user document, applying the trim and required rules.
    /// `password_hash` must already be hashed.
    pub fn new(username: &str, email: &str, password_hash: String) -> Result<Self, AppError> {
        Ok(Self {
            id: None,
            username: required("username", username)?,
            email: required("email", email)?,
            password: required("password", &password_hash)?,
            recipes: Vec::new(),
            created_at: BsonDateTime::now(),
        })
    }
}

/// Trims the value and rejects it when nothing is left.
fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Campos alteráveis do perfil (já validados e com hash aplicado)
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password_hash.is_none()
    }
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub username: Option<String>,
    /// Re-hashed only when present and non-empty
    #[serde(default, deserialize_with = "super::lenient_string")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub username: String,
    pub email: String,
}

impl From<User> for ProfileResponse {
    fn from(user: User) -> Self {
        ProfileResponse {
            username: user.username,
            email: user.email,
        }
    }
}

/// User document as returned by the API (no password hash)
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub recipes: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            email: user.email,
            recipes: user.recipes.iter().map(|id| id.to_hex()).collect(),
            created_at: user.created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

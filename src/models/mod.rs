pub mod recipe;
pub mod user;

pub use recipe::*;
pub use user::*;

use serde::{Deserialize, Serialize};

/// Corpo padrão `{ "message": ... }` usado em sucesso e erro
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
        }
    }
}

/// Text fields accept JSON numbers and booleans and keep their textual form.
/// Objects and arrays are rejected.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, found {}", other))),
    }
}

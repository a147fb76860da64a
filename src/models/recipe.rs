use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::utils::AppError;

/// Receita (armazenada no MongoDB, coleção `recipes`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    #[serde(default)]
    pub title: Option<serde_json::Value>,

    /// Free-form content, kept as given
    #[serde(default)]
    pub ingredients: Option<serde_json::Value>,

    #[serde(default)]
    pub instructions: Option<serde_json::Value>,

    /// Owner reference. Not checked against `users`.
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

impl From<CreateRecipeRequest> for Recipe {
    fn from(request: CreateRecipeRequest) -> Self {
        Recipe {
            id: None,
            title: request.title,
            ingredients: request.ingredients,
            instructions: request.instructions,
            user_id: request.user_id,
        }
    }
}

/// Request para criar receita
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct CreateRecipeRequest {
    #[schema(value_type = Option<Object>)]
    pub title: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub ingredients: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub instructions: Option<serde_json::Value>,
    #[serde(rename = "userId", default, deserialize_with = "super::lenient_string")]
    pub user_id: Option<String>,
}

/// Request para atualizar receita.
///
/// Only these fields can change; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateRecipeRequest {
    #[schema(value_type = Option<Object>)]
    pub title: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub ingredients: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub instructions: Option<serde_json::Value>,
    #[serde(rename = "userId", default, deserialize_with = "super::lenient_string")]
    pub user_id: Option<String>,
}

impl UpdateRecipeRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.user_id.is_none()
    }

    /// Builds the `$set` body for the present fields
    pub fn to_set_document(&self) -> Result<Document, AppError> {
        let mut update_doc = Document::new();

        if let Some(title) = &self.title {
            update_doc.insert("title", mongodb::bson::to_bson(title)?);
        }
        if let Some(ingredients) = &self.ingredients {
            update_doc.insert("ingredients", mongodb::bson::to_bson(ingredients)?);
        }
        if let Some(instructions) = &self.instructions {
            update_doc.insert("instructions", mongodb::bson::to_bson(instructions)?);
        }
        if let Some(user_id) = &self.user_id {
            update_doc.insert("userId", user_id.clone());
        }

        Ok(update_doc)
    }

    /// Same merge, applied to an in-memory document
    pub fn apply_to(&self, recipe: &mut Recipe) {
        if let Some(title) = &self.title {
            recipe.title = Some(title.clone());
        }
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients = Some(ingredients.clone());
        }
        if let Some(instructions) = &self.instructions {
            recipe.instructions = Some(instructions.clone());
        }
        if let Some(user_id) = &self.user_id {
            recipe.user_id = Some(user_id.clone());
        }
    }
}

/// Response de receita
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[schema(value_type = Option<Object>)]
    pub title: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub ingredients: Option<serde_json::Value>,
    #[schema(value_type = Option<Object>)]
    pub instructions: Option<serde_json::Value>,
    #[serde(rename = "userId", default, deserialize_with = "super::lenient_string")]
    pub user_id: Option<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        RecipeResponse {
            id: recipe.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            user_id: recipe.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Recipe {
        Recipe {
            id: Some(ObjectId::new()),
            title: Some(json!("Pão de queijo")),
            ingredients: Some(json!(["polvilho", "queijo", "ovo"])),
            instructions: Some(json!("Misture e asse")),
            user_id: Some("64b7f0c2a1b2c3d4e5f60718".to_string()),
        }
    }

    #[test]
    fn test_update_ignores_unknown_fields() {
        let update: UpdateRecipeRequest =
            serde_json::from_value(json!({ "title": "Novo", "_id": "x", "owner": "admin" })).unwrap();
        let set = update.to_set_document().unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get_str("title").unwrap(), "Novo");
    }

    #[test]
    fn test_apply_keeps_unspecified_fields() {
        let mut recipe = sample();
        let update = UpdateRecipeRequest {
            instructions: Some(json!("Asse por 20 minutos")),
            ..Default::default()
        };
        update.apply_to(&mut recipe);

        assert_eq!(recipe.title, Some(json!("Pão de queijo")));
        assert_eq!(recipe.ingredients, Some(json!(["polvilho", "queijo", "ovo"])));
        assert_eq!(recipe.instructions, Some(json!("Asse por 20 minutos")));
    }

    #[test]
    fn test_title_accepts_any_json() {
        let update: UpdateRecipeRequest =
            serde_json::from_value(json!({ "title": { "pt": "Bolo", "en": "Cake" }, "userId": 42 })).unwrap();
        let set = update.to_set_document().unwrap();
        assert_eq!(set.get_document("title").unwrap().get_str("en").unwrap(), "Cake");
        assert_eq!(set.get_str("userId").unwrap(), "42");

        let create: CreateRecipeRequest = serde_json::from_value(json!({ "title": 5 })).unwrap();
        assert_eq!(Recipe::from(create).title, Some(json!(5)));
    }

    #[test]
    fn test_empty_update() {
        assert!(UpdateRecipeRequest::default().is_empty());
        assert!(UpdateRecipeRequest::default().to_set_document().unwrap().is_empty());
    }

    #[test]
    fn test_response_uses_hex_id_and_camel_case() {
        let recipe = sample();
        let hex = recipe.id.unwrap().to_hex();
        let json = serde_json::to_value(RecipeResponse::from(recipe)).unwrap();
        assert_eq!(json["_id"], hex);
        assert_eq!(json["userId"], "64b7f0c2a1b2c3d4e5f60718");
    }

    #[test]
    fn test_bson_roundtrip_keeps_structured_content() {
        let recipe = sample();
        let document = mongodb::bson::to_document(&recipe).unwrap();
        let decoded: Recipe = mongodb::bson::from_document(document).unwrap();
        assert_eq!(decoded.ingredients, recipe.ingredients);
        assert_eq!(decoded.user_id, recipe.user_id);
    }
}

use crate::database::Store;
use crate::models::{CreateRecipeRequest, Recipe, UpdateRecipeRequest};
use crate::utils::AppError;

/// `userId` is stored as given; it is not checked against existing users.
pub async fn create_recipe(store: &dyn Store, request: CreateRecipeRequest) -> Result<Recipe, AppError> {
    store.insert_recipe(Recipe::from(request)).await
}

pub async fn list_recipes(store: &dyn Store) -> Result<Vec<Recipe>, AppError> {
    store.list_recipes().await
}

pub async fn get_recipe(store: &dyn Store, id: &str) -> Result<Recipe, AppError> {
    store
        .find_recipe(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("recipe {}", id)))
}

pub async fn update_recipe(
    store: &dyn Store,
    id: &str,
    update: UpdateRecipeRequest,
) -> Result<Recipe, AppError> {
    store
        .update_recipe(id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("recipe {}", id)))
}

pub async fn delete_recipe(store: &dyn Store, id: &str) -> Result<(), AppError> {
    store
        .delete_recipe(id)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(format!("recipe {}", id)))
}

use async_trait::async_trait;

use super::Store;
use crate::models::{Recipe, UpdateRecipeRequest, User, UserChanges};
use crate::utils::AppError;

/// Stand-in used when the database could not be reached at startup.
/// The server keeps listening and every operation fails with the original cause.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> AppError {
        AppError::DatabaseError(format!("database unavailable: {}", self.reason))
    }
}

#[async_trait]
impl Store for UnavailableStore {
    async fn ping(&self) -> Result<(), AppError> {
        Err(self.error())
    }

    async fn insert_user(&self, _user: User) -> Result<User, AppError> {
        Err(self.error())
    }

    async fn find_user_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(self.error())
    }

    async fn update_user_by_email(
        &self,
        _email: &str,
        _changes: UserChanges,
    ) -> Result<Option<User>, AppError> {
        Err(self.error())
    }

    async fn delete_user_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(self.error())
    }

    async fn insert_recipe(&self, _recipe: Recipe) -> Result<Recipe, AppError> {
        Err(self.error())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        Err(self.error())
    }

    async fn find_recipe(&self, _id: &str) -> Result<Option<Recipe>, AppError> {
        Err(self.error())
    }

    async fn update_recipe(
        &self,
        _id: &str,
        _update: UpdateRecipeRequest,
    ) -> Result<Option<Recipe>, AppError> {
        Err(self.error())
    }

    async fn delete_recipe(&self, _id: &str) -> Result<Option<Recipe>, AppError> {
        Err(self.error())
    }
}

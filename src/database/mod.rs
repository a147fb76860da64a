pub mod mongo;
pub mod unavailable;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoDB;
pub use unavailable::UnavailableStore;

use async_trait::async_trait;

use crate::models::{Recipe, UpdateRecipeRequest, User, UserChanges};
use crate::utils::AppError;

/// Storage operations used by the handlers.
///
/// The handle is created once at startup and injected as `web::Data<dyn Store>`.
/// Every lookup returns `Ok(None)` for a missing document; errors are reserved
/// for storage failures.
#[async_trait]
pub trait Store: Send + Sync {
    /// Connectivity probe used by `/health`
    async fn ping(&self) -> Result<(), AppError>;

    /// Inserts a user; a taken email yields `AppError::Duplicate`.
    async fn insert_user(&self, user: User) -> Result<User, AppError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn update_user_by_email(
        &self,
        email: &str,
        changes: UserChanges,
    ) -> Result<Option<User>, AppError>;
    async fn delete_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn insert_recipe(&self, recipe: Recipe) -> Result<Recipe, AppError>;
    async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError>;
    /// Identifiers that are not valid ObjectIds never resolve.
    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>, AppError>;
    async fn update_recipe(
        &self,
        id: &str,
        update: UpdateRecipeRequest,
    ) -> Result<Option<Recipe>, AppError>;
    async fn delete_recipe(&self, id: &str) -> Result<Option<Recipe>, AppError>;
}

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::Store;
use crate::models::{Recipe, UpdateRecipeRequest, User, UserChanges};
use crate::utils::AppError;

/// In-memory test double mirroring the MongoDB semantics (unique email,
/// insertion order, unresolvable malformed ids).
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    recipes: Mutex<Vec<Recipe>>,
}

fn lock_error<T>(_: T) -> AppError {
    AppError::DatabaseError("store lock poisoned".to_string())
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert_user(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().map_err(lock_error)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Duplicate(format!("email {}", user.email)));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().map_err(lock_error)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_user_by_email(
        &self,
        email: &str,
        changes: UserChanges,
    ) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().map_err(lock_error)?;
        let Some(user) = users.iter_mut().find(|u| u.email == email) else {
            return Ok(None);
        };

        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password = password_hash;
        }
        Ok(Some(user.clone()))
    }

    async fn delete_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let mut users = self.users.lock().map_err(lock_error)?;
        let position = users.iter().position(|u| u.email == email);
        Ok(position.map(|index| users.remove(index)))
    }

    async fn insert_recipe(&self, mut recipe: Recipe) -> Result<Recipe, AppError> {
        recipe.id = Some(ObjectId::new());
        self.recipes.lock().map_err(lock_error)?.push(recipe.clone());
        Ok(recipe)
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        Ok(self.recipes.lock().map_err(lock_error)?.clone())
    }

    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let recipes = self.recipes.lock().map_err(lock_error)?;
        Ok(recipes.iter().find(|r| r.id == Some(object_id)).cloned())
    }

    async fn update_recipe(
        &self,
        id: &str,
        update: UpdateRecipeRequest,
    ) -> Result<Option<Recipe>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let mut recipes = self.recipes.lock().map_err(lock_error)?;
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == Some(object_id)) else {
            return Ok(None);
        };

        update.apply_to(recipe);
        Ok(Some(recipe.clone()))
    }

    async fn delete_recipe(&self, id: &str) -> Result<Option<Recipe>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let mut recipes = self.recipes.lock().map_err(lock_error)?;
        let position = recipes.iter().position(|r| r.id == Some(object_id));
        Ok(position.map(|index| recipes.remove(index)))
    }
}

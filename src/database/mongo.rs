use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::{ClientOptions, IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, Database, IndexModel};

use super::Store;
use crate::models::{Recipe, UpdateRecipeRequest, User, UserChanges};
use crate::utils::AppError;

pub const USERS: &str = "users";
pub const RECIPES: &str = "recipes";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Connects, checks the server answers and creates the indexes.
    ///
    /// `database_name` wins over the path segment of the URI.
    pub async fn new(uri: &str, database_name: Option<&str>) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("recipedia".to_string());

        let client = Client::with_options(client_options)?;

        let db_name = database_name
            .map(str::to_string)
            .unwrap_or_else(|| database_name_from_uri(uri));
        let db = client.database(&db_name);

        // Test connection
        db.run_command(doc! { "ping": 1 }).await?;
        log::info!("✅ Connected to MongoDB database: {}", db_name);

        let mongodb = Self { db };
        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Unique index on users(email)
    async fn ensure_indexes(&self) -> Result<(), AppError> {
        log::info!("🔧 Creating database indexes...");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection::<Document>(USERS)
            .create_index(email_index)
            .await?;
        log::info!("   ✅ Index ready: users(email) unique");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    fn users(&self) -> Collection<User> {
        self.collection(USERS)
    }

    fn recipes(&self) -> Collection<Recipe> {
        self.collection(RECIPES)
    }
}

/// Extract database name from URI or use default
pub fn database_name_from_uri(uri: &str) -> String {
    uri.split("://")
        .nth(1)
        .and_then(|rest| rest.split_once('/'))
        .map(|(_, path)| path.split('?').next().unwrap_or_default())
        .filter(|name| !name.is_empty())
        .unwrap_or("recipedia")
        .to_string()
}

#[async_trait]
impl Store for MongoDB {
    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert_user(&self, user: User) -> Result<User, AppError> {
        let result = self.users().insert_one(&user).await?;

        let mut created = user;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users().find_one(doc! { "email": email }).await?)
    }

    async fn update_user_by_email(
        &self,
        email: &str,
        changes: UserChanges,
    ) -> Result<Option<User>, AppError> {
        if changes.is_empty() {
            return self.find_user_by_email(email).await;
        }

        let mut update_doc = Document::new();
        if let Some(username) = changes.username {
            update_doc.insert("username", username);
        }
        if let Some(password_hash) = changes.password_hash {
            update_doc.insert("password", password_hash);
        }

        Ok(self
            .users()
            .find_one_and_update(doc! { "email": email }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users()
            .find_one_and_delete(doc! { "email": email })
            .await?)
    }

    async fn insert_recipe(&self, recipe: Recipe) -> Result<Recipe, AppError> {
        let result = self.recipes().insert_one(&recipe).await?;

        let mut created = recipe;
        created.id = result.inserted_id.as_object_id();
        Ok(created)
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, AppError> {
        let cursor = self.recipes().find(doc! {}).await?;
        let recipes: Vec<Recipe> = cursor.try_collect().await?;
        Ok(recipes)
    }

    async fn find_recipe(&self, id: &str) -> Result<Option<Recipe>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self.recipes().find_one(doc! { "_id": object_id }).await?)
    }

    async fn update_recipe(
        &self,
        id: &str,
        update: UpdateRecipeRequest,
    ) -> Result<Option<Recipe>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        // $set vazio é rejeitado pelo servidor
        if update.is_empty() {
            return Ok(self.recipes().find_one(doc! { "_id": object_id }).await?);
        }

        Ok(self
            .recipes()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update.to_set_document()? },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_recipe(&self, id: &str) -> Result<Option<Recipe>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self
            .recipes()
            .find_one_and_delete(doc! { "_id": object_id })
            .await?)
    }
}

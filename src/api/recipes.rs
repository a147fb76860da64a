use actix_web::{web, HttpResponse};

use crate::database::Store;
use crate::models::{CreateRecipeRequest, MessageResponse, RecipeResponse, UpdateRecipeRequest};
use crate::services::recipe_service;
use crate::utils::AppError;

/// POST /recipes - Cria receita (userId não é validado)
#[utoipa::path(
    post,
    path = "/recipes",
    tag = "Recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Recipe added; body carries `message` and `recipe`", body = RecipeResponse),
        (status = 500, description = "Insert failed", body = MessageResponse)
    )
)]
pub async fn create_recipe(
    db: web::Data<dyn Store>,
    body: web::Json<CreateRecipeRequest>,
) -> HttpResponse {
    log::info!("🍲 POST /recipes");

    match recipe_service::create_recipe(db.get_ref(), body.into_inner()).await {
        Ok(recipe) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Recipe added successfully",
            "recipe": RecipeResponse::from(recipe)
        })),
        Err(e) => {
            log::error!("❌ Failed to add recipe: {}", e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error adding recipe"))
        }
    }
}

/// GET /recipes - Lista todas as receitas, sem filtro nem paginação
#[utoipa::path(
    get,
    path = "/recipes",
    tag = "Recipes",
    responses(
        (status = 200, description = "Every stored recipe", body = [RecipeResponse]),
        (status = 500, description = "Query failed", body = MessageResponse)
    )
)]
pub async fn list_recipes(db: web::Data<dyn Store>) -> HttpResponse {
    log::info!("📋 GET /recipes");

    match recipe_service::list_recipes(db.get_ref()).await {
        Ok(recipes) => {
            let recipes: Vec<RecipeResponse> = recipes.into_iter().map(RecipeResponse::from).collect();
            HttpResponse::Ok().json(recipes)
        }
        Err(e) => {
            log::error!("❌ Failed to fetch recipes: {}", e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error fetching recipes"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe ObjectId (hex)")),
    responses(
        (status = 200, description = "Recipe", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 500, description = "Query failed", body = MessageResponse)
    )
)]
pub async fn get_recipe(db: web::Data<dyn Store>, path: web::Path<String>) -> HttpResponse {
    let recipe_id = path.into_inner();
    log::info!("🔎 GET /recipes/{}", recipe_id);

    match recipe_service::get_recipe(db.get_ref(), &recipe_id).await {
        Ok(recipe) => HttpResponse::Ok().json(RecipeResponse::from(recipe)),
        Err(AppError::NotFound(_)) => recipe_not_found(&recipe_id),
        Err(e) => {
            log::error!("❌ Failed to fetch recipe {}: {}", recipe_id, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error fetching recipe"))
        }
    }
}

/// PUT /recipes/{id} - Atualiza apenas title, ingredients, instructions e userId
#[utoipa::path(
    put,
    path = "/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe ObjectId (hex)")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated; body carries `message` and `recipe`", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 500, description = "Update failed", body = MessageResponse)
    )
)]
pub async fn update_recipe(
    db: web::Data<dyn Store>,
    path: web::Path<String>,
    body: web::Json<UpdateRecipeRequest>,
) -> HttpResponse {
    let recipe_id = path.into_inner();
    log::info!("✏️ PUT /recipes/{}", recipe_id);

    match recipe_service::update_recipe(db.get_ref(), &recipe_id, body.into_inner()).await {
        Ok(recipe) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Recipe updated successfully",
            "recipe": RecipeResponse::from(recipe)
        })),
        Err(AppError::NotFound(_)) => recipe_not_found(&recipe_id),
        Err(e) => {
            log::error!("❌ Failed to update recipe {}: {}", recipe_id, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error updating recipe"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/recipes/{id}",
    tag = "Recipes",
    params(("id" = String, Path, description = "Recipe ObjectId (hex)")),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 404, description = "Recipe not found", body = MessageResponse),
        (status = 500, description = "Delete failed", body = MessageResponse)
    )
)]
pub async fn delete_recipe(db: web::Data<dyn Store>, path: web::Path<String>) -> HttpResponse {
    let recipe_id = path.into_inner();
    log::info!("🗑️ DELETE /recipes/{}", recipe_id);

    match recipe_service::delete_recipe(db.get_ref(), &recipe_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Recipe deleted successfully")),
        Err(AppError::NotFound(_)) => recipe_not_found(&recipe_id),
        Err(e) => {
            log::error!("❌ Failed to delete recipe {}: {}", recipe_id, e);
            HttpResponse::InternalServerError().json(MessageResponse::new("Error deleting recipe"))
        }
    }
}

fn recipe_not_found(recipe_id: &str) -> HttpResponse {
    log::warn!("⚠️ Recipe not found: {}", recipe_id);
    HttpResponse::NotFound().json(MessageResponse::new("Recipe not found"))
}

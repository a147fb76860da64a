use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RECIPEDIA API",
        version = "1.0.0",
        description = "Recipe sharing backend.\n\n**Authentication:** none. `/login` only checks credentials and returns the username; no token is issued."
    ),
    paths(
        // Health
        crate::api::health::index,
        crate::api::health::health_check,

        // Users
        crate::api::users::register,
        crate::api::users::login,
        crate::api::users::get_profile,
        crate::api::users::update_profile,
        crate::api::users::delete_account,

        // Recipes
        crate::api::recipes::create_recipe,
        crate::api::recipes::list_recipes,
        crate::api::recipes::get_recipe,
        crate::api::recipes::update_recipe,
        crate::api::recipes::delete_recipe,
    ),
    components(
        schemas(
            crate::models::MessageResponse,
            crate::models::RegisterRequest,
            crate::models::LoginRequest,
            crate::models::LoginResponse,
            crate::models::ProfileResponse,
            crate::models::UpdateProfileRequest,
            crate::models::UserResponse,
            crate::models::CreateRecipeRequest,
            crate::models::UpdateRecipeRequest,
            crate::models::RecipeResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Welcome text and service health."),
        (name = "Users", description = "Registration, credential check and profile management, keyed by email."),
        (name = "Recipes", description = "Recipe CRUD. Recipes reference their owner by `userId` without integrity checks."),
    )
)]
pub struct ApiDoc;

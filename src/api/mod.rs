use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse};

use crate::models::MessageResponse;

pub mod health;
pub mod recipes;
pub mod swagger;
pub mod users;

/// Body errors (bad JSON, wrong content type) answer like any other failure of
/// the route: `status` with `{"message": message}`.
fn json_config(status: StatusCode, message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, req| {
        log::warn!("⚠️ Rejected body on {} {}: {}", req.method(), req.path(), err);
        let response = HttpResponse::build(status).json(MessageResponse::new(message));
        InternalError::from_response(err, response).into()
    })
}

/// Registers every route. The store is expected as `web::Data<dyn Store>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let failed = StatusCode::INTERNAL_SERVER_ERROR;

    cfg.route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        // Users
        .service(
            web::resource("/register")
                .app_data(json_config(failed, "Error registering user"))
                .route(web::post().to(users::register)),
        )
        .service(
            web::resource("/login")
                .app_data(json_config(StatusCode::BAD_REQUEST, "Invalid Credentials"))
                .route(web::post().to(users::login)),
        )
        .route("/profile/{email}", web::get().to(users::get_profile))
        .service(
            web::resource("/update/{email}")
                .app_data(json_config(failed, "Error updating profile"))
                .route(web::put().to(users::update_profile)),
        )
        .route("/delete/{email}", web::delete().to(users::delete_account))
        // Recipes
        .service(
            web::resource("/recipes")
                .app_data(json_config(failed, "Error adding recipe"))
                .route(web::post().to(recipes::create_recipe))
                .route(web::get().to(recipes::list_recipes)),
        )
        .service(
            web::resource("/recipes/{id}")
                .app_data(json_config(failed, "Error updating recipe"))
                .route(web::get().to(recipes::get_recipe))
                .route(web::put().to(recipes::update_recipe))
                .route(web::delete().to(recipes::delete_recipe)),
        );
}

#[cfg(test)]
pub(crate) fn memory_store() -> web::Data<dyn crate::database::Store> {
    let store: std::sync::Arc<dyn crate::database::Store> =
        std::sync::Arc::new(crate::database::memory::MemoryStore::default());
    web::Data::from(store)
}

/// Sends the request and decodes the JSON body
#[cfg(test)]
pub(crate) async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, serde_json::Value)
where
    S: actix_web::dev::Service<
        R,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let resp = actix_web::test::call_service(app, req).await;
    let status = resp.status();
    let body: serde_json::Value = actix_web::test::read_body_json(resp).await;
    (status, body)
}

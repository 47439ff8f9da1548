/// HTTP handlers for post-service
///
/// - `posts`: list, create, read, update and delete posts
/// - `health`: liveness and readiness probes
pub mod health;
pub mod posts;

use crate::metrics;
use crate::models::WelcomeResponse;
use crate::openapi::ApiDoc;
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use posts::{create_post, delete_post, get_post, list_posts, update_post};

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
pub async fn read_root() -> HttpResponse {
    HttpResponse::Ok().json(WelcomeResponse {
        welcome: "Welcome to the blog posts API".to_string(),
    })
}

/// Register every route of the service.
///
/// `/posts/create` is registered ahead of `/posts/{post_id}` so the literal
/// segment wins the match.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/docs/{_:.*}").url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
    )
    .route("/metrics", web::get().to(metrics::serve_metrics))
    .route("/health", web::get().to(health::health_summary))
    .route("/health/ready", web::get().to(health::readiness_summary))
    .route("/health/live", web::get().to(health::liveness_check))
    .route("/", web::get().to(read_root))
    .route("/posts", web::get().to(list_posts))
    .route("/posts/create", web::post().to(create_post))
    .route("/posts/update/{post_id}", web::put().to(update_post))
    .route("/posts/delete/{post_id}", web::delete().to(delete_post))
    .route("/posts/{post_id}", web::get().to(get_post));
}

/// OpenAPI documentation for Post Service
use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{CreatePostRequest, DeletePostResponse, Post, PostUpdate, WelcomeResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Post Service API",
        version = "1.0.0",
        description = "In-memory blog post service. Creates, lists, reads, updates and deletes posts; nothing survives a restart.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development server"),
    ),
    paths(
        handlers::read_root,
        handlers::posts::list_posts,
        handlers::posts::create_post,
        handlers::posts::get_post,
        handlers::posts::update_post,
        handlers::posts::delete_post,
    ),
    components(schemas(
        Post,
        CreatePostRequest,
        PostUpdate,
        WelcomeResponse,
        DeletePostResponse,
        ErrorResponse,
    )),
    tags(
        (name = "root", description = "Welcome message"),
        (name = "posts", description = "Post creation, retrieval, updates, and deletion"),
    ),
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Post Service"
    }

    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }
}

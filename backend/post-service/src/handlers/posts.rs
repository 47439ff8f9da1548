/// Post handlers - HTTP endpoints for post operations
use crate::error::{ErrorResponse, Result};
use crate::models::{CreatePostRequest, DeletePostResponse, Post, PostUpdate};
use crate::services::PostService;
use actix_web::{web, HttpResponse};

/// List all posts in creation order
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Every stored post, oldest first", body = Vec<Post>)
    )
)]
pub async fn list_posts(service: web::Data<PostService>) -> HttpResponse {
    HttpResponse::Ok().json(service.list_posts().await)
}

/// Create a new post
#[utoipa::path(
    post,
    path = "/posts/create",
    tag = "posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    )
)]
pub async fn create_post(
    service: web::Data<PostService>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let post = service.create_post(req.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// Get a post by ID
#[utoipa::path(
    get,
    path = "/posts/{post_id}",
    tag = "posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = Post),
        (status = 404, description = "No post with this id", body = ErrorResponse)
    )
)]
pub async fn get_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post = service.get_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Replace title, author and content of a post
#[utoipa::path(
    put,
    path = "/posts/update/{post_id}",
    tag = "posts",
    params(("post_id" = String, Path, description = "Post id")),
    request_body = PostUpdate,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 404, description = "No post with this id", body = ErrorResponse),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    )
)]
pub async fn update_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
    req: web::Json<PostUpdate>,
) -> Result<HttpResponse> {
    let post = service.update_post(&post_id, req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post
#[utoipa::path(
    delete,
    path = "/posts/delete/{post_id}",
    tag = "posts",
    params(("post_id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post deleted", body = DeletePostResponse),
        (status = 404, description = "No post with this id", body = ErrorResponse)
    )
)]
pub async fn delete_post(
    service: web::Data<PostService>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let post = service.delete_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(DeletePostResponse {
        message: "Post deleted".to_string(),
        id: post.id,
    }))
}

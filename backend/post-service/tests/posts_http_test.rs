//! Integration Tests: Post routes
//!
//! Drives the full route table through `actix_web::test` against a fresh
//! in-memory store per test.
//!
//! Coverage:
//! - create / get / list / update / delete happy paths
//! - 404 for unknown and malformed ids
//! - 422 for missing, empty, and wrongly typed fields and non-JSON content types
//! - 413 for bodies over the JSON limit
//! - welcome, health, and metrics endpoints

use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web, App,
};
use post_service::db::PostStore;
use post_service::error::json_config;
use post_service::handlers;
use post_service::services::PostService;
use serde_json::{json, Value};
use std::sync::Arc;

async fn init_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let service = web::Data::new(PostService::new(Arc::new(PostStore::new())));
    test::init_service(
        App::new()
            .app_data(service)
            .app_data(json_config())
            .configure(handlers::configure),
    )
    .await
}

async fn create(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    body: Value,
) -> Value {
    let resp = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/posts/create")
            .set_json(body)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

#[actix_web::test]
async fn root_returns_welcome_message() {
    let app = init_app().await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["Welcome"].is_string());
}

#[actix_web::test]
async fn create_get_delete_lifecycle() {
    let app = init_app().await;

    let created = create(
        &app,
        json!({"title": "Hello", "author": "A", "content": "C"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["published"], false);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["title"], "Hello");
    assert_eq!(fetched["author"], "A");
    assert_eq!(fetched["content"], "C");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/posts/delete/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: Value = test::read_body_json(resp).await;
    assert_eq!(confirmation["id"], id.as_str());
    assert!(confirmation["message"].is_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn list_returns_posts_in_creation_order() {
    let app = init_app().await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    let empty: Vec<Value> = test::read_body_json(resp).await;
    assert!(empty.is_empty());

    for title in ["one", "two", "three"] {
        create(&app, json!({"title": title, "author": "A", "content": "C"})).await;
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Vec<Value> = test::read_body_json(resp).await;
    let titles: Vec<&str> = posts.iter().filter_map(|p| p["title"].as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[actix_web::test]
async fn caller_supplied_id_is_ignored() {
    let app = init_app().await;
    let created = create(
        &app,
        json!({
            "id": "art-20251102-001",
            "title": "Hello",
            "author": "A",
            "content": "C",
            "published": true,
            "published_at": "2025-11-02T22:00:00Z"
        }),
    )
    .await;

    assert_ne!(created["id"], "art-20251102-001");
    assert_eq!(created["published"], true);
    assert!(created["published_at"].is_string());
}

#[actix_web::test]
async fn update_replaces_fields_and_keeps_id() {
    let app = init_app().await;
    let created = create(
        &app,
        json!({"title": "Hello", "author": "A", "content": "C"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/posts/update/{id}"))
            .set_json(json!({"title": "New", "author": "B", "content": "D"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["author"], "B");
    assert_eq!(updated["content"], "D");
    assert!(updated["updated_at"].is_string());

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn unknown_ids_return_404() {
    let app = init_app().await;
    let missing = "3f1c2d8e-5b6a-4c7d-9e8f-0a1b2c3d4e5f";

    let requests = vec![
        test::TestRequest::get().uri(&format!("/posts/{missing}")),
        test::TestRequest::get().uri("/posts/not-a-uuid"),
        test::TestRequest::delete().uri(&format!("/posts/delete/{missing}")),
        test::TestRequest::put()
            .uri(&format!("/posts/update/{missing}"))
            .set_json(json!({"title": "t", "author": "a", "content": "c"})),
    ];

    for req in requests {
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

#[actix_web::test]
async fn invalid_create_bodies_return_422() {
    let app = init_app().await;

    let bodies = vec![
        json!({"title": "Hello", "author": "A"}),
        json!({"title": "", "author": "A", "content": "C"}),
        json!({"title": "   ", "author": "A", "content": "C"}),
        json!({"title": "Hello", "author": 42, "content": "C"}),
        json!({}),
    ];

    for body in bodies {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/posts/create")
                .set_json(&body)
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], "VALIDATION_ERROR");
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    let posts: Vec<Value> = test::read_body_json(resp).await;
    assert!(posts.is_empty());
}

#[actix_web::test]
async fn malformed_json_returns_422() {
    let app = init_app().await;
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts/create")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn invalid_update_returns_422_and_keeps_post() {
    let app = init_app().await;
    let created = create(
        &app,
        json!({"title": "Hello", "author": "A", "content": "C"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/posts/update/{id}"))
            .set_json(json!({"title": "New", "author": "B"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["title"], "Hello");
}

#[actix_web::test]
async fn health_endpoints_report_ok() {
    let app = init_app().await;
    create(&app, json!({"title": "Hello", "author": "A", "content": "C"})).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "post-service");

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/live").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/health/ready").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["store"]["status"], "healthy");
    assert_eq!(body["checks"]["store"]["message"], "1 posts in memory");
}

#[actix_web::test]
async fn metrics_and_openapi_are_served() {
    let app = init_app().await;
    create(&app, json!({"title": "Hello", "author": "A", "content": "C"})).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("posts_operations_total"));

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/openapi.json").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = test::read_body_json(resp).await;
    assert!(doc["paths"]["/posts/create"].is_object());
}

#[actix_web::test]
async fn non_json_content_type_returns_422() {
    let app = init_app().await;
    let body = r#"{"title":"t","author":"a","content":"c"}"#;

    for content_type in [None, Some("text/plain")] {
        let mut req = test::TestRequest::post()
            .uri("/posts/create")
            .set_payload(body);
        if let Some(content_type) = content_type {
            req = req.insert_header(("content-type", content_type));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], "VALIDATION_ERROR");
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    let posts: Vec<Value> = test::read_body_json(resp).await;
    assert!(posts.is_empty());

    let created = create(
        &app,
        json!({"title": "Hello", "author": "A", "content": "C"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    for content_type in [None, Some("text/plain")] {
        let mut req = test::TestRequest::put()
            .uri(&format!("/posts/update/{id}"))
            .set_payload(body);
        if let Some(content_type) = content_type {
            req = req.insert_header(("content-type", content_type));
        }

        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["error"], "VALIDATION_ERROR");
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request(),
    )
    .await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["title"], "Hello");
}

#[actix_web::test]
async fn oversized_body_returns_413() {
    let app = init_app().await;
    let content = "x".repeat(post_service::error::JSON_BODY_LIMIT + 1024);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts/create")
            .set_json(json!({"title": "Big", "author": "A", "content": content}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "PAYLOAD_TOO_LARGE");
    assert_eq!(error["status"], 413);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    let posts: Vec<Value> = test::read_body_json(resp).await;
    assert!(posts.is_empty());
}

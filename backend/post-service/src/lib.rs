/// Post Service Library
///
/// An in-memory CRUD service for blog posts.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Post and request/response structures
/// - `services`: Business logic layer
/// - `db`: In-memory post store
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors
/// - `openapi`: OpenAPI document
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};

pub mod auth;
pub mod health;
pub mod tasks;

use std::sync::Arc;

use actix_web::web;

use crate::auth::{AuthMiddleware, TokenIssuer};
use crate::error::AppError;

/// Mounts the public auth routes and the token-protected `/todos` scope.
pub fn config(cfg: &mut web::ServiceConfig, tokens: Arc<TokenIssuer>) {
    cfg.service(health::health)
        .service(
            web::scope("/auth")
                .service(auth::register)
                .service(auth::login),
        )
        .service(
            web::scope("/todos")
                .wrap(AuthMiddleware::new(tokens))
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}

// The extractor configs below make malformed bodies, queries and paths answer with the same
// `{"error": ...}` shape as every other failure.

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

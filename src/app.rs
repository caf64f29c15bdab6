//! Explicit wiring of the store, hasher, token issuer and services.

use std::sync::Arc;

use actix_web::web;

use crate::auth::{AuthError, IdentityService, PasswordHasher, TokenIssuer};
use crate::config::Config;
use crate::routes;
use crate::store::{TaskRepository, UserRepository};
use crate::tasks::TaskService;

/// Everything a worker needs to serve requests. Cheap to clone; clones share the same store.
#[derive(Clone)]
pub struct AppState {
    pub identity: IdentityService,
    pub tasks: TaskService,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        config: &Config,
    ) -> Result<Self, AuthError> {
        let tokens = Arc::new(TokenIssuer::new(&config.jwt_secret));
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let identity =
            IdentityService::new(users, hasher, Arc::clone(&tokens), config.login_policy)?;
        Ok(Self {
            identity,
            tasks: TaskService::new(tasks),
            tokens,
        })
    }

    /// Wires both repositories to a single store.
    pub fn with_store<S>(store: Arc<S>, config: &Config) -> Result<Self, AuthError>
    where
        S: UserRepository + TaskRepository + 'static,
    {
        let users: Arc<dyn UserRepository> = store.clone();
        let tasks: Arc<dyn TaskRepository> = store;
        Self::new(users, tasks, config)
    }

    /// Registers shared data, extractor configs and all routes on an `App`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::new(self.identity.clone()))
            .app_data(web::Data::new(self.tasks.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .app_data(routes::path_config());
        routes::config(cfg, Arc::clone(&self.tokens));
    }
}

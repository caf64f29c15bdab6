use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};

use crate::error::AppError;

/// The caller identity resolved from a validated token.
///
/// `AuthMiddleware` inserts it into request extensions; handlers take it as an argument
/// and pass `id` explicitly into service calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub email: String,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>().cloned() {
            Some(user) => ready(Ok(user)),
            None => {
                // Only reachable on a route that is not wrapped by AuthMiddleware.
                let err = AppError::Unauthorized("Missing authenticated user".to_string());
                ready(Err(err.into()))
            }
        }
    }
}

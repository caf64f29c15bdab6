use crate::{
    auth::{IdentityService, LoginRequest, RegisterRequest},
    error::AppError,
};
use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new user account and returns its public view (never the password digest).
///
/// ## Responses:
/// - `201 Created`: `{id, email, created_at}`.
/// - `400 Bad Request`: invalid body, or the email is already registered.
/// - `500 Internal Server Error`: hashing or persistence failed.
#[post("/register")]
pub async fn register(
    identity: web::Data<IdentityService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let user = identity
        .register(&register_data.email, &register_data.password)
        .await?;

    Ok(HttpResponse::Created().json(user))
}

/// Login user
///
/// Verifies the credentials and answers with a bearer token and the public user view, or
/// with the public view alone when `LOGIN_RESPONSE=user`.
///
/// ## Responses:
/// - `200 OK`: the login outcome.
/// - `400 Bad Request`: invalid body.
/// - `401 Unauthorized`: unknown email or wrong password (indistinguishable).
#[post("/login")]
pub async fn login(
    identity: web::Data<IdentityService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let outcome = identity
        .authenticate(&login_data.email, &login_data.password)
        .await?;

    Ok(HttpResponse::Ok().json(outcome))
}

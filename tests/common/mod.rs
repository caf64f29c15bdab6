#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::json;
use todoguard::auth::AuthResponse;
use todoguard::config::Config;
use todoguard::store::MemoryStore;
use todoguard::AppState;

pub const JWT_SECRET: &str = "integration_test_secret";

// Helper struct to hold auth details
pub struct TestUser {
    pub id: i32,
    pub token: String,
}

pub fn test_config(extra: &[(&str, &str)]) -> Config {
    let extra: Vec<(String, String)> = extra
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(move |key| match key {
        "JWT_SECRET" => Some(JWT_SECRET.to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        _ => extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()),
    })
    .expect("test configuration should be valid")
}

pub fn test_state() -> AppState {
    AppState::with_store(Arc::new(MemoryStore::new()), &test_config(&[]))
        .expect("test state should wire up")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub async fn register_and_login_user(
    app: &impl Service<
        actix_http::Request,
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
    >,
    email: &str,
    password: &str,
) -> Result<TestUser, String> {
    let req_register = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp_register = test::call_service(app, req_register).await;
    if !resp_register.status().is_success() {
        return Err(format!(
            "Failed to register user. Status: {}",
            resp_register.status()
        ));
    }

    let req_login = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp_login = test::call_service(app, req_login).await;
    let status = resp_login.status();
    let body = test::read_body(resp_login).await;
    if !status.is_success() {
        return Err(format!(
            "Failed to log in. Status: {}. Body: {}",
            status,
            String::from_utf8_lossy(&body)
        ));
    }

    let auth_response: AuthResponse = serde_json::from_slice(&body)
        .map_err(|e| format!("Failed to parse login response: {}", e))?;

    Ok(TestUser {
        id: auth_response.user.id,
        token: auth_response.token,
    })
}

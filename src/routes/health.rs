use actix_web::{get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    fn current() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Liveness check. Mounted outside `/todos`, so it never asks for a token.
#[get("/health")]
pub async fn health() -> web::Json<HealthReport> {
    web::Json(HealthReport::current())
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user record as held by the credential store.
///
/// This type deliberately does not implement `Serialize`: the password digest must never
/// reach a response body. Anything leaving the service goes through [`User::public_view`].
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The outward projection of a [`User`], without the password digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

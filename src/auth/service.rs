//!
//! # Identity Service
//!
//! Registration and authentication rules. The service owns no state of its own: it is wired
//! with a [`UserRepository`], a [`PasswordHasher`] and a [`TokenIssuer`] and every call runs
//! independently. bcrypt work is moved onto the blocking thread pool so request workers keep
//! serving other requests while a hash is computed.

use std::str::FromStr;
use std::sync::Arc;

use actix_web::web;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::password::{HashError, PasswordHasher};
use crate::auth::token::{TokenError, TokenIssuer};
use crate::models::PublicUser;
use crate::store::{StoreError, UserRepository};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user with this email already exists")]
    DuplicateCredential,
    #[error("no user registered with this email")]
    CredentialNotFound,
    #[error("password does not match")]
    CredentialMismatch,
    #[error("password hashing failed: {0}")]
    HashingFailure(String),
    #[error("failed to persist user: {0}")]
    PersistenceFailure(String),
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl From<StoreError> for AuthError {
    fn from(error: StoreError) -> AuthError {
        match error {
            StoreError::UniqueViolation => AuthError::DuplicateCredential,
            other => AuthError::PersistenceFailure(other.to_string()),
        }
    }
}

impl From<HashError> for AuthError {
    fn from(error: HashError) -> AuthError {
        AuthError::HashingFailure(error.to_string())
    }
}

/// What a successful login hands back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPolicy {
    /// A signed bearer token plus the public user view.
    #[default]
    IssueToken,
    /// Only the public user view, no token.
    PublicView,
}

impl FromStr for LoginPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "token" => Ok(LoginPolicy::IssueToken),
            "user" => Ok(LoginPolicy::PublicView),
            other => Err(format!("unknown login policy `{}`", other)),
        }
    }
}

/// Response structure after a successful token login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The JWT for session authentication.
    pub token: String,
    /// Always `Bearer`.
    pub token_type: String,
    /// Seconds until the token expires.
    pub expires_in: i64,
    pub user: PublicUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LoginOutcome {
    Token(AuthResponse),
    User(PublicUser),
}

#[derive(Clone)]
pub struct IdentityService {
    users: Arc<dyn UserRepository>,
    hasher: PasswordHasher,
    tokens: Arc<TokenIssuer>,
    login_policy: LoginPolicy,
    // Digest verified against when the email is unknown, so both login failures cost one bcrypt run.
    decoy_digest: Arc<str>,
}

impl IdentityService {
    /// Wires the service and computes the decoy digest up front with the configured cost.
    ///
    /// Fails with [`AuthError::HashingFailure`] if `hasher` cannot produce a digest at all.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: PasswordHasher,
        tokens: Arc<TokenIssuer>,
        login_policy: LoginPolicy,
    ) -> Result<Self, AuthError> {
        let decoy_digest = hasher.hash(&Uuid::new_v4().to_string())?;
        Ok(Self {
            users,
            hasher,
            tokens,
            login_policy,
            decoy_digest: Arc::from(decoy_digest),
        })
    }

    /// Registers `email` with a freshly salted digest of `password`.
    ///
    /// The lookup is only a fast path; a concurrent registration that wins the race is caught
    /// by the store's unique constraint and reported as [`AuthError::DuplicateCredential`] too.
    pub async fn register(&self, email: &str, password: &str) -> Result<PublicUser, AuthError> {
        if self.users.find_user_by_email(email).await?.is_some() {
            return Err(AuthError::DuplicateCredential);
        }

        let digest = self.hash(password).await?;

        let user = self
            .users
            .create_user(email, &digest)
            .await?
            .ok_or_else(|| AuthError::PersistenceFailure("store returned no user record".into()))?;

        log::info!("registered user {}", user.id);
        Ok(user.public_view())
    }

    pub async fn authenticate(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let Some(user) = self.users.find_user_by_email(email).await? else {
            // The result is irrelevant; the call only equalises timing with a real mismatch.
            let _ = self.verify(password, &self.decoy_digest).await?;
            return Err(AuthError::CredentialNotFound);
        };

        if !self.verify(password, &user.password_hash).await? {
            return Err(AuthError::CredentialMismatch);
        }

        let public = user.public_view();
        match self.login_policy {
            LoginPolicy::IssueToken => {
                let token = self.tokens.issue(public.id, &public.email)?;
                Ok(LoginOutcome::Token(AuthResponse {
                    token,
                    token_type: "Bearer".to_string(),
                    expires_in: self.tokens.ttl().num_seconds(),
                    user: public,
                }))
            }
            LoginPolicy::PublicView => Ok(LoginOutcome::User(public)),
        }
    }

    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        web::block(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::HashingFailure(e.to_string()))?
            .map_err(AuthError::from)
    }

    async fn verify(&self, password: &str, digest: &str) -> Result<bool, AuthError> {
        let hasher = self.hasher;
        let password = password.to_owned();
        let digest = digest.to_owned();
        web::block(move || hasher.verify(&password, &digest))
            .await
            .map_err(|e| AuthError::HashingFailure(e.to_string()))?
            .map_err(AuthError::from)
    }
}

pub mod extractors;
pub mod middleware;
pub mod password;
pub mod service;
pub mod token;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use extractors::AuthenticatedUser;
pub use middleware::AuthMiddleware;
pub use password::PasswordHasher;
pub use service::{AuthError, AuthResponse, IdentityService, LoginOutcome, LoginPolicy};
pub use token::{Claims, TokenError, TokenIssuer};

/// Represents the payload for a new user registration request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address for the new account.
    /// Must be a valid email format.
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    /// Password for the new account.
    /// Must be between 4 and 12 characters long.
    #[validate(length(
        min = 4,
        max = 12,
        message = "password length must be between 4 and 12 characters"
    ))]
    pub password: String,
}

/// Represents the payload for a user login request.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_validation() {
        let valid_register = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid_register.validate().is_ok());

        let invalid_email = RegisterRequest {
            email: "testgmail.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(invalid_email.validate().is_err());

        let short_password = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "123".to_string(),
        };
        assert!(short_password.validate().is_err());

        let long_password = RegisterRequest {
            email: "a@x.com".to_string(),
            password: "1234567890123".to_string(),
        };
        assert!(long_password.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let valid_login = LoginRequest {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(valid_login.validate().is_ok());

        let empty_password = LoginRequest {
            email: "a@x.com".to_string(),
            password: String::new(),
        };
        assert!(empty_password.validate().is_err());
    }
}

//! Bearer token parsing.
//!
//! The token carries no signature or expiry; its value is looked up verbatim
//! against usernames.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("authorization scheme must be Bearer")]
    WrongScheme,

    #[error("bearer token is empty")]
    Empty,
}

/// A bearer token taken from an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BearerToken(String);

impl BearerToken {
    /// Parse the raw `Authorization` header value (`Bearer <token>`).
    pub fn from_header(value: &str) -> Result<Self, TokenError> {
        let token = value
            .strip_prefix("Bearer ")
            .ok_or(TokenError::WrongScheme)?
            .trim();

        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        Ok(Self(token.to_string()))
    }

    /// The username this token claims to be.
    pub fn username(&self) -> &str {
        &self.0
    }
}

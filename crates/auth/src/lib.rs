//! `banklite-auth`: password hashing and the bearer-token shim.
//!
//! This crate is intentionally decoupled from HTTP and storage.
//!
//! There is no real session layer: a bearer token is the plaintext username,
//! so anyone who knows a username can act as that user.

pub mod password;
pub mod principal;
pub mod token;

pub use password::{DEFAULT_COST, MAX_COST, MIN_COST, PasswordError, PasswordHasher};
pub use principal::Principal;
pub use token::{BearerToken, TokenError};

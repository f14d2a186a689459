pub mod auth;

pub use auth::{AccessToken, TokenClaims};

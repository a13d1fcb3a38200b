//! Shared errors, auth tokens, and configuration for Lingua.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error type with HTTP status mapping
//! - JWT claims and token validation
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

pub use auth::Claims;
pub use config::AppConfig;
pub use error::AppError;
pub use jwt::{JwtConfig, JwtError, JwtService};

//! Veterinary clinic record-keeping service.
//!
//! A REST API for managing users, owners, animals, and vaccinations behind
//! role-based login. The authentication core — bcrypt password hashing,
//! stateless JWT session tokens, the bearer-token auth gate, and the
//! account-activation gate — lives in [`auth`] and [`middleware`]; the
//! entity CRUD modules sit behind the gate per the protection table in
//! [`routes::router`].

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication: credentials, hashing, tokens, signup/login
pub mod auth;

/// Auth gate and role gate middleware
pub mod middleware;

/// API error taxonomy
pub mod error;

/// Owner records
pub mod owners;

/// Animal records
pub mod animals;

/// Vaccination records
pub mod vaccinations;

/// Administrative user management
pub mod admin;

pub use error::ApiError;
pub use server::{create_app, AppState};

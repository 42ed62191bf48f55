//! Request handlers, one module per feature.

pub mod auth;
pub mod health;

//! Baaham API — the HTTP boundary.
//!
//! Translates requests into service calls and service outcomes into
//! JSON responses. Handlers stay thin; every decision about credentials
//! lives in `baaham-auth`.

pub mod error;
pub mod handlers;
mod routes;

pub use error::ApiError;
pub use routes::router;

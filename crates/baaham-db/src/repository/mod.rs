//! SurrealDB repository implementations.

mod health;
mod user;

pub use health::SurrealHealthRepository;
pub use user::SurrealUserRepository;

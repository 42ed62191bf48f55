//! Domain models for Baaham.

pub mod user;

//! Baaham Core — domain models, the shared error taxonomy and the
//! repository traits every other crate is written against.

pub mod error;
pub mod health;
pub mod models;
pub mod repository;

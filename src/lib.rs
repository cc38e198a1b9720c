//! recipe-categories - recipe groupings for sidebar display
//!
//! A closed set of categories with stable integer identities, display-name
//! keys and an integer serialization.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use error::AppError;
pub use models::{Category, LocalizedKey};

//! Domain models for recipe grouping.

mod category;
mod label;

pub use category::Category;
pub use label::LocalizedKey;

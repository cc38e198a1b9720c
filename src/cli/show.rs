//! Show command handler.

use color_eyre::Result;

use crate::config::OutputFormat;
use crate::models::Category;

use super::{render_one, App};

impl App {
    /// Decode `id` and print the matching category.
    pub fn run_show(&self, id: i64, format: OutputFormat) -> Result<()> {
        let category = Category::from_id(id)?;
        tracing::debug!("Resolved identity {} to {:?}", id, category);
        println!("{}", render_one(category, format)?);
        Ok(())
    }
}

//! List command handler.

use color_eyre::Result;

use crate::config::OutputFormat;
use crate::models::Category;

use super::{render_many, App};

impl App {
    /// Print every category in declaration order.
    pub fn run_list(&self, format: OutputFormat) -> Result<()> {
        let categories = Category::all();
        tracing::debug!("Listing {} categories", categories.len());
        println!("{}", render_many(categories, format)?);
        Ok(())
    }
}

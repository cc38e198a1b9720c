//! Rendering of command results.

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::AppError;
use crate::models::{Category, LocalizedKey};

/// Category information as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct CategoryResult {
    /// Stable identity.
    pub id: Category,
    /// Localization key of the display name.
    pub label: LocalizedKey,
}

impl From<Category> for CategoryResult {
    fn from(category: Category) -> Self {
        Self {
            id: category,
            label: category.localized_name(),
        }
    }
}

/// Renders a single category.
pub fn render_one(category: Category, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(text_line(category)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&CategoryResult::from(
            category,
        ))?),
    }
}

/// Renders several categories, preserving their order.
pub fn render_many(categories: &[Category], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(categories
            .iter()
            .map(|c| text_line(*c))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let results: Vec<CategoryResult> =
                categories.iter().copied().map(CategoryResult::from).collect();
            Ok(serde_json::to_string_pretty(&results)?)
        }
    }
}

fn text_line(category: Category) -> String {
    format!("{}\t{}", category.id(), category.localized_name())
}

//! Category enum for grouping recipes in the sidebar.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::LocalizedKey;
use crate::error::AppError;

/// Fixed recipe groupings, in sidebar order.
///
/// Each variant carries a stable identity (its discriminant) that is used for
/// equality, ordering and persistence. Serialized form is that identity as an
/// integer, never the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    Dessert = 0,
    Pancake = 1,
    Salad = 2,
    Sandwich = 3,
}

const ALL: [Category; 4] = [
    Category::Dessert,
    Category::Pancake,
    Category::Salad,
    Category::Sandwich,
];

impl Category {
    /// Returns the stable identity of this category (0-3).
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Returns a static slice of all categories in declaration order.
    pub fn all() -> &'static [Category] {
        &ALL
    }

    /// Iterates over all categories in declaration order.
    pub fn iter() -> impl Iterator<Item = Category> {
        ALL.into_iter()
    }

    /// Decodes a category from its identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownCategory`] for anything outside `0..=3`.
    pub fn from_id(id: i64) -> Result<Self, AppError> {
        match id {
            0 => Ok(Category::Dessert),
            1 => Ok(Category::Pancake),
            2 => Ok(Category::Salad),
            3 => Ok(Category::Sandwich),
            _ => {
                tracing::debug!(id, "rejecting unknown category identity");
                Err(AppError::UnknownCategory(id))
            }
        }
    }

    /// The localization key for this category's display name.
    pub fn localized_name(&self) -> LocalizedKey {
        match self {
            Category::Dessert => LocalizedKey::new("Dessert"),
            Category::Pancake => LocalizedKey::new("Pancake"),
            Category::Salad => LocalizedKey::new("Salad"),
            Category::Sandwich => LocalizedKey::new("Sandwich"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.localized_name().fmt(f)
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.id()
    }
}

impl From<Category> for i64 {
    fn from(category: Category) -> Self {
        i64::from(category.id())
    }
}

impl TryFrom<i64> for Category {
    type Error = AppError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl TryFrom<u8> for Category {
    type Error = AppError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(i64::from(id))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_u8(CategoryVisitor)
    }
}

struct CategoryVisitor;

impl Visitor<'_> for CategoryVisitor {
    type Value = Category;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a category identity between 0 and 3")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Category, E> {
        Category::from_id(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Category, E> {
        // Anything past i64::MAX is out of range anyway.
        let id = i64::try_from(v).unwrap_or(i64::MAX);
        Category::from_id(id).map_err(E::custom)
    }
}

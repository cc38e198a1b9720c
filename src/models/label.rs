//! Localization keys for display names.

use std::fmt;

use serde::Serialize;

/// A key into the host application's string catalog.
///
/// Only the key is produced here; resolving it to translated text belongs to
/// whatever renders the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocalizedKey(&'static str);

impl LocalizedKey {
    pub(crate) const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Returns the raw key.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LocalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for LocalizedKey {
    fn as_ref(&self) -> &str {
        self.0
    }
}

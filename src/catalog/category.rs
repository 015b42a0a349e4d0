//! Category definitions - static identity pools.
//!
//! A `Category` is a themed pool of candidate identities ("Famous people",
//! "Animals", ...). It is supplied by the caller and never changes once
//! built.

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Unique identifier for a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl CategoryId {
    /// Create a new category ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category({})", self.0)
    }
}

/// A themed pool of identities.
///
/// ## Example
///
/// ```
/// use impostor_engine::catalog::{Category, CategoryId};
///
/// let pirates = Category::new(CategoryId::new(1), "Pirates", "🏴‍☠️", ["Blackbeard", "Anne Bonny"]).unwrap();
///
/// assert_eq!(pirates.name(), "Pirates");
/// assert_eq!(pirates.identities().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    glyph: String,
    identities: Vec<String>,
}

impl Category {
    /// Create a category.
    ///
    /// Fails if `identities` is empty.
    pub fn new<I, S>(
        id: CategoryId,
        name: impl Into<String>,
        glyph: impl Into<String>,
        identities: I,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let identities: Vec<String> = identities.into_iter().map(Into::into).collect();
        if identities.is_empty() {
            return Err(CatalogError::EmptyIdentities(id));
        }

        Ok(Self {
            id,
            name: name.into(),
            glyph: glyph.into(),
            identities,
        })
    }

    /// Unique key.
    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display glyph (usually an emoji).
    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Candidate identities, in catalog order. Never empty.
    #[must_use]
    pub fn identities(&self) -> &[String] {
        &self.identities
    }

    /// Whether `identity` is one of this category's identities.
    #[must_use]
    pub fn contains(&self, identity: &str) -> bool {
        self.identities.iter().any(|i| i == identity)
    }
}

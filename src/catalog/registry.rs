//! Category catalog for lookup by ID.
//!
//! The `CategoryCatalog` stores the selectable categories in display order
//! and indexes them by `CategoryId`.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::category::{Category, CategoryId};
use super::CatalogError;

/// Ordered catalog of categories.
///
/// ## Example
///
/// ```
/// use impostor_engine::catalog::{Category, CategoryCatalog, CategoryId};
///
/// let mut catalog = CategoryCatalog::new();
/// catalog
///     .register(Category::new(CategoryId::new(1), "Pirates", "🏴‍☠️", ["Blackbeard"]).unwrap())
///     .unwrap();
///
/// let found = catalog.get(CategoryId::new(1)).unwrap();
/// assert_eq!(found.name(), "Pirates");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryCatalog {
    categories: Vec<Arc<Category>>,
    index: FxHashMap<CategoryId, usize>,
}

impl CategoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from categories in display order.
    pub fn from_categories(
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for category in categories {
            catalog.register(category)?;
        }
        Ok(catalog)
    }

    /// Append a category.
    ///
    /// Fails if a category with the same ID is already registered.
    pub fn register(&mut self, category: Category) -> Result<(), CatalogError> {
        let id = category.id();
        if self.index.contains_key(&id) {
            return Err(CatalogError::DuplicateCategory(id));
        }
        self.index.insert(id, self.categories.len());
        self.categories.push(Arc::new(category));
        Ok(())
    }

    /// Get a category by ID.
    #[must_use]
    pub fn get(&self, id: CategoryId) -> Option<&Arc<Category>> {
        self.index.get(&id).map(|&i| &self.categories[i])
    }

    /// Check if a category ID is registered.
    #[must_use]
    pub fn contains(&self, id: CategoryId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Category>> {
        self.categories.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: u32, name: &str) -> Category {
        Category::new(CategoryId::new(id), name, "*", ["a", "b"]).unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = CategoryCatalog::new();
        catalog.register(category(1, "Test")).unwrap();

        let found = catalog.get(CategoryId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name(), "Test");

        assert!(catalog.get(CategoryId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = CategoryCatalog::new();

        catalog.register(category(1, "A")).unwrap();
        let err = catalog.register(category(1, "B")).unwrap_err();

        assert_eq!(err, CatalogError::DuplicateCategory(CategoryId::new(1)));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(CategoryId::new(1)).unwrap().name(), "A");
    }

    #[test]
    fn test_iteration_keeps_order() {
        let catalog = CategoryCatalog::from_categories([
            category(5, "Five"),
            category(2, "Two"),
            category(9, "Nine"),
        ])
        .unwrap();

        let names: Vec<_> = catalog.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Five", "Two", "Nine"]);
    }

    #[test]
    fn test_from_categories_duplicate() {
        let result = CategoryCatalog::from_categories([category(1, "A"), category(1, "B")]);
        assert!(matches!(result, Err(CatalogError::DuplicateCategory(_))));
    }

    #[test]
    fn test_len_contains_empty() {
        let mut catalog = CategoryCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(category(1, "A")).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.contains(CategoryId::new(1)));
        assert!(!catalog.contains(CategoryId::new(2)));
    }
}

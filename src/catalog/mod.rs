//! Category catalog: the identity pools a round can draw from.
//!
//! ## Key Types
//!
//! - `CategoryId`: Unique category key
//! - `Category`: Display name, glyph and a non-empty identity list
//! - `CategoryCatalog`: Ordered, read-only lookup handed to the engine

pub mod category;
pub mod registry;

pub use category::{Category, CategoryId};
pub use registry::CategoryCatalog;

use thiserror::Error;

/// Catalog construction errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A category was built with no identities to draw from.
    #[error("{0} has no identities")]
    EmptyIdentities(CategoryId),

    /// Two categories share an ID.
    #[error("{0} already registered")]
    DuplicateCategory(CategoryId),
}

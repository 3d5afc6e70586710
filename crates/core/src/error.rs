//! Domain error model.

use thiserror::Error;

use crate::id::{CategoryId, ProductId, UserId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A foreign key in the reference data that does not resolve.
///
/// These are recoverable: the join reports them instead of failing.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// A product references a category that does not exist.
    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory {
        product_id: ProductId,
        category_id: CategoryId,
    },

    /// A category references an owner that does not exist.
    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner {
        category_id: CategoryId,
        owner_id: UserId,
    },
}

/// Domain-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A requested entity was not found.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Reference data is inconsistent.
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<u64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}

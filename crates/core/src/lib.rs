//! `prodcat-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id};
pub use error::{DataIntegrityError, DomainError, DomainResult};
pub use id::{CategoryId, ProductId, SessionId, UserId};

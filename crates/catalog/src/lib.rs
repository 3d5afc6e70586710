//! Product catalog module.
//!
//! This crate contains the reference data model, the product/category/user
//! join, the filter state machine and its evaluation, and the view model the
//! front ends render. It is deterministic domain logic (no rendering, no IO
//! beyond loading fixtures).

pub mod filter;
pub mod join;
pub mod model;
pub mod reference;
pub mod session;
pub mod view;

pub use filter::{FilterAction, FilterState, evaluate};
pub use join::{IntegrityPolicy, Join, build_join};
pub use model::{Category, EnrichedProduct, Product, Sex, User};
pub use reference::{Collection, FixtureError, ReferenceData};
pub use session::CatalogSession;
pub use view::{CatalogView, NO_MATCHING_MESSAGE, ProductRow, TableBody, UserStyle};

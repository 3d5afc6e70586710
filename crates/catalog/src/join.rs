//! Join of products with their category and the category's owner.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use prodcat_core::{DataIntegrityError, DomainError};

use crate::model::EnrichedProduct;
use crate::reference::ReferenceData;

/// What to do with a product whose foreign keys do not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityPolicy {
    /// Keep the product; unresolved sides are `None`.
    #[default]
    Keep,
    /// Leave the product out of the join.
    Skip,
}

impl IntegrityPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrityPolicy::Keep => "keep",
            IntegrityPolicy::Skip => "skip",
        }
    }
}

impl FromStr for IntegrityPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep" => Ok(IntegrityPolicy::Keep),
            "skip" => Ok(IntegrityPolicy::Skip),
            other => Err(DomainError::validation(format!(
                "integrity policy must be 'keep' or 'skip', got '{other}'"
            ))),
        }
    }
}

/// Result of joining the reference data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Join {
    /// Enriched products, in reference order.
    pub products: Vec<EnrichedProduct>,
    /// Distinct integrity issues, in discovery order.
    pub issues: Vec<DataIntegrityError>,
}

/// Resolve every product's category and owner.
///
/// Never fails: dangling keys are collected into [`Join::issues`] and handled
/// according to `policy`.
pub fn build_join(reference: &ReferenceData, policy: IntegrityPolicy) -> Join {
    let mut join = Join {
        products: Vec::with_capacity(reference.products().len()),
        issues: Vec::new(),
    };

    for product in reference.products() {
        let category = reference.category(product.category_id);
        let user = category.and_then(|c| reference.user(c.owner_id));

        let issue = match category {
            None => Some(DataIntegrityError::UnknownCategory {
                product_id: product.id,
                category_id: product.category_id,
            }),
            Some(c) if user.is_none() => Some(DataIntegrityError::UnknownOwner {
                category_id: c.id,
                owner_id: c.owner_id,
            }),
            Some(_) => None,
        };

        if let Some(issue) = issue {
            if !join.issues.contains(&issue) {
                tracing::warn!(product_id = %product.id, policy = policy.as_str(), "{issue}");
                join.issues.push(issue);
            }
            if policy == IntegrityPolicy::Skip {
                continue;
            }
        }

        join.products.push(EnrichedProduct {
            id: product.id,
            name: product.name.clone(),
            category: category.cloned(),
            user: user.cloned(),
        });
    }

    join
}

//! Catalog session: owns the reference data, its join, and the filter state.
//!
//! The join is computed when the session is created and again on
//! [`CatalogSession::reload`]; every other operation reads it. Each action
//! and the recomputation that follows it run synchronously in one call.

use prodcat_core::{DataIntegrityError, DomainError, DomainResult, SessionId};

use crate::filter::{FilterAction, FilterState, evaluate};
use crate::join::{IntegrityPolicy, Join, build_join};
use crate::model::EnrichedProduct;
use crate::reference::ReferenceData;
use crate::view::CatalogView;

#[derive(Debug, Clone)]
pub struct CatalogSession {
    id: SessionId,
    reference: ReferenceData,
    policy: IntegrityPolicy,
    join: Join,
    state: FilterState,
}

impl CatalogSession {
    pub fn new(reference: ReferenceData, policy: IntegrityPolicy) -> Self {
        let id = SessionId::new();
        let join = build_join(&reference, policy);
        tracing::info!(
            session_id = %id,
            products = join.products.len(),
            integrity_issues = join.issues.len(),
            policy = policy.as_str(),
            "catalog session started"
        );

        Self {
            id,
            reference,
            policy,
            join,
            state: FilterState::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Every enriched product, before filtering.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.join.products
    }

    pub fn issues(&self) -> &[DataIntegrityError] {
        &self.join.issues
    }

    /// Apply one filter action.
    ///
    /// Selecting a user or toggling a category that the reference data does not
    /// contain is rejected and leaves the state untouched.
    pub fn dispatch(&mut self, action: FilterAction) -> DomainResult<()> {
        match &action {
            FilterAction::SetUser(Some(id)) if self.reference.user(*id).is_none() => {
                return Err(DomainError::not_found("user", *id));
            }
            FilterAction::ToggleCategory(id) if self.reference.category(*id).is_none() => {
                return Err(DomainError::not_found("category", *id));
            }
            _ => {}
        }

        tracing::debug!(session_id = %self.id, ?action, "filter action");
        self.state.apply(action);
        Ok(())
    }

    /// Products matching the current filter state, in reference order.
    pub fn filtered(&self) -> Vec<&EnrichedProduct> {
        evaluate(&self.join.products, &self.state)
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::build(&self.reference, &self.state, &self.filtered())
    }

    /// Replace the reference data and recompute the join.
    ///
    /// Selections that no longer resolve are dropped; the search text is kept.
    pub fn reload(&mut self, reference: ReferenceData) {
        self.join = build_join(&reference, self.policy);
        self.state.retain_known(
            |u| reference.user(u).is_some(),
            |c| reference.category(c).is_some(),
        );
        self.reference = reference;
        tracing::info!(
            session_id = %self.id,
            products = self.join.products.len(),
            integrity_issues = self.join.issues.len(),
            "reference data reloaded"
        );
    }
}

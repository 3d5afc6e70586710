//! Applying page events to the session and reporting rejections.

use prodcat_catalog::{CatalogSession, FilterAction};

/// Dispatch `action`, returning the message to show when the session rejects it.
///
/// A rejected action leaves the session unchanged.
pub fn apply(session: &mut CatalogSession, action: FilterAction) -> Option<String> {
    match session.dispatch(action) {
        Ok(()) => None,
        Err(e) => {
            tracing::warn!(session_id = %session.id(), error = %e, "rejected filter action");
            Some(e.to_string())
        }
    }
}

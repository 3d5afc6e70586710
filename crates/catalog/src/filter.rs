//! Filter state, its transitions, and evaluation over enriched products.
//!
//! The three criteria are independent and combined with logical AND:
//!
//! - **user**: no selection, or the product's owner is the selected user
//! - **search**: product name contains the search text, case-insensitively
//! - **categories**: no selection, or the product's category is selected
//!
//! A product whose category or owner did not resolve never matches a filter
//! on that side, but still matches when the filter is inactive.

use serde::{Deserialize, Serialize};

use prodcat_core::{CategoryId, UserId};

use crate::model::EnrichedProduct;

/// A user-initiated change to the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterAction {
    /// Select a user, or `None` for all users.
    SetUser(Option<UserId>),
    SetSearch(String),
    ClearSearch,
    /// Add the category to the selection, or remove it if already selected.
    ToggleCategory(CategoryId),
    ClearCategories,
    /// Return to the initial state in a single transition.
    ResetAll,
}

/// Active filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    selected_user: Option<UserId>,
    search_text: String,
    /// Insertion-ordered, no duplicates.
    selected_categories: Vec<CategoryId>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_user(&self) -> Option<UserId> {
        self.selected_user
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_categories(&self) -> &[CategoryId] {
        &self.selected_categories
    }

    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.selected_categories.contains(&id)
    }

    /// True when no criterion is active.
    pub fn is_unfiltered(&self) -> bool {
        self.selected_user.is_none()
            && self.search_text.is_empty()
            && self.selected_categories.is_empty()
    }

    pub fn set_user(&mut self, user: Option<UserId>) {
        self.selected_user = user;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn toggle_category(&mut self, id: CategoryId) {
        if let Some(pos) = self.selected_categories.iter().position(|c| *c == id) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(id);
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::SetUser(user) => self.set_user(user),
            FilterAction::SetSearch(text) => self.set_search(text),
            FilterAction::ClearSearch => self.clear_search(),
            FilterAction::ToggleCategory(id) => self.toggle_category(id),
            FilterAction::ClearCategories => self.clear_categories(),
            FilterAction::ResetAll => self.reset_all(),
        }
    }

    /// Drop selections rejected by the predicates (used after a data reload).
    pub(crate) fn retain_known(
        &mut self,
        user_known: impl Fn(UserId) -> bool,
        category_known: impl Fn(CategoryId) -> bool,
    ) {
        if self.selected_user.is_some_and(|u| !user_known(u)) {
            self.selected_user = None;
        }
        self.selected_categories.retain(|c| category_known(*c));
    }

    /// Whether a single product satisfies every active criterion.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        Matcher::new(self).matches(product)
    }
}

/// Evaluate `state` over `products`, preserving order.
pub fn evaluate<'a>(products: &'a [EnrichedProduct], state: &FilterState) -> Vec<&'a EnrichedProduct> {
    let matcher = Matcher::new(state);
    products.iter().filter(|p| matcher.matches(p)).collect()
}

/// Filter state with the search needle lowered once.
struct Matcher<'s> {
    state: &'s FilterState,
    needle: String,
}

impl<'s> Matcher<'s> {
    fn new(state: &'s FilterState) -> Self {
        Self {
            state,
            needle: state.search_text.to_lowercase(),
        }
    }

    fn matches(&self, product: &EnrichedProduct) -> bool {
        self.matches_user(product) && self.matches_search(product) && self.matches_category(product)
    }

    fn matches_user(&self, product: &EnrichedProduct) -> bool {
        match self.state.selected_user {
            None => true,
            Some(selected) => product.user_id() == Some(selected),
        }
    }

    fn matches_search(&self, product: &EnrichedProduct) -> bool {
        self.needle.is_empty() || product.name.to_lowercase().contains(&self.needle)
    }

    fn matches_category(&self, product: &EnrichedProduct) -> bool {
        if self.state.selected_categories.is_empty() {
            return true;
        }
        product
            .category_id()
            .is_some_and(|id| self.state.is_category_selected(id))
    }
}

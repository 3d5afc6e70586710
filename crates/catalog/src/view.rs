//! Presentation-neutral description of the catalog page.
//!
//! Renderers (text, JSON, web) consume a [`CatalogView`]; none of them look at
//! the filter state or the reference data directly.

use serde::Serialize;

use prodcat_core::{CategoryId, ProductId, UserId};

use crate::filter::FilterState;
use crate::model::EnrichedProduct;
use crate::reference::ReferenceData;

/// Shown instead of the table when nothing matches.
pub const NO_MATCHING_MESSAGE: &str = "No products matching selected criteria";

pub const UNKNOWN_CATEGORY: &str = "Unknown category";
pub const UNKNOWN_USER: &str = "Unknown user";

/// A tab in the user filter. `id` is `None` for the "All" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTab {
    pub id: Option<UserId>,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    pub text: String,
    pub show_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub id: CategoryId,
    pub label: String,
    pub active: bool,
}

/// Icon shown next to a column header.
///
/// Decorative only: no ordering is ever applied to the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortIcon {
    Unsorted,
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub title: &'static str,
    pub sort_icon: SortIcon,
}

/// Header row of the product table.
pub const COLUMNS: [Column; 4] = [
    Column {
        title: "ID",
        sort_icon: SortIcon::Unsorted,
    },
    Column {
        title: "Product",
        sort_icon: SortIcon::Descending,
    },
    Column {
        title: "Category",
        sort_icon: SortIcon::Ascending,
    },
    Column {
        title: "User",
        sort_icon: SortIcon::Unsorted,
    },
];

/// How the owner name is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStyle {
    Male,
    NonMale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub user: String,
    pub user_style: UserStyle,
}

impl From<&EnrichedProduct> for ProductRow {
    fn from(product: &EnrichedProduct) -> Self {
        let category = match &product.category {
            Some(c) => format!("{} - {}", c.icon, c.title),
            None => UNKNOWN_CATEGORY.to_string(),
        };
        let (user, user_style) = match &product.user {
            Some(u) if u.sex.is_male() => (u.name.clone(), UserStyle::Male),
            Some(u) => (u.name.clone(), UserStyle::NonMale),
            None => (UNKNOWN_USER.to_string(), UserStyle::NonMale),
        };

        Self {
            id: product.id,
            name: product.name.clone(),
            category,
            user,
            user_style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableBody {
    Rows { rows: Vec<ProductRow> },
    Empty { message: &'static str },
}

impl TableBody {
    pub fn rows(&self) -> &[ProductRow] {
        match self {
            TableBody::Rows { rows } => rows,
            TableBody::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, TableBody::Empty { .. })
    }
}

/// The whole page: filter controls plus the table or empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub user_tabs: Vec<UserTab>,
    pub search: SearchBox,
    pub all_categories_active: bool,
    pub category_buttons: Vec<CategoryButton>,
    pub columns: Vec<Column>,
    pub body: TableBody,
}

impl CatalogView {
    pub fn build(
        reference: &ReferenceData,
        state: &FilterState,
        filtered: &[&EnrichedProduct],
    ) -> Self {
        let selected_user = state.selected_user();

        let mut user_tabs = Vec::with_capacity(reference.users().len() + 1);
        user_tabs.push(UserTab {
            id: None,
            label: "All".to_string(),
            active: selected_user.is_none(),
        });
        user_tabs.extend(reference.users().iter().map(|u| UserTab {
            id: Some(u.id),
            label: u.name.clone(),
            active: selected_user == Some(u.id),
        }));

        let category_buttons = reference
            .categories()
            .iter()
            .map(|c| CategoryButton {
                id: c.id,
                label: c.title.clone(),
                active: state.is_category_selected(c.id),
            })
            .collect();

        let body = if filtered.is_empty() {
            TableBody::Empty {
                message: NO_MATCHING_MESSAGE,
            }
        } else {
            TableBody::Rows {
                rows: filtered.iter().map(|p| ProductRow::from(*p)).collect(),
            }
        };

        Self {
            user_tabs,
            search: SearchBox {
                text: state.search_text().to_string(),
                show_clear: !state.search_text().is_empty(),
            },
            all_categories_active: state.selected_categories().is_empty(),
            category_buttons,
            columns: COLUMNS.to_vec(),
            body,
        }
    }
}

//! CSS classes (Bulma) for the catalog page, derived from the view model.

use prodcat_catalog::view::{CategoryButton, SortIcon, UserStyle, UserTab};

pub fn user_tab(tab: &UserTab) -> &'static str {
    if tab.active { "is-active" } else { "" }
}

/// The "All" categories button is solid while nothing is selected.
pub fn all_categories_button(active: bool) -> &'static str {
    if active {
        "button is-success"
    } else {
        "button is-outlined"
    }
}

pub fn category_button(button: &CategoryButton) -> &'static str {
    if button.active {
        "button mr-2 my-1 is-info"
    } else {
        "button mr-2 my-1"
    }
}

pub fn sort_icon(icon: SortIcon) -> &'static str {
    match icon {
        SortIcon::Unsorted => "fas fa-sort",
        SortIcon::Ascending => "fas fa-sort-up",
        SortIcon::Descending => "fas fa-sort-down",
    }
}

pub fn user_cell(style: UserStyle) -> &'static str {
    match style {
        UserStyle::Male => "has-text-link",
        UserStyle::NonMale => "has-text-danger",
    }
}

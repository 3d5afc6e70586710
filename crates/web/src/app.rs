//! Leptos catalog page.

use leptos::*;

use prodcat_catalog::view::{CatalogView, TableBody};
use prodcat_catalog::{CatalogSession, FilterAction, IntegrityPolicy, ReferenceData};

use crate::{classes, feedback};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    match ReferenceData::embedded() {
        Ok(reference) => {
            let session = CatalogSession::new(reference, IntegrityPolicy::Keep);
            view! { <CatalogPage session=session/> }.into_view()
        }
        Err(e) => view! {
            <p class="notification is-danger">{e.to_string()}</p>
        }
        .into_view(),
    }
}

/// Filter panel plus product table, driven by one session.
#[component]
fn CatalogPage(session: CatalogSession) -> impl IntoView {
    let session = create_rw_signal(session);
    let page = create_memo(move |_| session.with(|s| s.view()));
    let rejection = create_rw_signal(None::<String>);

    let dispatch = move |action: FilterAction| {
        let message = session.try_update(|s| feedback::apply(s, action)).flatten();
        rejection.set(message);
    };

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                {move || rejection.get().map(|message| view! {
                    <div data-cy="ActionError" class="notification is-danger is-light">
                        <button class="delete" on:click=move |_| rejection.set(None)></button>
                        {message}
                    </div>
                })}

                <div class="block">
                    <nav class="panel">
                        <p class="panel-heading">"Filters"</p>

                        <p class="panel-tabs has-text-weight-bold">
                            {move || page.with(|p| {
                                p.user_tabs.iter().map(|tab| {
                                    let id = tab.id;
                                    let data_cy = if id.is_some() { "FilterUser" } else { "FilterAllUsers" };
                                    view! {
                                        <a
                                            data-cy=data_cy
                                            href="#/"
                                            class=classes::user_tab(tab)
                                            on:click=move |_| dispatch(FilterAction::SetUser(id))
                                        >
                                            {tab.label.clone()}
                                        </a>
                                    }
                                }).collect_view()
                            })}
                        </p>

                        <div class="panel-block">
                            <p class="control has-icons-left has-icons-right">
                                <input
                                    data-cy="SearchField"
                                    type="text"
                                    class="input"
                                    placeholder="Search"
                                    prop:value=move || page.with(|p| p.search.text.clone())
                                    on:input=move |ev| dispatch(FilterAction::SetSearch(event_target_value(&ev)))
                                />

                                <span class="icon is-left">
                                    <i class="fas fa-search" aria-hidden="true"></i>
                                </span>

                                <Show when=move || page.with(|p| p.search.show_clear)>
                                    <span class="icon is-right">
                                        <button
                                            data-cy="ClearButton"
                                            type="button"
                                            class="delete"
                                            on:click=move |_| dispatch(FilterAction::ClearSearch)
                                        ></button>
                                    </span>
                                </Show>
                            </p>
                        </div>

                        <div class="panel-block is-flex-wrap-wrap">
                            <a
                                href="#/"
                                data-cy="AllCategories"
                                class=move || classes::all_categories_button(page.with(|p| p.all_categories_active))
                                on:click=move |_| dispatch(FilterAction::ClearCategories)
                            >
                                "All"
                            </a>

                            {move || page.with(|p| {
                                p.category_buttons.iter().map(|button| {
                                    let id = button.id;
                                    view! {
                                        <a
                                            data-cy="Category"
                                            href="#/"
                                            class=classes::category_button(button)
                                            on:click=move |_| dispatch(FilterAction::ToggleCategory(id))
                                        >
                                            {button.label.clone()}
                                        </a>
                                    }
                                }).collect_view()
                            })}
                        </div>

                        <div class="panel-block">
                            <a
                                data-cy="ResetAllButton"
                                href="#/"
                                class="button is-link is-outlined is-fullwidth"
                                on:click=move |_| dispatch(FilterAction::ResetAll)
                            >
                                "Reset all filters"
                            </a>
                        </div>
                    </nav>
                </div>

                <div class="box table-container">
                    {move || page.with(table_body)}
                </div>
            </div>
        </div>
    }
}

fn table_body(page: &CatalogView) -> View {
    match &page.body {
        TableBody::Empty { message } => view! {
            <p data-cy="NoMatchingMessage">{*message}</p>
        }
        .into_view(),
        TableBody::Rows { rows } => view! {
            <table data-cy="ProductTable" class="table is-striped is-narrow is-fullwidth">
                <thead>
                    <tr>
                        {page.columns.iter().map(|column| view! {
                            <th>
                                <span class="is-flex is-flex-wrap-nowrap">
                                    {column.title}
                                    <a href="#/">
                                        <span class="icon">
                                            <i data-cy="SortIcon" class=classes::sort_icon(column.sort_icon)></i>
                                        </span>
                                    </a>
                                </span>
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>

                <tbody>
                    {rows.iter().map(|row| view! {
                        <tr data-cy="Product">
                            <td class="has-text-weight-bold" data-cy="ProductId">{row.id.get()}</td>
                            <td data-cy="ProductName">{row.name.clone()}</td>
                            <td data-cy="ProductCategory">{row.category.clone()}</td>
                            <td data-cy="ProductUser" class=classes::user_cell(row.user_style)>
                                {row.user.clone()}
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        }
        .into_view(),
    }
}

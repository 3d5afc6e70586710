//! Text and JSON renderers for [`CatalogView`].

use std::fmt::Write as _;

use prodcat_catalog::view::{CatalogView, ProductRow, TableBody};

use crate::args::OutputFormat;

pub fn render(view: &CatalogView, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => serde_json::to_string_pretty(view),
    }
}

/// One summary line of active filters, then the table or the empty-state message.
pub fn render_text(view: &CatalogView) -> String {
    let mut out = summary(view);
    out.push('\n');

    match &view.body {
        TableBody::Empty { message } => out.push_str(message),
        TableBody::Rows { rows } => out.push_str(&table(view, rows)),
    }
    out
}

fn summary(view: &CatalogView) -> String {
    let user = view
        .user_tabs
        .iter()
        .find(|t| t.active)
        .map(|t| t.label.as_str())
        .unwrap_or("All");

    let categories = if view.all_categories_active {
        "All".to_string()
    } else {
        view.category_buttons
            .iter()
            .filter(|b| b.active)
            .map(|b| b.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "user: {user} | search: {:?} | categories: {categories}",
        view.search.text
    )
}

fn table(view: &CatalogView, rows: &[ProductRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                r.category.clone(),
                r.user.clone(),
            ]
        })
        .collect();

    let mut widths = [0usize; 4];
    for (i, column) in view.columns.iter().enumerate().take(4) {
        widths[i] = column.title.chars().count();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<&str> = view.columns.iter().map(|c| c.title).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&mut out, &row, &widths);
    }

    // Drop the final newline; callers add their own.
    out.pop();
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

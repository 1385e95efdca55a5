// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendered HTML documents for kitchen and packing staff.
//!
//! Two documents per branch: an item tally (what to prepare, with customer
//! notes) and an order list (what goes into each bag). Conversion to a
//! page-description format is left to external tooling.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use branchline_core::{Aggregation, BranchItemSummaries};
use branchline_domain::{Branch, ItemSummary, Order};

use crate::error::ReportError;
use crate::output::RunPaths;

/// Escapes text for safe embedding in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped: String = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders one branch's item tally document.
#[must_use]
pub fn render_items_document(branch: &Branch, items: &[ItemSummary]) -> String {
    let branch_label: String = escape_html(branch.label());
    let mut html: String = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{branch_label} items</title>\n</head>\n<body>\n\
         <h1>{branch_label}</h1>\n<table>\n\
         <tr><th>count</th><th>item</th><th>notes</th></tr>\n"
    );
    for item in items {
        let mut notes: String = String::new();
        for note in &item.notes {
            let _ = write!(
                notes,
                "<div>{} ({} x{})</div>",
                escape_html(&note.note),
                escape_html(&note.order_number),
                note.quantity
            );
        }
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            item.count,
            escape_html(&item.short_name),
            notes
        );
    }
    html.push_str("</table>\n</body>\n</html>\n");
    html
}

/// Renders one branch's order packing document.
#[must_use]
pub fn render_orders_document(branch: &Branch, orders: &[&Order]) -> String {
    let branch_label: String = escape_html(branch.label());
    let mut html: String = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{branch_label} orders</title>\n</head>\n<body>\n\
         <h1>{branch_label}</h1>\n"
    );
    for order in orders {
        let _ = write!(
            html,
            "<section>\n<h2>{}</h2>\n<p>{} — {}<br>{}, {}<br>{}</p>\n",
            escape_html(&order.order_number),
            escape_html(&order.shipping_name),
            escape_html(&order.shipping_phone),
            escape_html(&order.shipping_street),
            escape_html(&order.shipping_city),
            escape_html(&order.shipping_method),
        );
        if !order.notes.is_empty() {
            let _ = writeln!(html, "<p><em>{}</em></p>", escape_html(&order.notes));
        }
        html.push_str("<ul>\n");
        for item in &order.line_items {
            let _ = writeln!(
                html,
                "<li>{} x {}</li>",
                item.quantity,
                escape_html(&item.short_name)
            );
        }
        html.push_str("</ul>\n");
        if let Some(totals) = &order.totals {
            let _ = writeln!(
                html,
                "<p>items: {} (food: {}), food subtotal: {:.2}, tip: {:.2}, shipping: {:.2}</p>",
                totals.item_count,
                totals.food_item_count,
                totals.food_item_subtotal,
                totals.tip_total,
                totals.shipping_total
            );
        }
        html.push_str("</section>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// One branch's orders, ascending by order number.
fn branch_orders<'a>(aggregation: &'a Aggregation, branch: &Branch) -> Vec<&'a Order> {
    aggregation
        .orders
        .values()
        .filter(|order| &order.branch == branch)
        .collect()
}

/// Writes both documents for every branch.
///
/// A branch with nothing to render removes any stale document left by an
/// earlier run over the same stem.
///
/// # Errors
///
/// Returns [`ReportError::WriteOutput`] on the first failing file.
pub fn write_documents(
    paths: &RunPaths,
    aggregation: &Aggregation,
    summaries: &BranchItemSummaries,
) -> Result<(), ReportError> {
    for (branch, branch_summaries) in summaries {
        let path: PathBuf = paths.document_path(&format!("{branch}-items"));
        if branch_summaries.is_empty() {
            remove_stale(&path)?;
        } else {
            write_file(&path, &render_items_document(branch, branch_summaries))?;
        }
    }

    for branch in aggregation.buckets.branches() {
        let orders: Vec<&Order> = branch_orders(aggregation, branch);
        let path: PathBuf = paths.document_path(&format!("{branch}-orders"));
        if orders.is_empty() {
            remove_stale(&path)?;
        } else {
            write_file(&path, &render_orders_document(branch, &orders))?;
        }
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ReportError> {
    fs::write(path, content).map_err(|source| ReportError::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_stale(path: &Path) -> Result<(), ReportError> {
    if path.exists() {
        info!(path = %path.display(), "Removing stale document");
        fs::remove_file(path).map_err(|source| ReportError::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

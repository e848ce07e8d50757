// UI layer: turns API responses into the labeled lines the tool prints.
// The functions are small and synchronous to make the flow easy to follow;
// rendering is split from printing so tests can assert on the exact lines.

use crate::api::{self, ApiClient, Product, SearchResponse};
use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Width the field labels are padded to before the `: ` separator.
const LABEL_WIDTH: usize = 11;

/// Look up one barcode and print its product card.
///
/// Flow: fetch with a spinner, decode, then print. A non-found API status
/// becomes an `API error code: <n>` failure, so the caller only has to map
/// any error to a non-zero exit.
pub fn lookup(api: &ApiClient, ean: &str) -> Result<()> {
    let raw = with_spinner("Fetching product...", || api.fetch_product(ean))?;
    let (status, product) = api::parse_product(&raw)?;
    let product = match product {
        Some(product) => product,
        None => bail!("API error code: {}", status),
    };
    for line in render_product(&product) {
        println!("{line}");
    }
    Ok(())
}

/// Run a free-text search and print one line per result.
pub fn search(api: &ApiClient, terms: &str, country: Option<&str>, page: u32) -> Result<()> {
    let raw = with_spinner("Searching...", || api.fetch_search(terms, country, page))?;
    let results = api::parse_search(&raw)?;
    for line in render_search_results(&results) {
        println!("{line}");
    }
    Ok(())
}

/// Render a product as its labeled field lines, in fixed order. The name
/// line is always present (falling back to "Unknown"); every other field
/// is emitted only when non-empty, with the value copied verbatim.
pub fn render_product(product: &Product) -> Vec<String> {
    let mut lines = Vec::new();
    let name = product.product_name.as_deref().unwrap_or("Unknown");
    lines.push(format!("{:<LABEL_WIDTH$}: {}", "Name", name));
    push_field(&mut lines, "Brand", product.brands.as_deref());
    push_field(&mut lines, "Generic", product.generic_name.as_deref());
    push_field(&mut lines, "Quantity", product.quantity.as_deref());
    push_field(&mut lines, "Categories", product.categories.as_deref());
    let packaging = packaging_text(product);
    push_field(&mut lines, "Packaging", Some(packaging.as_str()));
    push_field(&mut lines, "Labels", product.labels.as_deref());
    lines
}

/// Render a page of search results: a summary line, then one line per
/// product with its barcode, name and brand.
pub fn render_search_results(results: &SearchResponse) -> Vec<String> {
    if results.products.is_empty() {
        return vec!["No products found.".into()];
    }
    let mut lines = vec![format!(
        "Found {} products (page {})",
        results.count, results.page
    )];
    for product in &results.products {
        let code = product.code.as_deref().unwrap_or("-");
        let name = product.product_name.as_deref().unwrap_or("Unknown");
        let line = match product.brands.as_deref().filter(|b| !b.is_empty()) {
            Some(brands) => format!("{code}  {name} ({brands})"),
            None => format!("{code}  {name}"),
        };
        lines.push(line);
    }
    lines
}

/// Push one `Label      : value` line, skipping absent or empty values.
fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.is_empty() {
            lines.push(format!("{label:<LABEL_WIDTH$}: {value}"));
        }
    }
}

/// Packaging text with the `packaging_tags` fallback: the primary field
/// wins when present; otherwise tags render verbatim for a string value
/// and comma-joined for an array of tags.
fn packaging_text(product: &Product) -> String {
    if let Some(packaging) = &product.packaging {
        return packaging.clone();
    }
    match &product.packaging_tags {
        Some(serde_json::Value::String(tags)) => tags.clone(),
        Some(serde_json::Value::Array(tags)) => tags
            .iter()
            .filter_map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// Run `call` while a spinner spins on stderr. The spinner is cleared
/// before returning so it never mixes into the printed output.
fn with_spinner<T>(message: &str, call: impl FnOnce() -> Result<T>) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = call();
    spinner.finish_and_clear();
    result
}

//! Catalog Filtering
//!
//! Pure computation of the visible catalog subset for a given filter state.
//! Called on every change to the category selector or search term.

use super::models::{FilterState, Product};

/// Returns the products passing both filter predicates, in catalog order.
///
/// A product passes when its category matches the selector (or the selector
/// is `All`) and its name contains the search term as a case-insensitive
/// substring (an empty term matches everything).
pub fn filter_products<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let needle = state.search.to_lowercase();
    products
        .iter()
        .filter(|p| state.category.matches(p.category))
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect()
}

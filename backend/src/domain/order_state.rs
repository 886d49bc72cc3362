//! Copy-on-write state for daily order records.
//!
//! The history and quantities maps are shared, long-lived structures: every
//! mutation returns a fresh top-level map and leaves the caller's reference
//! untouched, so a reload racing a local edit can never observe a partially
//! applied update. Intermediate maps are created on demand; lookups treat
//! absence at any level as "not set".

use shared::{OrderHistory, OrderQuantities};
use std::collections::HashMap;

/// Whether the given supplier's order was marked placed on the given day.
/// Defaults to false when either key is absent.
pub fn is_completed(history: &OrderHistory, day_key: &str, supplier_id: &str) -> bool {
    history
        .get(day_key)
        .and_then(|day| day.get(supplier_id))
        .copied()
        .unwrap_or(false)
}

/// Set the completion flag for a supplier on a day, returning the updated
/// history. Every other day key and supplier entry is preserved as-is.
pub fn set_completed(
    history: &OrderHistory,
    day_key: &str,
    supplier_id: &str,
    value: bool,
) -> OrderHistory {
    let mut updated = history.clone();
    updated
        .entry(day_key.to_string())
        .or_insert_with(HashMap::new)
        .insert(supplier_id.to_string(), value);
    updated
}

/// Quantity recorded for a product on a day, exactly as typed.
/// Returns "" when absent at any level.
pub fn get_quantity(
    quantities: &OrderQuantities,
    day_key: &str,
    supplier_id: &str,
    product_id: &str,
) -> String {
    quantities
        .get(day_key)
        .and_then(|day| day.get(supplier_id))
        .and_then(|supplier| supplier.get(product_id))
        .cloned()
        .unwrap_or_default()
}

/// Record a quantity for a product on a day, returning the updated map.
///
/// The value is stored as typed — empty strings, non-numeric input and
/// leading zeros included. Validation, if any, belongs to the form layer.
pub fn set_quantity(
    quantities: &OrderQuantities,
    day_key: &str,
    supplier_id: &str,
    product_id: &str,
    value: &str,
) -> OrderQuantities {
    let mut updated = quantities.clone();
    updated
        .entry(day_key.to_string())
        .or_insert_with(HashMap::new)
        .entry(supplier_id.to_string())
        .or_insert_with(HashMap::new)
        .insert(product_id.to_string(), value.to_string());
    updated
}

//! Ordered supplier list operations.
//!
//! Pure copy-on-write helpers over the registry `Vec`. Position matters: the
//! checklist and admin views render suppliers in registry order, so updates
//! replace in place rather than remove-and-append. Callers assign IDs before
//! adding; these functions never generate or validate anything.

use shared::Supplier;

/// Append a supplier. The caller must have assigned a unique ID already.
pub fn add(list: &[Supplier], supplier: Supplier) -> Vec<Supplier> {
    let mut updated = list.to_vec();
    updated.push(supplier);
    updated
}

/// Replace the supplier whose ID matches, preserving its position.
///
/// A silent no-op when no element matches; the service layer checks
/// existence first and reports the error there.
pub fn update(list: &[Supplier], supplier: Supplier) -> Vec<Supplier> {
    list.iter()
        .map(|existing| {
            if existing.id == supplier.id {
                supplier.clone()
            } else {
                existing.clone()
            }
        })
        .collect()
}

/// Remove the supplier with the given ID. A no-op when absent.
pub fn remove(list: &[Supplier], id: &str) -> Vec<Supplier> {
    list.iter().filter(|s| s.id != id).cloned().collect()
}

use std::sync::Arc;
use tracing::info;

use crate::domain::schedule::ScheduleService;
use crate::storage::CafeDataStore;
use shared::{
    ComplianceDay, ComplianceResponse, OrderLogDay, OrderLogEntry, OrderLogItem, Supplier,
};

/// Number of days shown by default in the compliance view
pub const DEFAULT_WINDOW_DAYS: usize = 7;

/// Label shown when an order record references a supplier that no longer exists
const FALLBACK_SUPPLIER_LABEL: &str = "Supplier";
/// Label shown when an order record references a product that no longer exists
const FALLBACK_PRODUCT_LABEL: &str = "Item";

/// Service for the rolling compliance and order-log views
#[derive(Clone)]
pub struct ComplianceService {
    store: Arc<CafeDataStore>,
    schedule: ScheduleService,
}

impl ComplianceService {
    pub fn new(store: Arc<CafeDataStore>) -> Self {
        Self {
            store,
            schedule: ScheduleService::new(),
        }
    }

    /// Build the rolling-window summary: per-day completion counts oldest
    /// first, and the recorded order log newest first with empty days
    /// omitted. The window is generated from date offsets, so it is
    /// chronological regardless of day-key string order.
    pub async fn compliance_window(&self, len: usize) -> ComplianceResponse {
        info!("Building compliance window over {} days", len);

        let data = self.store.snapshot().await;
        let window = self.schedule.window_ending_today(len);

        let days = window
            .iter()
            .map(|day| ComplianceDay {
                day_key: day.day_key.clone(),
                label: day.label.clone(),
                completed_count: data
                    .history
                    .get(&day.day_key)
                    .map(|by_supplier| by_supplier.values().filter(|done| **done).count())
                    .unwrap_or(0),
            })
            .collect();

        let logs = window
            .iter()
            .rev()
            .filter_map(|day| {
                let recorded = data.quantities.get(&day.day_key)?;

                let mut entries: Vec<OrderLogEntry> = recorded
                    .iter()
                    .map(|(supplier_id, items)| {
                        Self::log_entry(&data.suppliers, supplier_id, items)
                    })
                    .collect();
                // Map iteration order is arbitrary; keep the output stable
                entries.sort_by(|a, b| a.supplier_id.cmp(&b.supplier_id));

                Some(OrderLogDay {
                    day_key: day.day_key.clone(),
                    label: day.label.clone(),
                    entries,
                })
            })
            .collect();

        ComplianceResponse { days, logs }
    }

    /// Resolve one supplier's recorded quantities to display names, falling
    /// back to generic labels for ids that no longer resolve.
    fn log_entry(
        suppliers: &[Supplier],
        supplier_id: &str,
        items: &std::collections::HashMap<String, String>,
    ) -> OrderLogEntry {
        let supplier = suppliers.iter().find(|s| s.id == supplier_id);

        let supplier_name = supplier
            .map(|s| s.name.clone())
            .unwrap_or_else(|| FALLBACK_SUPPLIER_LABEL.to_string());

        let mut log_items: Vec<OrderLogItem> = items
            .iter()
            .map(|(product_id, quantity)| {
                let product_name = supplier
                    .and_then(|s| s.products.iter().find(|p| p.id == *product_id))
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| FALLBACK_PRODUCT_LABEL.to_string());

                OrderLogItem {
                    product_id: product_id.clone(),
                    product_name,
                    quantity: quantity.clone(),
                }
            })
            .collect();
        log_items.sort_by(|a, b| a.product_id.cmp(&b.product_id));

        OrderLogEntry {
            supplier_id: supplier_id.to_string(),
            supplier_name,
            items: log_items,
        }
    }
}

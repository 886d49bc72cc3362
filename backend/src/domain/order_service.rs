use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domain::order_state;
use crate::domain::schedule::ScheduleService;
use crate::storage::CafeDataStore;
use shared::{
    DueSupplier, SetCompletedRequest, SetCompletedResponse, SetQuantityRequest,
    SetQuantityResponse, TodayOrdersResponse,
};

/// Service for the daily ordering checklist
#[derive(Clone)]
pub struct OrderService {
    store: Arc<CafeDataStore>,
    schedule: ScheduleService,
}

impl OrderService {
    pub fn new(store: Arc<CafeDataStore>) -> Self {
        Self {
            store,
            schedule: ScheduleService::new(),
        }
    }

    /// Today's checklist: suppliers due on the current weekday, each with its
    /// completion flag and the quantities recorded so far.
    pub async fn today_board(&self) -> TodayOrdersResponse {
        let data = self.store.snapshot().await;

        let today = self.schedule.today();
        let day_key = self.schedule.day_key_for(today);
        let weekday = self.schedule.weekday_of(today);

        let suppliers = self
            .schedule
            .active_suppliers_for(today, &data.suppliers)
            .into_iter()
            .map(|supplier| {
                let completed = order_state::is_completed(&data.history, &day_key, &supplier.id);
                let quantities = supplier
                    .products
                    .iter()
                    .map(|product| {
                        let value = order_state::get_quantity(
                            &data.quantities,
                            &day_key,
                            &supplier.id,
                            &product.id,
                        );
                        (product.id.clone(), value)
                    })
                    .collect();

                DueSupplier {
                    supplier,
                    completed,
                    quantities,
                }
            })
            .collect();

        TodayOrdersResponse {
            day_key,
            weekday,
            suppliers,
        }
    }

    /// Mark a supplier's order as placed (or not) for a day.
    ///
    /// Defaults to today when no day key is given. The supplier ID is not
    /// checked against the registry: completion records outlive supplier
    /// definitions by design.
    pub async fn set_completed(&self, request: SetCompletedRequest) -> Result<SetCompletedResponse> {
        let day_key = request
            .day_key
            .unwrap_or_else(|| self.schedule.today_key());

        info!(
            "Setting completion for supplier {} on {} to {}",
            request.supplier_id, day_key, request.completed
        );

        let history = self.store.history().await;
        let updated = order_state::set_completed(
            &history,
            &day_key,
            &request.supplier_id,
            request.completed,
        );
        self.store.replace_history(updated).await?;

        Ok(SetCompletedResponse {
            day_key,
            supplier_id: request.supplier_id,
            completed: request.completed,
            success_message: "Order status saved".to_string(),
        })
    }

    /// Record a quantity for a product on a day, exactly as typed.
    pub async fn set_quantity(&self, request: SetQuantityRequest) -> Result<SetQuantityResponse> {
        let day_key = request
            .day_key
            .unwrap_or_else(|| self.schedule.today_key());

        info!(
            "Setting quantity for supplier {} product {} on {} to '{}'",
            request.supplier_id, request.product_id, day_key, request.value
        );

        let quantities = self.store.quantities().await;
        let updated = order_state::set_quantity(
            &quantities,
            &day_key,
            &request.supplier_id,
            &request.product_id,
            &request.value,
        );
        self.store.replace_quantities(updated).await?;

        Ok(SetQuantityResponse {
            day_key,
            supplier_id: request.supplier_id,
            product_id: request.product_id,
            value: request.value,
            success_message: "Quantity saved".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonFileStore;
    use shared::{Product, Supplier, Weekday};
    use tempfile::TempDir;

    async fn setup_test() -> (OrderService, Arc<CafeDataStore>, TempDir) {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let gateway = Arc::new(JsonFileStore::new(dir.path()).expect("Failed to create store"));
        let store = Arc::new(CafeDataStore::new(gateway));
        (OrderService::new(store.clone()), store, dir)
    }

    fn supplier_for_every_day(id: &str, name: &str) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: name.to_string(),
            days: Weekday::ALL.to_vec(),
            products: vec![
                Product {
                    id: "p1".to_string(),
                    name: "Milk".to_string(),
                    par_level: 10,
                },
                Product {
                    id: "p2".to_string(),
                    name: "Butter".to_string(),
                    par_level: 4,
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_today_board_lists_due_suppliers() {
        let (service, store, _dir) = setup_test().await;

        store
            .replace_suppliers(vec![supplier_for_every_day("supplier::1", "Acme")])
            .await
            .unwrap();

        let board = service.today_board().await;

        assert_eq!(board.suppliers.len(), 1);
        let due = &board.suppliers[0];
        assert_eq!(due.supplier.name, "Acme");
        assert!(!due.completed);
        assert_eq!(due.quantities.get("p1"), Some(&String::new()));
        assert_eq!(due.quantities.get("p2"), Some(&String::new()));
    }

    #[tokio::test]
    async fn test_today_board_excludes_suppliers_not_due() {
        let (service, store, _dir) = setup_test().await;

        let schedule = ScheduleService::new();
        let today_token = schedule.weekday_of(schedule.today());
        let some_other_day = Weekday::ALL
            .into_iter()
            .find(|d| *d != today_token)
            .unwrap();

        let mut supplier = supplier_for_every_day("supplier::1", "Acme");
        supplier.days = vec![some_other_day];
        store.replace_suppliers(vec![supplier]).await.unwrap();

        let board = service.today_board().await;
        assert!(board.suppliers.is_empty());
    }

    #[tokio::test]
    async fn test_set_completed_defaults_to_today() {
        let (service, store, _dir) = setup_test().await;

        let response = service
            .set_completed(SetCompletedRequest {
                supplier_id: "supplier::1".to_string(),
                completed: true,
                day_key: None,
            })
            .await
            .unwrap();

        let schedule = ScheduleService::new();
        assert_eq!(response.day_key, schedule.today_key());

        let history = store.history().await;
        assert!(order_state::is_completed(
            &history,
            &response.day_key,
            "supplier::1"
        ));
    }

    #[tokio::test]
    async fn test_set_completed_for_explicit_day() {
        let (service, store, _dir) = setup_test().await;

        service
            .set_completed(SetCompletedRequest {
                supplier_id: "supplier::1".to_string(),
                completed: true,
                day_key: Some("2025-3-10".to_string()),
            })
            .await
            .unwrap();

        let history = store.history().await;
        assert!(order_state::is_completed(&history, "2025-3-10", "supplier::1"));
        assert!(!order_state::is_completed(&history, "2025-3-10", "supplier::2"));
    }

    #[tokio::test]
    async fn test_set_quantity_round_trips_verbatim() {
        let (service, store, _dir) = setup_test().await;

        for value in ["5", "", "007", "a few"] {
            service
                .set_quantity(SetQuantityRequest {
                    supplier_id: "supplier::1".to_string(),
                    product_id: "p1".to_string(),
                    value: value.to_string(),
                    day_key: Some("2025-3-10".to_string()),
                })
                .await
                .unwrap();

            let quantities = store.quantities().await;
            assert_eq!(
                order_state::get_quantity(&quantities, "2025-3-10", "supplier::1", "p1"),
                value
            );
        }
    }

    #[tokio::test]
    async fn test_quantities_coexist_under_one_day() {
        let (service, store, _dir) = setup_test().await;

        for (product, value) in [("p1", "5"), ("p2", "3")] {
            service
                .set_quantity(SetQuantityRequest {
                    supplier_id: "supplier::1".to_string(),
                    product_id: product.to_string(),
                    value: value.to_string(),
                    day_key: Some("2025-3-10".to_string()),
                })
                .await
                .unwrap();
        }

        let quantities = store.quantities().await;
        assert_eq!(
            order_state::get_quantity(&quantities, "2025-3-10", "supplier::1", "p1"),
            "5"
        );
        assert_eq!(
            order_state::get_quantity(&quantities, "2025-3-10", "supplier::1", "p2"),
            "3"
        );
    }
}

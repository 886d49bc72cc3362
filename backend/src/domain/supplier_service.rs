use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::supplier_registry;
use crate::storage::CafeDataStore;
use shared::{
    CreateSupplierRequest, DeleteSupplierResponse, Product, ProductInput, Supplier,
    SupplierListResponse, SupplierResponse, UpdateSupplierRequest, Weekday,
};

/// Default upper bound on registry size.
///
/// A policy constant enforced here by the admin-facing service, not an
/// invariant of the data model.
pub const DEFAULT_MAX_SUPPLIERS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("Supplier name cannot be empty")]
    EmptyName,
    #[error("Select at least one delivery day")]
    NoDeliveryDays,
    #[error("Add at least one product")]
    NoProducts,
    #[error("Product names cannot be empty")]
    EmptyProductName,
    #[error("Supplier limit reached ({0})")]
    RegistryFull(usize),
    #[error("Supplier not found: {0}")]
    NotFound(String),
}

/// Service for managing supplier definitions
#[derive(Clone)]
pub struct SupplierService {
    store: Arc<CafeDataStore>,
    max_suppliers: usize,
}

impl SupplierService {
    /// Create a new SupplierService with the default registry limit
    pub fn new(store: Arc<CafeDataStore>) -> Self {
        Self {
            store,
            max_suppliers: DEFAULT_MAX_SUPPLIERS,
        }
    }

    /// Create a new SupplierService with a custom registry limit
    pub fn with_max_suppliers(store: Arc<CafeDataStore>, max_suppliers: usize) -> Self {
        Self {
            store,
            max_suppliers,
        }
    }

    /// Create a new supplier from the admin form
    pub async fn create_supplier(&self, request: CreateSupplierRequest) -> Result<SupplierResponse> {
        info!("Creating supplier: name={}", request.name);

        Self::validate_form(&request.name, &request.days, &request.products)?;

        let current = self.store.suppliers().await;
        if current.len() >= self.max_suppliers {
            warn!(
                "Rejecting new supplier, registry is at its limit of {}",
                self.max_suppliers
            );
            return Err(SupplierError::RegistryFull(self.max_suppliers).into());
        }

        let now_millis = Utc::now().timestamp_millis() as u64;
        let supplier = Supplier {
            id: Supplier::generate_id(now_millis),
            name: request.name.trim().to_string(),
            days: request.days,
            products: Self::build_products(now_millis, request.products),
        };

        let updated = supplier_registry::add(&current, supplier.clone());
        self.store.replace_suppliers(updated).await?;

        info!("Created supplier: {} with ID: {}", supplier.name, supplier.id);

        Ok(SupplierResponse {
            supplier,
            success_message: "Supplier created successfully".to_string(),
        })
    }

    /// Replace an existing supplier's name, days and products wholesale
    pub async fn update_supplier(
        &self,
        supplier_id: &str,
        request: UpdateSupplierRequest,
    ) -> Result<SupplierResponse> {
        info!("Updating supplier: {}", supplier_id);

        let current = self.store.suppliers().await;

        // The pure registry update is a silent no-op on an unmatched ID, so
        // existence is checked here where the error can be reported
        if !current.iter().any(|s| s.id == supplier_id) {
            warn!("Supplier not found: {}", supplier_id);
            return Err(SupplierError::NotFound(supplier_id.to_string()).into());
        }

        Self::validate_form(&request.name, &request.days, &request.products)?;

        let now_millis = Utc::now().timestamp_millis() as u64;
        let supplier = Supplier {
            id: supplier_id.to_string(),
            name: request.name.trim().to_string(),
            days: request.days,
            products: Self::build_products(now_millis, request.products),
        };

        let updated = supplier_registry::update(&current, supplier.clone());
        self.store.replace_suppliers(updated).await?;

        info!("Updated supplier: {} with ID: {}", supplier.name, supplier.id);

        Ok(SupplierResponse {
            supplier,
            success_message: "Supplier updated successfully".to_string(),
        })
    }

    /// Delete a supplier definition.
    ///
    /// Historical order records referencing the supplier are kept on purpose;
    /// history is an append-only log of past intent.
    pub async fn delete_supplier(&self, supplier_id: &str) -> Result<DeleteSupplierResponse> {
        info!("Deleting supplier: {}", supplier_id);

        let current = self.store.suppliers().await;

        if !current.iter().any(|s| s.id == supplier_id) {
            warn!("Supplier not found: {}", supplier_id);
            return Err(SupplierError::NotFound(supplier_id.to_string()).into());
        }

        let updated = supplier_registry::remove(&current, supplier_id);
        self.store.replace_suppliers(updated).await?;

        info!("Deleted supplier: {}", supplier_id);

        Ok(DeleteSupplierResponse {
            success_message: "Supplier deleted successfully".to_string(),
        })
    }

    /// List all suppliers in registry order
    pub async fn list_suppliers(&self) -> SupplierListResponse {
        let suppliers = self.store.suppliers().await;
        SupplierListResponse { suppliers }
    }

    /// Validate a supplier form submission. Rejected synchronously, before
    /// any mutation is attempted, so there is never a partial save.
    fn validate_form(name: &str, days: &[Weekday], products: &[ProductInput]) -> Result<()> {
        if name.trim().is_empty() {
            return Err(SupplierError::EmptyName.into());
        }

        if days.is_empty() {
            return Err(SupplierError::NoDeliveryDays.into());
        }

        if products.is_empty() {
            return Err(SupplierError::NoProducts.into());
        }

        if products.iter().any(|p| p.name.trim().is_empty()) {
            return Err(SupplierError::EmptyProductName.into());
        }

        Ok(())
    }

    /// Materialize form products, keeping IDs of existing products so daily
    /// quantity records stay attached, and minting IDs for new rows.
    fn build_products(now_millis: u64, inputs: Vec<ProductInput>) -> Vec<Product> {
        inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| Product {
                id: input
                    .id
                    .unwrap_or_else(|| Product::generate_id(now_millis, index)),
                name: input.name.trim().to_string(),
                par_level: input.par_level,
            })
            .collect()
    }
}

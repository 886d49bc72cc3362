use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Day of the week a supplier expects an order on.
///
/// Serialized as the lower-case full English name ("monday".."sunday") so the
/// wire format matches the persisted data exactly. Matching is case-sensitive
/// and not localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in form/display order (Monday first).
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lower-case token for this weekday.
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Map a Sunday-indexed day number (0 = Sunday .. 6 = Saturday) to a weekday.
    pub fn from_sunday_index(index: u32) -> Weekday {
        match index % 7 {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Weekday::from_sunday_index(day.num_days_from_sunday())
    }
}

/// A product a supplier delivers.
///
/// Product ID in format: "product::<epoch_millis>_<index>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// Display name of the product (non-empty)
    pub name: String,
    /// Target stock quantity used as a restocking reference
    pub par_level: u32,
}

impl Product {
    pub fn generate_id(now_millis: u64, index: usize) -> String {
        format!("product::{}_{}", now_millis, index)
    }
}

/// A supplier the cafe orders from.
///
/// Supplier ID in format: "supplier::<epoch_millis>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    /// Display name of the supplier (non-empty)
    pub name: String,
    /// Weekdays on which this supplier expects an order (non-empty)
    pub days: Vec<Weekday>,
    /// Products this supplier delivers, in display order
    pub products: Vec<Product>,
}

impl Supplier {
    pub fn generate_id(now_millis: u64) -> String {
        format!("supplier::{}", now_millis)
    }
}

/// Day key -> supplier ID -> "order placed" flag.
///
/// Day keys use the unpadded "{year}-{month}-{day}" convention (month 1-based),
/// e.g. "2025-9-9". Absence at any level means "not completed". Entries are
/// never pruned; history is an append-only log of past intent.
pub type OrderHistory = HashMap<String, HashMap<String, bool>>;

/// Day key -> supplier ID -> product ID -> quantity as typed.
///
/// Quantities are stored verbatim as entered, including the empty string,
/// which is distinct from "0" in storage but renders the same.
pub type OrderQuantities = HashMap<String, HashMap<String, HashMap<String, String>>>;

/// Product fields as submitted from the supplier form.
///
/// The ID is present when editing an existing product (so daily quantity
/// records keep pointing at it) and absent for newly added rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub id: Option<String>,
    pub name: String,
    pub par_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub days: Vec<Weekday>,
    pub products: Vec<ProductInput>,
}

/// Wholesale replacement of a supplier's name, days and product list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSupplierRequest {
    pub name: String,
    pub days: Vec<Weekday>,
    pub products: Vec<ProductInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierResponse {
    pub supplier: Supplier,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierListResponse {
    pub suppliers: Vec<Supplier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSupplierResponse {
    pub success_message: String,
}

/// One supplier due today, with its current checklist state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueSupplier {
    pub supplier: Supplier,
    /// Whether today's order has been marked as placed
    pub completed: bool,
    /// Product ID -> quantity as typed ("" when not set)
    pub quantities: HashMap<String, String>,
}

/// Today's checklist: the suppliers scheduled for the current weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayOrdersResponse {
    pub day_key: String,
    pub weekday: Weekday,
    pub suppliers: Vec<DueSupplier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCompletedRequest {
    pub supplier_id: String,
    pub completed: bool,
    /// Day to record against; defaults to today when absent
    pub day_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetCompletedResponse {
    pub day_key: String,
    pub supplier_id: String,
    pub completed: bool,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetQuantityRequest {
    pub supplier_id: String,
    pub product_id: String,
    /// Quantity exactly as typed; not validated or normalized
    pub value: String,
    /// Day to record against; defaults to today when absent
    pub day_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetQuantityResponse {
    pub day_key: String,
    pub supplier_id: String,
    pub product_id: String,
    pub value: String,
    pub success_message: String,
}

/// Completion summary for one day of the compliance window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceDay {
    pub day_key: String,
    /// Short display label, e.g. "Mon 9"
    pub label: String,
    /// Number of suppliers marked completed on this day
    pub completed_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLogItem {
    pub product_id: String,
    /// Product name, or "Item" when the product no longer exists
    pub product_name: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLogEntry {
    pub supplier_id: String,
    /// Supplier name, or "Supplier" when the supplier no longer exists
    pub supplier_name: String,
    pub items: Vec<OrderLogItem>,
}

/// Quantities recorded on one day, resolved to display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLogDay {
    pub day_key: String,
    pub label: String,
    pub entries: Vec<OrderLogEntry>,
}

/// Rolling-window summary: per-day completion counts (oldest first) and the
/// recorded order log (newest first, days without data omitted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResponse {
    pub days: Vec<ComplianceDay>,
    pub logs: Vec<OrderLogDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinValidateRequest {
    pub pin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinValidateResponse {
    pub success: bool,
    pub message: String,
}

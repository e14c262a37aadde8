use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Vegetable id to requested quantity.
pub type OrderItems = BTreeMap<String, u64>;

/// An item-quantity aggregate. Used both as a customer's live cart and as a
/// finalized history entry; the two are always distinct instances.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    #[schema(value_type = BTreeMap<String, u64>)]
    items: OrderItems,
    /// Set at checkout. `None` while the order is still a cart.
    total: Option<f64>,
    placed_at: Option<DateTime<Utc>>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: OrderItems::new(),
            total: None,
            placed_at: None,
        }
    }

    pub fn from_items(items: &OrderItems) -> Self {
        let mut order = Self::new();
        for (id, amount) in items {
            order.add_item(id, *amount);
        }
        order
    }

    /// Accumulates onto any quantity already recorded for `id`.
    pub fn add_item(&mut self, id: &str, amount: u64) {
        *self.items.entry(id.to_string()).or_insert(0) += amount;
    }

    pub fn items(&self) -> &OrderItems {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_total(&mut self, total: f64) {
        self.total = Some(total);
    }

    pub fn total(&self) -> Option<f64> {
        self.total
    }

    pub fn mark_placed(&mut self, at: DateTime<Utc>) {
        self.placed_at = Some(at);
    }

    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.placed_at
    }
}

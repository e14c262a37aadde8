use serde::Serialize;
use utoipa::ToSchema;

use super::order::{Order, OrderItems};
use crate::store::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Customer {
    id: String,
    name: String,
    phone: String,
    cart: Order,
    history: Vec<Order>,
    money_spent: f64,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
    ) -> StoreResult<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(StoreError::InvalidRecord("customer id must not be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(StoreError::InvalidRecord("customer name must not be empty".into()));
        }

        Ok(Self {
            id,
            name,
            phone: phone.into(),
            cart: Order::new(),
            history: Vec::new(),
            money_spent: 0.0,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn cart(&self) -> &Order {
        &self.cart
    }

    pub fn history(&self) -> &[Order] {
        &self.history
    }

    pub fn money_spent(&self) -> f64 {
        self.money_spent
    }

    /// Discards the current cart and starts over from `items`.
    pub fn start_new_order(&mut self, items: &OrderItems) {
        self.cart = Order::from_items(items);
    }

    pub fn clear_cart(&mut self) {
        self.cart = Order::new();
    }

    pub fn record_completed_order(&mut self, order: Order) {
        self.history.push(order);
    }

    pub fn add_spend(&mut self, amount: f64) {
        self.money_spent += amount;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }
}

use serde::Serialize;
use utoipa::ToSchema;

use crate::store::{StoreError, StoreResult};

/// A single inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Vegetable {
    id: String,
    name: String,
    amount: u64,
    price: f64,
    sold: u64,
}

impl Vegetable {
    /// Builds a validated record. Blank ids or names and prices that are not
    /// a finite non-negative number are rejected here, so the store only
    /// ever sees well-formed vegetables.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        amount: u64,
        price: f64,
    ) -> StoreResult<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(StoreError::InvalidRecord("vegetable id must not be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(StoreError::InvalidRecord("vegetable name must not be empty".into()));
        }
        validate_price(price).map_err(StoreError::InvalidRecord)?;

        Ok(Self {
            id,
            name,
            amount,
            price,
            sold: 0,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn sold(&self) -> u64 {
        self.sold
    }

    /// Bumps the sales counter only; stock is decremented by the store.
    pub fn record_sale(&mut self, amount: u64) {
        self.sold = self.sold.saturating_add(amount);
    }

    pub fn set_amount(&mut self, amount: u64) {
        self.amount = amount;
    }

    // Callers holding a stored record must reindex afterwards.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() {
        return Err(format!("price must be a finite number, got {price}"));
    }
    if price < 0.0 {
        return Err(format!("price must not be negative, got {price}"));
    }
    Ok(())
}

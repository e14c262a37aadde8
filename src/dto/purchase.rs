use std::collections::BTreeMap;

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::OrderItems;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PurchaseRequest {
    pub customer_id: String,
    /// Vegetable id to amount.
    #[schema(value_type = BTreeMap<String, u64>)]
    pub items: OrderItems,
}

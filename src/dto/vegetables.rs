use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{models::Vegetable, store::StoreResult};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateVegetableRequest {
    pub id: String,
    pub name: String,
    pub amount: u64,
    pub price: f64,
}

impl CreateVegetableRequest {
    pub fn into_vegetable(self) -> StoreResult<Vegetable> {
        Vegetable::new(self.id, self.name, self.amount, self.price)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePriceRequest {
    pub price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAmountRequest {
    pub amount: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PriceRangeQuery {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct VegetableList {
    #[schema(value_type = Vec<Vegetable>)]
    pub items: Vec<Vegetable>,
}

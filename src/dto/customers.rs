use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    models::{Customer, Order, OrderItems},
    store::StoreResult,
};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCustomerRequest {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

impl CreateCustomerRequest {
    pub fn into_customer(self) -> StoreResult<Customer> {
        Customer::new(self.id, self.name, self.phone)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CartRequest {
    #[schema(value_type = BTreeMap<String, u64>)]
    pub items: OrderItems,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CustomerList {
    #[schema(value_type = Vec<Customer>)]
    pub items: Vec<Customer>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}

use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{customers, purchase::PurchaseRequest, vegetables},
    models::{Customer, Order, Vegetable},
    response::{ApiResponse, Meta},
    routes::{
        customers as customer_routes, health, params, purchase, reports,
        vegetables as vegetable_routes,
    },
    store::PurchaseReceipt,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        vegetable_routes::list_vegetables,
        vegetable_routes::create_vegetable,
        vegetable_routes::sorted_vegetables,
        vegetable_routes::cheapest_vegetable,
        vegetable_routes::most_expensive_vegetable,
        vegetable_routes::price_range,
        vegetable_routes::get_vegetable,
        vegetable_routes::update_price,
        vegetable_routes::update_amount,
        vegetable_routes::delete_vegetable,
        customer_routes::list_customers,
        customer_routes::create_customer,
        customer_routes::top_customers,
        customer_routes::get_customer,
        customer_routes::update_customer,
        customer_routes::customer_history,
        customer_routes::get_cart,
        customer_routes::set_cart,
        customer_routes::checkout_cart,
        purchase::purchase,
        reports::most_popular,
        reports::low_stock
    ),
    components(
        schemas(
            Vegetable,
            Customer,
            Order,
            PurchaseReceipt,
            PurchaseRequest,
            vegetables::CreateVegetableRequest,
            vegetables::UpdatePriceRequest,
            vegetables::UpdateAmountRequest,
            vegetables::PriceRangeQuery,
            vegetables::VegetableList,
            customers::CreateCustomerRequest,
            customers::UpdateCustomerRequest,
            customers::CartRequest,
            customers::CustomerList,
            customers::OrderList,
            params::LimitQuery,
            health::HealthData,
            Meta,
            ApiResponse<Vegetable>,
            ApiResponse<Customer>,
            ApiResponse<Order>,
            ApiResponse<PurchaseReceipt>,
            ApiResponse<vegetables::VegetableList>,
            ApiResponse<customers::CustomerList>,
            ApiResponse<customers::OrderList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Vegetables", description = "Inventory endpoints"),
        (name = "Customers", description = "Customer, cart and history endpoints"),
        (name = "Purchase", description = "Purchase endpoint"),
        (name = "Reports", description = "Sales and stock reports"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

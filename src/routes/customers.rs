use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::customers::{
        CartRequest, CreateCustomerRequest, CustomerList, OrderList, UpdateCustomerRequest,
    },
    error::AppResult,
    extract::{AppJson, AppQuery},
    models::{Customer, Order},
    response::ApiResponse,
    routes::params::LimitQuery,
    services::customer_service,
    state::AppState,
    store::PurchaseReceipt,
};

const DEFAULT_TOP: usize = 3;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/top", get(top_customers))
        .route("/{id}", get(get_customer).put(update_customer))
        .route("/{id}/history", get(customer_history))
        .route("/{id}/cart", get(get_cart).put(set_cart))
        .route("/{id}/cart/checkout", post(checkout_cart))
}

#[utoipa::path(
    get,
    path = "/api/customers",
    responses(
        (status = 200, description = "All customers, ordered by id", body = ApiResponse<CustomerList>)
    ),
    tag = "Customers"
)]
pub async fn list_customers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let resp = customer_service::list_customers(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer registered", body = ApiResponse<Customer>),
        (status = 400, description = "Invalid customer"),
        (status = 409, description = "Customer id already taken"),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Customer>>)> {
    let resp = customer_service::create_customer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/customers/top",
    params(LimitQuery),
    responses(
        (status = 200, description = "Customers by lifetime spend, default 3", body = ApiResponse<CustomerList>)
    ),
    tag = "Customers"
)]
pub async fn top_customers(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LimitQuery>,
) -> AppResult<Json<ApiResponse<CustomerList>>> {
    let resp = customer_service::top_customers(&state, query.normalize(DEFAULT_TOP)).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Get customer", body = ApiResponse<Customer>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let resp = customer_service::get_customer(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = ApiResponse<Customer>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateCustomerRequest>,
) -> AppResult<Json<ApiResponse<Customer>>> {
    let resp = customer_service::update_customer(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/history",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Completed orders, oldest first", body = ApiResponse<OrderList>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn customer_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let resp = customer_service::history(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/customers/{id}/cart",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Current cart", body = ApiResponse<Order>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = customer_service::get_cart(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/customers/{id}/cart",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    request_body = CartRequest,
    responses(
        (status = 200, description = "Cart replaced", body = ApiResponse<Order>),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn set_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CartRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let resp = customer_service::set_cart(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/customers/{id}/cart/checkout",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Cart purchased", body = ApiResponse<PurchaseReceipt>),
        (status = 400, description = "Empty cart or insufficient stock"),
        (status = 404, description = "Customer or vegetable not found"),
    ),
    tag = "Customers"
)]
pub async fn checkout_cart(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<PurchaseReceipt>>> {
    let resp = customer_service::checkout_cart(&state, &id).await?;
    Ok(Json(resp))
}

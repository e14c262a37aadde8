use crate::{
    audit::log_audit,
    dto::customers::{
        CartRequest, CreateCustomerRequest, CustomerList, OrderList, UpdateCustomerRequest,
    },
    error::AppResult,
    models::{Customer, Order},
    response::{ApiResponse, Meta},
    state::AppState,
    store::PurchaseReceipt,
};

pub async fn list_customers(state: &AppState) -> AppResult<ApiResponse<CustomerList>> {
    let store = state.store.read().await;
    let items: Vec<Customer> = store.customers().into_iter().cloned().collect();
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Customers", CustomerList { items }, Some(meta)))
}

pub async fn get_customer(state: &AppState, id: &str) -> AppResult<ApiResponse<Customer>> {
    let customer = state.store.read().await.customer(id)?.clone();
    Ok(ApiResponse::success("Customer", customer, None))
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    let customer = payload.into_customer()?;
    let created = customer.clone();
    state.store.write().await.add_customer(customer)?;

    tracing::info!(customer_id = %created.id(), "customer registered");
    log_audit(
        "customer_create",
        "customers",
        serde_json::json!({ "customer_id": created.id() }),
    );

    Ok(ApiResponse::success("Customer added", created, Some(Meta::empty())))
}

pub async fn update_customer(
    state: &AppState,
    id: &str,
    payload: UpdateCustomerRequest,
) -> AppResult<ApiResponse<Customer>> {
    let updated = state
        .store
        .write()
        .await
        .update_customer(id, payload.name, payload.phone)?
        .clone();

    log_audit(
        "customer_update",
        "customers",
        serde_json::json!({ "customer_id": id }),
    );

    Ok(ApiResponse::success("Customer updated", updated, Some(Meta::empty())))
}

pub async fn history(state: &AppState, id: &str) -> AppResult<ApiResponse<OrderList>> {
    let items = state.store.read().await.customer_history(id)?.to_vec();
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Purchase history", OrderList { items }, Some(meta)))
}

pub async fn top_customers(
    state: &AppState,
    limit: usize,
) -> AppResult<ApiResponse<CustomerList>> {
    let store = state.store.read().await;
    let items: Vec<Customer> = store
        .top_customers_by_spend(limit)
        .into_iter()
        .cloned()
        .collect();
    let meta = Meta::new(items.len(), Some(limit));
    Ok(ApiResponse::success("Top customers", CustomerList { items }, Some(meta)))
}

pub async fn get_cart(state: &AppState, id: &str) -> AppResult<ApiResponse<Order>> {
    let cart = state.store.read().await.customer(id)?.cart().clone();
    Ok(ApiResponse::success("Cart", cart, None))
}

pub async fn set_cart(
    state: &AppState,
    id: &str,
    payload: CartRequest,
) -> AppResult<ApiResponse<Order>> {
    let cart = state
        .store
        .write()
        .await
        .set_cart(id, &payload.items)?
        .clone();

    tracing::debug!(customer_id = %id, items = cart.items().len(), "cart replaced");

    Ok(ApiResponse::success("Cart updated", cart, Some(Meta::empty())))
}

pub async fn checkout_cart(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<PurchaseReceipt>> {
    let result = state.store.write().await.checkout_cart(id);
    let receipt = match result {
        Ok(receipt) => receipt,
        Err(err) => {
            tracing::warn!(customer_id = %id, error = %err, "cart checkout rejected");
            return Err(err.into());
        }
    };

    tracing::info!(
        customer_id = %id,
        total = receipt.total,
        order_id = %receipt.order.id,
        "cart checked out"
    );
    log_audit(
        "checkout",
        "orders",
        serde_json::json!({
            "customer_id": id,
            "order_id": receipt.order.id,
            "total": receipt.total,
        }),
    );

    Ok(ApiResponse::success("Purchase successful", receipt, Some(Meta::empty())))
}

use crate::{
    audit::log_audit,
    dto::purchase::PurchaseRequest,
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
    store::PurchaseReceipt,
};

/// Runs the purchase under the store's write lock, so the stock check and
/// the stock update cannot interleave with another request.
pub async fn purchase(
    state: &AppState,
    payload: PurchaseRequest,
) -> AppResult<ApiResponse<PurchaseReceipt>> {
    let result = state
        .store
        .write()
        .await
        .purchase(&payload.customer_id, &payload.items);

    let receipt = match result {
        Ok(receipt) => receipt,
        Err(err) => {
            tracing::warn!(
                customer_id = %payload.customer_id,
                error = %err,
                "purchase rejected"
            );
            return Err(err.into());
        }
    };

    tracing::info!(
        customer_id = %payload.customer_id,
        order_id = %receipt.order.id,
        items = payload.items.len(),
        total = receipt.total,
        "purchase completed"
    );
    log_audit(
        "purchase",
        "orders",
        serde_json::json!({
            "customer_id": payload.customer_id,
            "order_id": receipt.order.id,
            "total": receipt.total,
        }),
    );

    Ok(ApiResponse::success(
        "Purchase successful",
        receipt,
        Some(Meta::empty()),
    ))
}

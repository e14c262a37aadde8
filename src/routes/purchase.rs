use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::purchase::PurchaseRequest,
    error::AppResult,
    extract::AppJson,
    response::ApiResponse,
    services::purchase_service,
    state::AppState,
    store::PurchaseReceipt,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(purchase))
}

#[utoipa::path(
    post,
    path = "/api/purchase",
    request_body = PurchaseRequest,
    responses(
        (status = 200, description = "Purchase completed", body = ApiResponse<PurchaseReceipt>),
        (status = 400, description = "Invalid payload or insufficient stock"),
        (status = 404, description = "Customer or vegetable not found"),
    ),
    tag = "Purchase"
)]
pub async fn purchase(
    State(state): State<AppState>,
    AppJson(payload): AppJson<PurchaseRequest>,
) -> AppResult<Json<ApiResponse<PurchaseReceipt>>> {
    let resp = purchase_service::purchase(&state, payload).await?;
    Ok(Json(resp))
}

use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::vegetables::VegetableList,
    error::AppResult,
    extract::AppQuery,
    response::ApiResponse,
    routes::params::LimitQuery,
    services::report_service,
    state::AppState,
};

const DEFAULT_REPORT_SIZE: usize = 5;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/popular", get(most_popular))
        .route("/low-stock", get(low_stock))
}

#[utoipa::path(
    get,
    path = "/api/reports/popular",
    params(LimitQuery),
    responses(
        (status = 200, description = "Vegetables by units sold, default 5", body = ApiResponse<VegetableList>)
    ),
    tag = "Reports"
)]
pub async fn most_popular(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LimitQuery>,
) -> AppResult<Json<ApiResponse<VegetableList>>> {
    let resp = report_service::most_popular(&state, query.normalize(DEFAULT_REPORT_SIZE)).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/reports/low-stock",
    params(LimitQuery),
    responses(
        (status = 200, description = "Vegetables by remaining stock, default 5", body = ApiResponse<VegetableList>)
    ),
    tag = "Reports"
)]
pub async fn low_stock(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LimitQuery>,
) -> AppResult<Json<ApiResponse<VegetableList>>> {
    let resp = report_service::low_stock(&state, query.normalize(DEFAULT_REPORT_SIZE)).await?;
    Ok(Json(resp))
}

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::vegetables::{
        CreateVegetableRequest, PriceRangeQuery, UpdateAmountRequest, UpdatePriceRequest,
        VegetableList,
    },
    error::AppResult,
    extract::{AppJson, AppQuery},
    models::Vegetable,
    response::ApiResponse,
    services::vegetable_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vegetables).post(create_vegetable))
        .route("/sorted", get(sorted_vegetables))
        .route("/cheapest", get(cheapest_vegetable))
        .route("/most-expensive", get(most_expensive_vegetable))
        .route("/price-range", get(price_range))
        .route("/{id}", get(get_vegetable).delete(delete_vegetable))
        .route("/{id}/price", put(update_price))
        .route("/{id}/amount", put(update_amount))
}

#[utoipa::path(
    get,
    path = "/api/vegetables",
    responses(
        (status = 200, description = "All vegetables, ordered by id", body = ApiResponse<VegetableList>)
    ),
    tag = "Vegetables"
)]
pub async fn list_vegetables(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<VegetableList>>> {
    let resp = vegetable_service::list_vegetables(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/vegetables",
    request_body = CreateVegetableRequest,
    responses(
        (status = 201, description = "Vegetable added or replaced", body = ApiResponse<Vegetable>),
        (status = 400, description = "Invalid vegetable"),
    ),
    tag = "Vegetables"
)]
pub async fn create_vegetable(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateVegetableRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Vegetable>>)> {
    let resp = vegetable_service::create_vegetable(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    get,
    path = "/api/vegetables/sorted",
    responses(
        (status = 200, description = "Vegetables by ascending price", body = ApiResponse<VegetableList>)
    ),
    tag = "Vegetables"
)]
pub async fn sorted_vegetables(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<VegetableList>>> {
    let resp = vegetable_service::sorted_by_price(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/vegetables/cheapest",
    responses(
        (status = 200, description = "Cheapest vegetable", body = ApiResponse<Vegetable>),
        (status = 404, description = "No vegetables in stock"),
    ),
    tag = "Vegetables"
)]
pub async fn cheapest_vegetable(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vegetable>>> {
    let resp = vegetable_service::cheapest(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/vegetables/most-expensive",
    responses(
        (status = 200, description = "Most expensive vegetable", body = ApiResponse<Vegetable>),
        (status = 404, description = "No vegetables in stock"),
    ),
    tag = "Vegetables"
)]
pub async fn most_expensive_vegetable(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vegetable>>> {
    let resp = vegetable_service::most_expensive(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/vegetables/price-range",
    params(
        ("min" = Option<f64>, Query, description = "Lowest price, inclusive. Default 0"),
        ("max" = Option<f64>, Query, description = "Highest price, inclusive. Unbounded by default"),
    ),
    responses(
        (status = 200, description = "Vegetables within the price range, cheapest first", body = ApiResponse<VegetableList>),
        (status = 400, description = "Invalid range"),
    ),
    tag = "Vegetables"
)]
pub async fn price_range(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<PriceRangeQuery>,
) -> AppResult<Json<ApiResponse<VegetableList>>> {
    let resp = vegetable_service::price_range(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/vegetables/{id}",
    params(
        ("id" = String, Path, description = "Vegetable ID")
    ),
    responses(
        (status = 200, description = "Get vegetable", body = ApiResponse<Vegetable>),
        (status = 404, description = "Vegetable not found"),
    ),
    tag = "Vegetables"
)]
pub async fn get_vegetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vegetable>>> {
    let resp = vegetable_service::get_vegetable(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/vegetables/{id}/price",
    params(
        ("id" = String, Path, description = "Vegetable ID")
    ),
    request_body = UpdatePriceRequest,
    responses(
        (status = 200, description = "Price updated", body = ApiResponse<Vegetable>),
        (status = 400, description = "Invalid price"),
        (status = 404, description = "Vegetable not found"),
    ),
    tag = "Vegetables"
)]
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdatePriceRequest>,
) -> AppResult<Json<ApiResponse<Vegetable>>> {
    let resp = vegetable_service::update_price(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/vegetables/{id}/amount",
    params(
        ("id" = String, Path, description = "Vegetable ID")
    ),
    request_body = UpdateAmountRequest,
    responses(
        (status = 200, description = "Amount updated", body = ApiResponse<Vegetable>),
        (status = 400, description = "Invalid amount"),
        (status = 404, description = "Vegetable not found"),
    ),
    tag = "Vegetables"
)]
pub async fn update_amount(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<UpdateAmountRequest>,
) -> AppResult<Json<ApiResponse<Vegetable>>> {
    let resp = vegetable_service::update_amount(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/vegetables/{id}",
    params(
        ("id" = String, Path, description = "Vegetable ID")
    ),
    responses(
        (status = 200, description = "Vegetable removed", body = ApiResponse<Vegetable>),
        (status = 404, description = "Vegetable not found"),
    ),
    tag = "Vegetables"
)]
pub async fn delete_vegetable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Vegetable>>> {
    let resp = vegetable_service::delete_vegetable(&state, &id).await?;
    Ok(Json(resp))
}

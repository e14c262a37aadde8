use crate::{
    audit::log_audit,
    dto::vegetables::{
        CreateVegetableRequest, PriceRangeQuery, UpdateAmountRequest, UpdatePriceRequest,
        VegetableList,
    },
    error::{AppError, AppResult},
    models::Vegetable,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_vegetables(state: &AppState) -> AppResult<ApiResponse<VegetableList>> {
    let store = state.store.read().await;
    let items: Vec<Vegetable> = store.vegetables().into_iter().cloned().collect();
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success("Vegetables", VegetableList { items }, Some(meta)))
}

pub async fn get_vegetable(state: &AppState, id: &str) -> AppResult<ApiResponse<Vegetable>> {
    let store = state.store.read().await;
    let vegetable = store.vegetable(id)?.clone();
    Ok(ApiResponse::success("Vegetable", vegetable, None))
}

pub async fn create_vegetable(
    state: &AppState,
    payload: CreateVegetableRequest,
) -> AppResult<ApiResponse<Vegetable>> {
    let vegetable = payload.into_vegetable()?;
    let created = vegetable.clone();

    let replaced = state.store.write().await.add_vegetable(vegetable);
    let message = if replaced.is_some() {
        tracing::info!(vegetable_id = %created.id(), "vegetable replaced");
        "Vegetable replaced"
    } else {
        tracing::info!(vegetable_id = %created.id(), price = created.price(), "vegetable added");
        "Vegetable added"
    };

    log_audit(
        "vegetable_upsert",
        "vegetables",
        serde_json::json!({ "vegetable_id": created.id(), "replaced": replaced.is_some() }),
    );

    Ok(ApiResponse::success(message, created, Some(Meta::empty())))
}

pub async fn update_price(
    state: &AppState,
    id: &str,
    payload: UpdatePriceRequest,
) -> AppResult<ApiResponse<Vegetable>> {
    let updated = state
        .store
        .write()
        .await
        .update_vegetable_price(id, payload.price)?
        .clone();

    tracing::debug!(vegetable_id = %id, price = payload.price, "price updated");
    log_audit(
        "vegetable_price_update",
        "vegetables",
        serde_json::json!({ "vegetable_id": id, "price": payload.price }),
    );

    Ok(ApiResponse::success("Price updated", updated, Some(Meta::empty())))
}

pub async fn update_amount(
    state: &AppState,
    id: &str,
    payload: UpdateAmountRequest,
) -> AppResult<ApiResponse<Vegetable>> {
    let updated = state
        .store
        .write()
        .await
        .set_vegetable_amount(id, payload.amount)?
        .clone();

    log_audit(
        "vegetable_amount_update",
        "vegetables",
        serde_json::json!({ "vegetable_id": id, "amount": payload.amount }),
    );

    Ok(ApiResponse::success("Amount updated", updated, Some(Meta::empty())))
}

pub async fn delete_vegetable(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<Vegetable>> {
    let removed = state.store.write().await.remove_vegetable(id)?;

    tracing::info!(vegetable_id = %id, "vegetable removed");
    log_audit(
        "vegetable_delete",
        "vegetables",
        serde_json::json!({ "vegetable_id": id }),
    );

    Ok(ApiResponse::success("Vegetable removed", removed, Some(Meta::empty())))
}

pub async fn cheapest(state: &AppState) -> AppResult<ApiResponse<Vegetable>> {
    let store = state.store.read().await;
    match store.cheapest() {
        Some(v) => Ok(ApiResponse::success("Cheapest vegetable", v.clone(), None)),
        None => Err(no_stock()),
    }
}

pub async fn most_expensive(state: &AppState) -> AppResult<ApiResponse<Vegetable>> {
    let store = state.store.read().await;
    match store.most_expensive() {
        Some(v) => Ok(ApiResponse::success("Most expensive vegetable", v.clone(), None)),
        None => Err(no_stock()),
    }
}

pub async fn sorted_by_price(state: &AppState) -> AppResult<ApiResponse<VegetableList>> {
    let items = state.store.read().await.sorted_snapshot();
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success(
        "Vegetables by price",
        VegetableList { items },
        Some(meta),
    ))
}

pub async fn price_range(
    state: &AppState,
    query: PriceRangeQuery,
) -> AppResult<ApiResponse<VegetableList>> {
    let min = query.min.unwrap_or(0.0);
    let max = query.max.unwrap_or(f64::INFINITY);
    if min.is_nan() || max.is_nan() {
        return Err(AppError::BadRequest("min and max must be numbers".into()));
    }
    if min > max {
        return Err(AppError::BadRequest(format!(
            "min ({min}) must not exceed max ({max})"
        )));
    }

    let items = state.store.read().await.vegetables_in_price_range(min, max);
    let meta = Meta::count(items.len());
    Ok(ApiResponse::success(
        "Vegetables in price range",
        VegetableList { items },
        Some(meta),
    ))
}

fn no_stock() -> AppError {
    AppError::NotFound("No vegetables in stock".into())
}

use crate::{
    dto::vegetables::VegetableList,
    error::AppResult,
    models::Vegetable,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn most_popular(state: &AppState, limit: usize) -> AppResult<ApiResponse<VegetableList>> {
    let store = state.store.read().await;
    let items: Vec<Vegetable> = store
        .most_popular_vegetables(limit)
        .into_iter()
        .cloned()
        .collect();
    let meta = Meta::new(items.len(), Some(limit));
    Ok(ApiResponse::success("Most popular vegetables", VegetableList { items }, Some(meta)))
}

pub async fn low_stock(state: &AppState, limit: usize) -> AppResult<ApiResponse<VegetableList>> {
    let store = state.store.read().await;
    let items: Vec<Vegetable> = store
        .lowest_stock_vegetables(limit)
        .into_iter()
        .cloned()
        .collect();
    let meta = Meta::new(items.len(), Some(limit));
    Ok(ApiResponse::success("Lowest stock vegetables", VegetableList { items }, Some(meta)))
}

use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod doc;
pub mod health;
pub mod params;
pub mod purchase;
pub mod reports;
pub mod vegetables;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/vegetables", vegetables::router())
        .nest("/customers", customers::router())
        .nest("/purchase", purchase::router())
        .nest("/reports", reports::router())
}

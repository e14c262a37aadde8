use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` that reports malformed bodies as a 400 in the API envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Query` that reports malformed query strings as a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub total: Option<i64>,
    pub limit: Option<i64>,
}

impl Meta {
    pub fn new(total: usize, limit: Option<usize>) -> Self {
        Self {
            total: Some(saturating_i64(total)),
            limit: limit.map(saturating_i64),
        }
    }

    pub fn count(total: usize) -> Self {
        Self::new(total, None)
    }

    pub fn empty() -> Self {
        Self {
            total: None,
            limit: None,
        }
    }
}

fn saturating_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            meta,
        }
    }

    pub fn failure(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data,
            meta: Some(Meta::empty()),
        }
    }
}

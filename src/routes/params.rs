use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// `?num=` query used by the ranking endpoints.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    pub num: Option<usize>,
}

impl LimitQuery {
    pub fn normalize(&self, default: usize) -> usize {
        self.num.unwrap_or(default)
    }
}

use crate::store::{SharedStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: store.into_shared(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Store::new())
    }
}

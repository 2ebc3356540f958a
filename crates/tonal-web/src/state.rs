//! Application state.

use tonal_nlu::NluClient;

/// State shared across handlers: the single NLU client instance,
/// constructed once at startup.
#[derive(Clone)]
pub struct AppState {
    pub nlu: NluClient,
}

impl AppState {
    pub fn new(nlu: NluClient) -> Self {
        Self { nlu }
    }
}

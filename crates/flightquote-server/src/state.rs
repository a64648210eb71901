use std::sync::Arc;

use flightquote_core::reference::ReferenceData;
use flightquote_export::assets::AssetStore;
use flightquote_export::styles::ThemeName;

/// Shared application state, injected into all route handlers via Axum state.
/// Everything in it is read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    pub reference: Arc<ReferenceData>,
    pub assets: Arc<AssetStore>,
    /// Used when a request does not pick a theme.
    pub theme: ThemeName,
}

impl AppState {
    pub fn new(reference: ReferenceData, assets: AssetStore, theme: ThemeName) -> Self {
        Self {
            reference: Arc::new(reference),
            assets: Arc::new(assets),
            theme,
        }
    }
}

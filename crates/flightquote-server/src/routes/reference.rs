use axum::extract::State;
use axum::Json;

use flightquote_core::reference::CorpName;

use crate::state::AppState;

pub async fn list_airports(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.reference.airports.clone())
}

pub async fn list_corp_names(State(state): State<AppState>) -> Json<Vec<CorpName>> {
    Json(state.reference.corp_names.clone())
}

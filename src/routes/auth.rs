use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde::Serialize;
use tracing::info;

use crate::auth::error::AuthError;
use crate::auth::resolve::resolve_api_key;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthStatus {
	pub authenticated: bool,
	pub key_length: usize,
}

pub async fn get_auth(
	State(state): State<Arc<AppState>>,
	headers: HeaderMap,
) -> Result<Json<AuthStatus>, AuthError> {
	let key = resolve_api_key(&state, &headers)?;
	info!(key_len = key.len(), "authenticated /v1/auth request");
	Ok(Json(AuthStatus {
		authenticated: true,
		key_length: key.len(),
	}))
}

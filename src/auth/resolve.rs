use axum::http::HeaderMap;
use tracing::{debug, warn};

use super::error::AuthError;
use super::extract::get_api_key;
use super::headers::Headers;
use crate::state::AppState;

/// Resolve the API key presented with this request.
///
/// 1. Canonicalize the request headers and read `Authorization: ApiKey <token>`.
/// 2. If an `API_KEY` is configured, the token must match it.
/// 3. Otherwise any well-formed token is accepted.
pub fn resolve_api_key(state: &AppState, headers: &HeaderMap) -> Result<String, AuthError> {
	let headers = Headers::from_http(headers);
	let token = get_api_key(&headers).inspect_err(|e| {
		warn!(error = %e, "rejected authorization header");
	})?;

	if let Some(expected) = state.api_key.as_deref()
		&& token != expected
	{
		warn!(key_len = token.len(), "api key does not match configured key");
		return Err(AuthError::InvalidKey);
	}

	debug!(key_len = token.len(), "api key accepted");
	Ok(token.to_string())
}

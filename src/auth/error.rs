use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
	#[error("no authorization header included")]
	MissingHeader,
	#[error("malformed authorization header")]
	MalformedHeader,
	/// Well-formed key that doesn't match the configured one.
	#[error("invalid api key")]
	InvalidKey,
}

impl IntoResponse for AuthError {
	fn into_response(self) -> Response {
		(
			StatusCode::UNAUTHORIZED,
			[(header::WWW_AUTHENTICATE, "ApiKey")],
			Json(serde_json::json!({
				"type": "error",
				"error": {
					"type": "authentication_error",
					"message": self.to_string()
				}
			})),
		)
			.into_response()
	}
}

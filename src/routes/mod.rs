use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod auth;
pub mod health;

pub fn router(state: Arc<AppState>) -> Router {
	Router::new()
		.route("/", get(health::health))
		.route("/v1/auth", get(auth::get_auth))
		.layer(TraceLayer::new_for_http())
		.layer(CorsLayer::permissive())
		.with_state(state)
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::body::{Body, to_bytes};
	use axum::http::{Request, StatusCode, header};
	use serde_json::Value;
	use tower::ServiceExt;

	async fn send(app: Router, authorization: Option<&str>) -> (StatusCode, Value) {
		let mut req = Request::builder().uri("/v1/auth");
		if let Some(value) = authorization {
			req = req.header(header::AUTHORIZATION, value);
		}
		let resp = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
		let status = resp.status();
		let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
		(status, serde_json::from_slice(&body).unwrap())
	}

	fn app(api_key: Option<&str>) -> Router {
		router(Arc::new(AppState::new(api_key.map(str::to_string))))
	}

	#[tokio::test]
	async fn health_is_public() {
		let resp = app(Some("secret"))
			.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(resp.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn accepts_well_formed_key() {
		let (status, body) = send(app(None), Some("ApiKey test-api-key-123")).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body["authenticated"], true);
		assert_eq!(body["key_length"], 16);
	}

	#[tokio::test]
	async fn missing_header_is_unauthorized() {
		let (status, body) = send(app(None), None).await;
		assert_eq!(status, StatusCode::UNAUTHORIZED);
		assert_eq!(body["error"]["type"], "authentication_error");
		assert_eq!(body["error"]["message"], "no authorization header included");
	}

	#[tokio::test]
	async fn wrong_scheme_is_unauthorized() {
		let (status, body) = send(app(None), Some("Bearer test-token")).await;
		assert_eq!(status, StatusCode::UNAUTHORIZED);
		assert_eq!(body["error"]["message"], "malformed authorization header");
	}

	#[tokio::test]
	async fn only_first_authorization_value_counts() {
		let req = Request::builder()
			.uri("/v1/auth")
			.header(header::AUTHORIZATION, "Bearer x")
			.header(header::AUTHORIZATION, "ApiKey secret")
			.body(Body::empty())
			.unwrap();
		let resp = app(Some("secret")).oneshot(req).await.unwrap();
		assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
		let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
		let body: Value = serde_json::from_slice(&body).unwrap();
		assert_eq!(body["error"]["message"], "malformed authorization header");
	}

	#[tokio::test]
	async fn configured_key_enforced() {
		let (status, _) = send(app(Some("secret")), Some("ApiKey secret")).await;
		assert_eq!(status, StatusCode::OK);

		let (status, body) = send(app(Some("secret")), Some("ApiKey guess")).await;
		assert_eq!(status, StatusCode::UNAUTHORIZED);
		assert_eq!(body["error"]["message"], "invalid api key");
	}
}

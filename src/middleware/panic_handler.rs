//! A middleware for catching panics.
//!
//! Normally, if an HTTP handler panics, the connection will simply be closed.
//! This middleware will catch panics and return a proper HTTP response.

use std::any::Any;

use axum::http;
use axum::response::IntoResponse;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::runtime;

/// Creates a middleware layer for catching panics and turning them into
/// responses.
pub fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

/// Turns a caught panic into a generic 500.
#[derive(Debug, Clone, Copy)]
pub struct PanicHandler;

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = axum::body::Body;

	fn response_for_panic(
		&mut self,
		payload: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let message = payload
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| payload.downcast_ref::<String>().map(String::as_str))
			.unwrap_or("<non-string payload>");

		tracing::error!(target: "cs2_panel_api::audit_log", panic_message = message, "handler panicked");

		runtime::Error::panic().into_response()
	}
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use axum::http::{Request, StatusCode};
	use axum::{Router, routing};
	use tower::ServiceExt;

	use crate::testing::body_json;

	async fn explode() -> &'static str
	{
		panic!("boom")
	}

	#[tokio::test]
	async fn panics_become_internal_server_errors()
	{
		let app = Router::new()
			.route("/", routing::get(explode))
			.layer(super::layer());

		let response = app
			.oneshot(Request::get("/").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert!(body_json(response).await["error"].is_string());
	}
}

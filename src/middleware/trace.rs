//! HTTP request tracing.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use axum::routing::Route;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::TraceLayer;

pub fn layer() -> impl tower::Layer<
	Route,
	Service: tower::Service<
		Request,
		Response: IntoResponse + 'static,
		Error: Into<Infallible> + 'static,
		Future: Send + 'static,
	> + Clone
	             + Send
	             + Sync
	             + 'static,
> + Clone
       + Send
       + Sync
       + 'static
{
	TraceLayer::new_for_http()
		.make_span_with(make_span)
		.on_request(on_request)
		.on_response(on_response)
		.on_failure(on_failure)
}

fn make_span(request: &Request) -> tracing::Span
{
	let span = tracing::info_span! {
		target: "cs2_panel_api::http",
		"request",
		request.id = tracing::field::Empty,
		request.method = ?request.method(),
		request.uri = %request.uri(),
		response.status = tracing::field::Empty,
		latency = tracing::field::Empty,
	};

	if let Some(request_id) = request
		.extensions()
		.get::<RequestId>()
		.and_then(|request_id| request_id.header_value().to_str().ok())
	{
		span.record("request.id", request_id);
	}

	span
}

fn on_request(_request: &Request, _span: &tracing::Span)
{
	tracing::debug!(target: "cs2_panel_api::http", "starting to process request");
}

fn on_response(response: &Response, latency: Duration, span: &tracing::Span)
{
	span.record("response.status", response.status().as_u16())
		.record("latency", format_args!("{latency:?}"));

	tracing::info!(target: "cs2_panel_api::http", "finished processing request");
}

fn on_failure(failure: ServerErrorsFailureClass, _latency: Duration, _span: &tracing::Span)
{
	match failure {
		ServerErrorsFailureClass::Error(error) => {
			tracing::error!(target: "cs2_panel_api::http", %error, "error occurred during request");
		},
		ServerErrorsFailureClass::StatusCode(status) => {
			tracing::error!(target: "cs2_panel_api::http", %status, "error occurred during request");
		},
	}
}

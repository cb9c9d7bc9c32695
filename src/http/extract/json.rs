//! JSON request and response bodies.

use std::fmt;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{self, HeaderMap};
use axum::response::{IntoResponse, Response};
use mime::Mime;
use serde::{Deserialize, Serialize};

use crate::runtime;

/// JSON body extractor and response.
///
/// Unlike [`axum::Json`], a rejection is a [`runtime::Error`], so a malformed
/// body produces the same error shape as every other validation failure.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> IntoResponse for Json<T>
where
	T: Serialize,
{
	fn into_response(self) -> Response
	{
		axum::Json(self.0).into_response()
	}
}

impl<T, S> FromRequest<S> for Json<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	#[tracing::instrument(level = "debug", skip_all, err(level = "debug"))]
	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection>
	{
		if !has_json_content_type(req.headers()) {
			return Err(runtime::Error::validation("Expected request with `Content-Type: application/json`"));
		}

		let body = Bytes::from_request(req, state)
			.await
			.map_err(|rejection| runtime::Error::validation(rejection.body_text()))?;

		serde_json::from_slice(&body[..])
			.map(Self)
			.map_err(|error| runtime::Error::validation(format!("Invalid request body: {error}")))
	}
}

fn has_json_content_type(headers: &HeaderMap) -> bool
{
	let Some(content_type) = headers.get(http::header::CONTENT_TYPE) else {
		tracing::debug!("request headers do not contain a `Content-Type` header");
		return false;
	};

	let Some(mime) = content_type
		.to_str()
		.ok()
		.and_then(|content_type| content_type.parse::<Mime>().ok())
	else {
		tracing::debug!("request contains a `Content-Type` header, but it's not a valid mime type");
		return false;
	};

	mime.type_() == mime::APPLICATION
		&& (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

#[cfg(test)]
mod tests
{
	use axum::body::Body;
	use serde::Deserialize;

	use super::*;

	#[derive(Debug, Deserialize)]
	struct Payload
	{
		name: String,
	}

	fn request(content_type: Option<&str>, body: &'static str) -> Request
	{
		let mut builder = http::Request::builder().method("POST").uri("/");

		if let Some(content_type) = content_type {
			builder = builder.header(http::header::CONTENT_TYPE, content_type);
		}

		builder.body(Body::from(body)).unwrap()
	}

	#[tokio::test]
	async fn accepts_json()
	{
		let req = request(Some("application/json; charset=utf-8"), r#"{"name":"alice"}"#);
		let Json(payload) = Json::<Payload>::from_request(req, &()).await.unwrap();

		assert_eq!(payload.name, "alice");
	}

	#[tokio::test]
	async fn rejects_missing_content_type()
	{
		let req = request(None, r#"{"name":"alice"}"#);
		let error = Json::<Payload>::from_request(req, &()).await.unwrap_err();

		assert_eq!(error.status(), http::StatusCode::BAD_REQUEST);
	}

	#[tokio::test]
	async fn rejects_malformed_body()
	{
		let req = request(Some("application/json"), r#"{"nom":1}"#);
		let error = Json::<Payload>::from_request(req, &()).await.unwrap_err();

		assert_eq!(error.status(), http::StatusCode::BAD_REQUEST);
		assert!(error.to_string().starts_with("Invalid request body"));
	}
}

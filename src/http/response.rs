//! HTTP response types.

use std::borrow::Cow;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// A JSON response with status `201 Created`.
#[derive(Debug)]
pub struct Created<T>(pub T)
where
	T: Serialize;

impl<T> IntoResponse for Created<T>
where
	T: Serialize,
{
	fn into_response(self) -> Response
	{
		(StatusCode::CREATED, Json(self.0)).into_response()
	}
}

/// A `{"message": "..."}` body, used to acknowledge mutations.
#[derive(Debug, Serialize)]
pub struct Message
{
	pub message: Cow<'static, str>,
}

impl Message
{
	/// Creates a new [`Message`].
	pub fn new(message: impl Into<Cow<'static, str>>) -> Self
	{
		Self { message: message.into() }
	}
}

impl IntoResponse for Message
{
	fn into_response(self) -> Response
	{
		Json(self).into_response()
	}
}

/// Response body for newly created resources.
#[derive(Debug, Serialize)]
pub struct CreatedId
{
	pub id: i64,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<Cow<'static, str>>,
}

//! Path parameters.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request;
use serde::Deserialize;

use crate::runtime;

/// Path parameter extractor whose rejection is a [`runtime::Error`].
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug + Send + 'static,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	#[tracing::instrument(level = "debug", skip_all, err(level = "debug"))]
	async fn from_request_parts(parts: &mut request::Parts, state: &S) -> Result<Self, Self::Rejection>
	{
		<axum::extract::Path<T> as FromRequestParts<S>>::from_request_parts(parts, state)
			.await
			.map(|axum::extract::Path(value)| Self(value))
			.map_err(|rejection| runtime::Error::validation(rejection.body_text()))
	}
}

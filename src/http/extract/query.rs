//! Query parameters.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request;
use serde::Deserialize;

use crate::runtime;

/// Query string extractor whose rejection is a [`runtime::Error`].
#[derive(Debug)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
	T: for<'de> Deserialize<'de> + fmt::Debug + Send + 'static,
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	#[tracing::instrument(level = "debug", skip_all, err(level = "debug"))]
	async fn from_request_parts(parts: &mut request::Parts, _state: &S) -> Result<Self, Self::Rejection>
	{
		let query = parts.uri.query().unwrap_or_default();

		serde_html_form::from_str(query)
			.map(Self)
			.map_err(|error| runtime::Error::validation(format!("Invalid query parameters: {error}")))
	}
}

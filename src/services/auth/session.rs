//! Authenticated sessions.

use axum::extract::FromRequestParts;
use axum::http::request;
use serde::{Deserialize, Serialize};

use super::Role;
use crate::runtime;

/// The payload of a session token, identifying the panel user making a
/// request.
///
/// The auth middleware inserts this into the request extensions after
/// verifying the token; handlers extract it from there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session
{
	/// The user's ID in `panel_users`.
	pub id: i64,

	pub username: String,

	pub role: Role,
}

impl<S> FromRequestParts<S> for Session
where
	S: Send + Sync,
{
	type Rejection = runtime::Error;

	async fn from_request_parts(parts: &mut request::Parts, _state: &S) -> Result<Self, Self::Rejection>
	{
		parts.extensions.get::<Self>().cloned().ok_or_else(|| {
			tracing::error!(uri = %parts.uri, "session requested on a route without auth middleware");
			runtime::Error::unauthenticated()
		})
	}
}

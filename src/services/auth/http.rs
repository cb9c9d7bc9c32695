//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{AuthService, LoginRequest, LoginResponse};
use crate::http::extract::Json;
use crate::http::response::Message;
use crate::runtime::Result;

impl From<AuthService> for Router
{
	fn from(svc: AuthService) -> Self
	{
		Router::new()
			.route("/login", routing::post(login))
			.route("/logout", routing::post(logout))
			.with_state(svc)
	}
}

/// Log in with a username and password.
async fn login(
	State(svc): State<AuthService>,
	Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>>
{
	let res = svc.login(req).await?;

	Ok(Json(res))
}

/// Log out.
///
/// Always succeeds; the client is expected to discard its token.
async fn logout(State(svc): State<AuthService>) -> Message
{
	Message::new(svc.logout())
}

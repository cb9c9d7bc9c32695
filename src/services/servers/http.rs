//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{PowerRequest, ServerService};
use crate::http::extract::{Json, Path, Query};
use crate::http::response::Message;
use crate::pagination::{Page, PaginationRequest};
use crate::runtime::Result;
use crate::services::auth::{AuthLayer, RoleSet, Session};
use crate::services::panel::GameServer;

impl From<ServerService> for Router
{
	fn from(svc: ServerService) -> Self
	{
		let auth = AuthLayer::new(svc.auth_svc.clone(), RoleSet::SENIOR);

		Router::new()
			.route("/", routing::get(get_many))
			.route("/{id}/power", routing::post(power))
			.route_layer(auth)
			.with_state(svc)
	}
}

/// Fetch all game servers.
///
/// Pagination parameters are accepted for consistency with the other list
/// endpoints, but ignored.
async fn get_many(
	State(svc): State<ServerService>,
	Query(_): Query<PaginationRequest>,
) -> Result<Json<Page<GameServer>>>
{
	let res = svc.fetch_servers().await?;

	Ok(Json(res))
}

/// Start, stop or restart a server.
async fn power(
	session: Session,
	State(svc): State<ServerService>,
	Path(server_id): Path<String>,
	Json(req): Json<PowerRequest>,
) -> Result<Message>
{
	let signal = svc.send_power(&session, &server_id, req).await?;

	Ok(Message::new(format!("Server {signal} signal sent successfully")))
}

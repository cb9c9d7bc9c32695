//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{Stats, StatsService};
use crate::http::extract::Json;
use crate::runtime::Result;
use crate::services::auth::{AuthLayer, RoleSet, Session};

impl From<StatsService> for Router
{
	fn from(svc: StatsService) -> Self
	{
		let auth = AuthLayer::new(svc.auth_svc.clone(), RoleSet::ALL);

		Router::new()
			.route("/", routing::get(get))
			.route_layer(auth)
			.with_state(svc)
	}
}

/// Dashboard statistics for the requesting user.
async fn get(session: Session, State(svc): State<StatsService>) -> Result<Json<Stats>>
{
	let stats = svc.aggregate(session.role).await?;

	Ok(Json(stats))
}

//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{Ban, BanRequest, BanService};
use crate::http::extract::{Json, Path, Query};
use crate::http::response::{Created, CreatedId, Message};
use crate::pagination::{Page, PaginationRequest};
use crate::runtime::Result;
use crate::services::auth::{AuthLayer, RoleSet, Session};

impl From<BanService> for Router
{
	fn from(svc: BanService) -> Self
	{
		let any_role = AuthLayer::new(svc.auth_svc.clone(), RoleSet::ALL);
		let senior = AuthLayer::new(svc.auth_svc.clone(), RoleSet::SENIOR);

		Router::new()
			.route("/", routing::get(get_many).post(create).route_layer(any_role.clone()))
			.route("/{id}", routing::get(get_single).put(update).route_layer(any_role))
			.route("/{id}", routing::delete(delete).route_layer(senior))
			.with_state(svc)
	}
}

/// Fetch a page of bans.
async fn get_many(
	State(svc): State<BanService>,
	Query(req): Query<PaginationRequest>,
) -> Result<Json<Page<Ban>>>
{
	let res = svc.fetch_bans(req).await?;

	Ok(Json(res))
}

async fn get_single(State(svc): State<BanService>, Path(ban_id): Path<i64>) -> Result<Json<Ban>>
{
	let res = svc.fetch_ban(ban_id).await?;

	Ok(Json(res))
}

/// Ban a player.
async fn create(
	session: Session,
	State(svc): State<BanService>,
	Json(req): Json<BanRequest>,
) -> Result<Created<CreatedId>>
{
	let id = svc.create_ban(&session, req).await?;

	Ok(Created(CreatedId { id, message: None }))
}

async fn update(
	State(svc): State<BanService>,
	Path(ban_id): Path<i64>,
	Json(req): Json<BanRequest>,
) -> Result<Message>
{
	svc.update_ban(ban_id, req).await?;

	Ok(Message::new("Updated"))
}

/// Delete a ban. Only Administrators and Senior Moderators may do this.
async fn delete(State(svc): State<BanService>, Path(ban_id): Path<i64>) -> Result<Message>
{
	svc.delete_ban(ban_id).await?;

	Ok(Message::new("Ban deleted successfully"))
}

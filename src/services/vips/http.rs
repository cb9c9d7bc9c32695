//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{Vip, VipRequest, VipService};
use crate::http::extract::{Json, Path, Query};
use crate::http::response::{Created, CreatedId, Message};
use crate::pagination::{Page, PaginationRequest};
use crate::runtime::Result;
use crate::services::auth::{AuthLayer, RoleSet};

impl From<VipService> for Router
{
	fn from(svc: VipService) -> Self
	{
		let auth = AuthLayer::new(svc.auth_svc.clone(), RoleSet::ADMIN);

		Router::new()
			.route("/", routing::get(get_many).post(create))
			.route("/{id}", routing::get(get_single).put(update).delete(delete))
			.route_layer(auth)
			.with_state(svc)
	}
}

/// Fetch a page of VIP grants.
async fn get_many(
	State(svc): State<VipService>,
	Query(req): Query<PaginationRequest>,
) -> Result<Json<Page<Vip>>>
{
	let res = svc.fetch_vips(req).await?;

	Ok(Json(res))
}

async fn get_single(State(svc): State<VipService>, Path(vip_id): Path<i64>) -> Result<Json<Vip>>
{
	let res = svc.fetch_vip(vip_id).await?;

	Ok(Json(res))
}

/// Grant a player VIP or SVIP.
async fn create(
	State(svc): State<VipService>,
	Json(req): Json<VipRequest>,
) -> Result<Created<CreatedId>>
{
	let id = svc.create_vip(req).await?;

	Ok(Created(CreatedId { id, message: Some("VIP record created successfully".into()) }))
}

async fn update(
	State(svc): State<VipService>,
	Path(vip_id): Path<i64>,
	Json(req): Json<VipRequest>,
) -> Result<Message>
{
	svc.update_vip(vip_id, req).await?;

	Ok(Message::new("VIP updated successfully"))
}

async fn delete(State(svc): State<VipService>, Path(vip_id): Path<i64>) -> Result<Message>
{
	svc.delete_vip(vip_id).await?;

	Ok(Message::new("VIP removed successfully"))
}

//! HTTP handlers for this service.

use axum::extract::State;
use axum::{Router, routing};

use super::{CreateUserRequest, PanelUser, UpdateUserRequest, UserService};
use crate::http::extract::{Json, Path, Query};
use crate::http::response::{Created, CreatedId, Message};
use crate::pagination::{Page, PaginationRequest};
use crate::runtime::Result;
use crate::services::auth::{AuthLayer, RoleSet};

impl From<UserService> for Router
{
	fn from(svc: UserService) -> Self
	{
		let auth = AuthLayer::new(svc.auth_svc.clone(), RoleSet::ADMIN);

		Router::new()
			.route("/", routing::get(get_many).post(create))
			.route("/{id}", routing::get(get_single).put(update).delete(delete))
			.route_layer(auth)
			.with_state(svc)
	}
}

/// Fetch a page of panel users.
async fn get_many(
	State(svc): State<UserService>,
	Query(req): Query<PaginationRequest>,
) -> Result<Json<Page<PanelUser>>>
{
	let res = svc.fetch_users(req).await?;

	Ok(Json(res))
}

/// Fetch a specific panel user by their ID.
async fn get_single(State(svc): State<UserService>, Path(user_id): Path<i64>) -> Result<Json<PanelUser>>
{
	let res = svc.fetch_user(user_id).await?;

	Ok(Json(res))
}

/// Create a panel user.
async fn create(
	State(svc): State<UserService>,
	Json(req): Json<CreateUserRequest>,
) -> Result<Created<CreatedId>>
{
	let id = svc.create_user(req).await?;

	Ok(Created(CreatedId { id, message: Some("User created successfully".into()) }))
}

/// Update a panel user.
async fn update(
	State(svc): State<UserService>,
	Path(user_id): Path<i64>,
	Json(req): Json<UpdateUserRequest>,
) -> Result<Message>
{
	svc.update_user(user_id, req).await?;

	Ok(Message::new("User updated successfully"))
}

/// Delete a panel user.
async fn delete(State(svc): State<UserService>, Path(user_id): Path<i64>) -> Result<Message>
{
	svc.delete_user(user_id).await?;

	Ok(Message::new("User deleted successfully"))
}

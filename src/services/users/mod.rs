//! A service for managing panel users.
//!
//! Only Administrators can reach this service, and even they cannot create,
//! modify or delete an Administrator account through it. The single
//! Administrator is seeded directly in the database.

use axum::extract::FromRef;
use derive_more::Debug;
use sqlx::{MySql, Pool};

use crate::database::{SqlErrorExt, UpdateQueryBuilder, resource};
use crate::pagination::{Page, PaginationRequest};
use crate::services::AuthService;
use crate::services::auth::{Role, password};

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{CreateUserRequest, PanelUser, UpdateUserRequest};

mod http;


/// The `panel_users` table.
struct PanelUsers;

impl resource::Resource for PanelUsers
{
	const TABLE: &'static str = "panel_users";
	const COLUMNS: &'static str = "id, username, email, role, created_at";
	const SEARCH_COLUMNS: &'static [&'static str] = &["username", "email"];
	const ORDER_BY: &'static str = "created_at DESC, id DESC";

	type Row = PanelUser;
}

/// A service for managing panel users.
#[derive(Debug, Clone, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct UserService
{
	#[debug(skip)]
	database: Pool<MySql>,
	auth_svc: AuthService,
}

impl UserService
{
	/// Create a new [`UserService`].
	pub fn new(database: Pool<MySql>, auth_svc: AuthService) -> Self
	{
		Self { database, auth_svc }
	}

	/// Fetch a page of users.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_users(&self, req: PaginationRequest) -> Result<Page<PanelUser>>
	{
		let page = resource::fetch_page::<PanelUsers>(&self.database, &req).await?;

		Ok(page)
	}

	/// Fetch a single user.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_user(&self, user_id: i64) -> Result<PanelUser>
	{
		resource::fetch_one::<PanelUsers>(&self.database, user_id)
			.await?
			.ok_or(Error::UserDoesNotExist)
	}

	/// Create a new user.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn create_user(&self, req: CreateUserRequest) -> Result<i64>
	{
		if req.role == Role::Administrator {
			return Err(Error::CreateAdministrator);
		}

		let username = non_empty("username", &req.username)?;
		let email = non_empty("email", &req.email)?;

		if req.password.is_empty() {
			return Err(Error::EmptyField("password"));
		}

		let password_hash = password::hash(req.password).await?;

		let result = sqlx::query(
			r"
			INSERT INTO panel_users (username, email, password, role)
			VALUES (?, ?, ?, ?)
			",
		)
		.bind(username)
		.bind(email)
		.bind(password_hash)
		.bind(req.role)
		.execute(&self.database)
		.await
		.map_err(|error| {
			if error.is_unique_violation() { Error::DuplicateUser } else { Error::Database(error) }
		})?;

		let user_id = i64::try_from(result.last_insert_id()).map_err(|error| {
			Error::Database(sqlx::Error::Decode(Box::new(error)))
		})?;

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			%user_id,
			role = %req.role,
			"created panel user",
		};

		Ok(user_id)
	}

	/// Update an existing user.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn update_user(&self, user_id: i64, req: UpdateUserRequest) -> Result<()>
	{
		if req.role == Role::Administrator {
			return Err(Error::PromoteToAdministrator);
		}

		if self.stored_role(user_id).await? == Role::Administrator {
			return Err(Error::ModifyAdministrator);
		}

		let email = non_empty("email", &req.email)?;

		let password_hash = match req.new_password() {
			Some(password) => Some(password::hash(password.to_owned()).await?),
			None => None,
		};

		let mut query = UpdateQueryBuilder::new("panel_users");

		query.set("email", email).set("role", req.role);

		if let Some(password_hash) = password_hash {
			query.set("password", password_hash);
		}

		query.where_id(user_id);

		let result = query.build().execute(&self.database).await.map_err(|error| {
			if error.is_unique_violation() { Error::DuplicateUser } else { Error::Database(error) }
		})?;

		if result.rows_affected() == 0 {
			return Err(Error::UserDoesNotExist);
		}

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			%user_id,
			role = %req.role,
			"updated panel user",
		};

		Ok(())
	}

	/// Delete a user.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete_user(&self, user_id: i64) -> Result<()>
	{
		if self.stored_role(user_id).await? == Role::Administrator {
			return Err(Error::DeleteAdministrator);
		}

		if !resource::delete::<PanelUsers>(&self.database, user_id).await? {
			return Err(Error::UserDoesNotExist);
		}

		tracing::info!(target: "cs2_panel_api::audit_log", %user_id, "deleted panel user");

		Ok(())
	}

	/// Looks up the role currently stored for a user.
	async fn stored_role(&self, user_id: i64) -> Result<Role>
	{
		sqlx::query_scalar::<_, Role>("SELECT role FROM panel_users WHERE id = ?")
			.bind(user_id)
			.fetch_optional(&self.database)
			.await?
			.ok_or(Error::UserDoesNotExist)
	}
}

/// Trims `value` and rejects it if nothing is left.
fn non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str>
{
	let value = value.trim();

	if value.is_empty() {
		return Err(Error::EmptyField(field));
	}

	Ok(value)
}

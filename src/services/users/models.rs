//! Request / Response types for this service.

use derive_more::Debug;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use crate::services::auth::Role;

/// A panel user, without their password hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PanelUser
{
	pub id: i64,
	pub username: String,
	pub email: String,
	pub role: Role,

	/// When the account was created.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
}

/// Request payload for creating a panel user.
///
/// Missing text fields deserialize as empty strings so that the role can be
/// checked before anything else is validated.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest
{
	#[serde(default)]
	pub username: String,

	#[serde(default)]
	pub email: String,

	#[serde(default)]
	#[debug(skip)]
	pub password: String,

	pub role: Role,
}

/// Request payload for updating a panel user.
///
/// The password is only changed if a non-empty one is given.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest
{
	#[serde(default)]
	pub email: String,

	pub role: Role,

	#[serde(default)]
	#[debug("{}", if password.is_some() { "Some(..)" } else { "None" })]
	pub password: Option<String>,
}

impl UpdateUserRequest
{
	/// The new password, if one should be set.
	pub fn new_password(&self) -> Option<&str>
	{
		self.password
			.as_deref()
			.filter(|password| !password.is_empty())
	}
}


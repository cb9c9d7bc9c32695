//! Request / response types for this service.

use derive_more::Debug;
use serde::{Deserialize, Serialize};

use crate::services::users::PanelUser;

/// Request payload for logging in.
#[derive(Debug, Deserialize)]
pub struct LoginRequest
{
	pub username: String,

	#[debug(skip)]
	pub password: String,
}

/// Response payload for logging in.
#[derive(Debug, Serialize)]
pub struct LoginResponse
{
	/// The signed session token.
	pub token: String,

	/// The logged-in user, without their password hash.
	pub user: PanelUser,
}

//! A service for managing panel authentication.
//!
//! Panel users log in with a username and password and receive a signed
//! session token (see [`jwt`]). Every protected route is wrapped in an
//! [`AuthLayer`], which verifies that token and checks the session's [`Role`]
//! against the roles the route allows.
//!
//! Sessions are stateless: there is no server-side record of issued tokens,
//! so logging out simply means the client forgets its token.

use std::sync::Arc;

use axum::extract::FromRef;
use axum::http::HeaderMap;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use derive_more::Debug;
use sqlx::{FromRow, MySql, Pool};

use crate::runtime;
use crate::services::users::PanelUser;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{LoginRequest, LoginResponse};

pub mod role;
pub use role::{Role, RoleSet};

pub mod jwt;
pub use jwt::{Jwt, JwtState};

mod session;
pub use session::Session;

pub mod password;

mod middleware;
pub use middleware::{AuthLayer, Authenticate};

mod http;

#[cfg(test)]
mod tests;

/// A service for managing panel authentication.
#[derive(Debug, Clone, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct AuthService
{
	#[debug(skip)]
	database: Pool<MySql>,
	jwt_state: Arc<JwtState>,
}

/// A panel user together with their password hash.
#[derive(FromRow)]
struct StoredUser
{
	#[sqlx(flatten)]
	user: PanelUser,
	password: String,
}

impl AuthService
{
	/// Create a new [`AuthService`].
	pub fn new(api_config: &runtime::Config, database: Pool<MySql>) -> Self
	{
		let jwt_state = Arc::new(JwtState::new(api_config.jwt_secret()));

		Self { database, jwt_state }
	}

	/// Checks a user's credentials and issues a session token.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn login(&self, req: LoginRequest) -> Result<LoginResponse>
	{
		let StoredUser { user, password: hash } = sqlx::query_as::<_, StoredUser>(
			r"
			SELECT id, username, email, role, created_at, password
			FROM panel_users
			WHERE username = ?
			",
		)
		.bind(&req.username)
		.fetch_optional(&self.database)
		.await?
		.ok_or(Error::UserNotFound)?;

		if !password::verify(req.password, hash).await? {
			return Err(Error::InvalidPassword);
		}

		let token = self.issue_token(Session {
			id: user.id,
			username: user.username.clone(),
			role: user.role,
		})?;

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			user_id = user.id,
			user_role = %user.role,
			"user logged in",
		};

		Ok(LoginResponse { token, user })
	}

	/// Signs a fresh session token for `session`.
	pub fn issue_token(&self, session: Session) -> Result<String>
	{
		self.jwt_state.encode(&Jwt::new(session))
	}

	/// Verifies a raw session token.
	pub fn verify_token(&self, token: &str) -> Result<Session>
	{
		self.jwt_state
			.decode::<Session>(token)
			.map(Jwt::into_payload)
	}

	/// Authenticates a request by its `Authorization` header and checks that
	/// the session's role is one of `roles`.
	pub fn authenticate(&self, headers: &HeaderMap, roles: RoleSet) -> Result<Session>
	{
		let Authorization(bearer) = headers
			.typed_get::<Authorization<Bearer>>()
			.ok_or(Error::MissingToken)?;

		let session = self.verify_token(bearer.token())?;

		role::authorize(roles, session.role)?;

		Ok(session)
	}

	/// Acknowledges a logout.
	///
	/// Tokens are not tracked server-side, so there is nothing to invalidate.
	pub fn logout(&self) -> &'static str
	{
		"Logged out successfully"
	}
}

//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::runtime;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the auth service.
#[derive(Debug, Error)]
pub enum Error
{
	/// Login was attempted for a username that does not exist.
	#[error("user not found")]
	UserNotFound,

	/// Login was attempted with the wrong password.
	#[error("invalid password")]
	InvalidPassword,

	/// The request did not carry a bearer token.
	#[error("missing bearer token")]
	MissingToken,

	/// The token's `exp` claim has passed.
	#[error("token has expired")]
	TokenExpired,

	/// The token could not be verified or decoded.
	#[error("invalid token: {0}")]
	InvalidToken(jsonwebtoken::errors::Error),

	/// The session's role is not allowed to access the route.
	#[error("insufficient permissions")]
	InsufficientPermissions,

	#[error("failed to encode jwt: {0}")]
	EncodeJwt(jsonwebtoken::errors::Error),

	/// Hashing or verifying a password failed.
	#[error("bcrypt failure: {0}")]
	Bcrypt(#[from] bcrypt::BcryptError),

	/// The blocking task running bcrypt panicked or was cancelled.
	#[error("password hashing task failed: {0}")]
	BlockingTask(#[from] tokio::task::JoinError),

	/// Something went wrong communicating with the database.
	#[error(transparent)]
	Database(#[from] sqlx::Error),
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(value: Error) -> Self
	{
		match value {
			Error::UserNotFound => Self::not_found("User"),
			Error::InvalidPassword => Self::invalid_credentials(),
			Error::MissingToken => Self::unauthenticated(),
			Error::TokenExpired => Self::token_expired(),
			Error::InvalidToken(error) => {
				tracing::debug!(%error, "rejecting token");
				Self::invalid_token()
			},
			Error::InsufficientPermissions => Self::forbidden("Forbidden: Insufficient permissions"),
			Error::EncodeJwt(error) => Self::internal("failed to issue session token", error),
			Error::Bcrypt(error) => Self::internal("failed to process password", error),
			Error::BlockingTask(error) => Self::internal("failed to process password", error),
			Error::Database(error) => error.into(),
		}
	}
}

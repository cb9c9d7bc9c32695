//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::runtime;
use crate::services::auth;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the user service.
#[derive(Debug, Error)]
pub enum Error
{
	/// There is exactly one Administrator, and it is not created via the API.
	#[error("Cannot create another Administrator account.")]
	CreateAdministrator,

	#[error("Cannot promote a user to Administrator.")]
	PromoteToAdministrator,

	#[error("Cannot modify an Administrator account.")]
	ModifyAdministrator,

	#[error("Administrator accounts cannot be deleted via API.")]
	DeleteAdministrator,

	/// A request dedicated to a specific user was made, but the user could
	/// not be found.
	#[error("user does not exist")]
	UserDoesNotExist,

	/// The username or email is already taken.
	#[error("Username or Email already exists")]
	DuplicateUser,

	/// A required field was empty.
	#[error("`{0}` cannot be empty")]
	EmptyField(&'static str),

	/// Hashing the password failed.
	#[error(transparent)]
	Auth(#[from] auth::Error),

	/// Something went wrong communicating with the database.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(value: Error) -> Self
	{
		match value {
			Error::CreateAdministrator
			| Error::PromoteToAdministrator
			| Error::ModifyAdministrator
			| Error::DeleteAdministrator => Self::forbidden(value.to_string()),
			Error::UserDoesNotExist => Self::not_found("User"),
			Error::DuplicateUser => Self::duplicate_key(value.to_string()),
			Error::EmptyField(_) => Self::validation(value.to_string()),
			Error::Auth(error) => error.into(),
			Error::Database(error) => error.into(),
		}
	}
}

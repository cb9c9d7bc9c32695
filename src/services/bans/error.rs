//! The errors that can occur when interacting with this service.

use thiserror::Error;

use super::lifecycle::MAX_DURATION_MINUTES;
use crate::runtime;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the ban service.
#[derive(Debug, Error)]
pub enum Error
{
	/// A required field was empty.
	#[error("`{0}` cannot be empty")]
	EmptyField(&'static str),

	/// The submitted duration was negative or absurdly long.
	#[error("`duration` must be between 0 and {MAX_DURATION_MINUTES} minutes")]
	InvalidDuration,

	/// A request dedicated to a specific ban was made, but the ban could not
	/// be found.
	#[error("ban does not exist")]
	BanDoesNotExist,

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
			Error::EmptyField(_) | Error::InvalidDuration => Self::validation(value.to_string()),
			Error::BanDoesNotExist => Self::not_found("Ban"),
			Error::Database(error) => error.into(),
		}
	}
}

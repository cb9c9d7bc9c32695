//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::runtime;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the VIP service.
#[derive(Debug, Error)]
pub enum Error
{
	/// The submitted group is neither `VIP` nor `SVIP`.
	#[error("Invalid group. Must be VIP or SVIP.")]
	InvalidGroup,

	/// A required field was empty.
	#[error("`{0}` cannot be empty")]
	EmptyField(&'static str),

	#[error("`expires` must be a unix timestamp, or 0 for a permanent grant")]
	NegativeExpiry,

	/// Each SteamID can only hold one grant.
	#[error("This SteamID is already assigned a group")]
	DuplicateSteamId,

	/// A request dedicated to a specific grant was made, but the grant could
	/// not be found.
	#[error("VIP record does not exist")]
	VipDoesNotExist,

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
			Error::InvalidGroup | Error::EmptyField(_) | Error::NegativeExpiry => {
				Self::validation(value.to_string())
			},
			Error::DuplicateSteamId => Self::duplicate_key(value.to_string()),
			Error::VipDoesNotExist => Self::not_found("VIP record"),
			Error::Database(error) => error.into(),
		}
	}
}

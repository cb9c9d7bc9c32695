//! The errors that can occur when interacting with this service.

use thiserror::Error;

use crate::runtime;
use crate::services::panel;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when interacting with the server service.
#[derive(Debug, Error)]
pub enum Error
{
	/// The submitted power signal is not one we know.
	#[error("Invalid power signal")]
	InvalidSignal,

	/// Senior Moderators may restart servers, but nothing else.
	#[error("Senior Moderators can only use the Restart command.")]
	RestartOnly,

	/// The server list could not be fetched from the panel.
	#[error("Failed to fetch server data")]
	FetchServers(#[source] panel::Error),

	/// The panel did not accept a power signal.
	#[error("Failed to send signal")]
	SendPower(#[source] panel::Error),
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(value: Error) -> Self
	{
		match value {
			Error::InvalidSignal => Self::validation(value.to_string()),
			Error::RestartOnly => Self::forbidden(value.to_string()),
			Error::FetchServers(source) => {
				Self::upstream(None, "Failed to fetch server data", Some(source.into()))
			},
			Error::SendPower(source) => {
				let status = source.status().filter(|status| !status.is_success());
				let message = source
					.detail()
					.map_or_else(|| String::from("Failed to send signal"), ToOwned::to_owned);

				Self::upstream(status, message, Some(source.into()))
			},
		}
	}
}

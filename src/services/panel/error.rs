//! The errors that can occur when talking to the game panel.

use reqwest::StatusCode;
use thiserror::Error;

/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when talking to the game panel.
#[derive(Debug, Error)]
pub enum Error
{
	/// The configured base URL cannot have path segments appended to it.
	#[error("panel base url `{0}` cannot be used as a base")]
	BaseUrl(url::Url),

	/// The API key contains characters that are not allowed in a header.
	#[error("panel api key is not a valid header value")]
	ApiKey(#[source] reqwest::header::InvalidHeaderValue),

	/// The request could not be sent, timed out, or the response body could
	/// not be decoded.
	#[error("failed to talk to panel: {0}")]
	Http(#[from] reqwest::Error),

	/// The panel answered with a non-2xx status.
	#[error("panel responded with {status}")]
	Status
	{
		status: StatusCode,

		/// The first `errors[].detail` in the response body, if any.
		detail: Option<String>,
	},
}

impl Error
{
	/// The status code the panel answered with, if it answered at all.
	pub fn status(&self) -> Option<StatusCode>
	{
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Http(error) => error.status(),
			Self::BaseUrl(_) | Self::ApiKey(_) => None,
		}
	}

	/// The human-readable detail the panel gave for this error, if any.
	pub fn detail(&self) -> Option<&str>
	{
		match self {
			Self::Status { detail, .. } => detail.as_deref(),
			_ => None,
		}
	}
}

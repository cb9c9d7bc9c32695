//! The main error type.
//!
//! This is returned by all fallible HTTP handlers, middlewares, etc.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Type alias that defaults to our [`Error`] as the default error type, but is
/// still overridable and therefore compatible with [`std::result::Result`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Convenience type alias.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main runtime error type.
///
/// This is the only error type allowed to reach users!
pub struct Error
{
	/// We box this so our error type is only 1 pointer wide.
	inner: Box<Inner>,
}

/// The different kinds of errors that can occur at runtime.
#[derive(Debug, thiserror::Error)]
enum ErrorKind
{
	/// The request did not carry a bearer token.
	#[error("Authentication required")]
	Unauthenticated,

	/// The bearer token was valid once, but has expired.
	#[error("Token expired")]
	TokenExpired,

	/// The bearer token could not be verified.
	#[error("Invalid session")]
	InvalidToken,

	/// The caller is authenticated, but not allowed to do this.
	#[error("{0}")]
	Forbidden(Cow<'static, str>),

	/// A resource does not exist.
	#[error("{what} not found")]
	NotFound
	{
		/// The thing that could not be found.
		what: Cow<'static, str>,
	},

	/// Login with a wrong password.
	#[error("Invalid password")]
	InvalidCredentials,

	/// Request was somehow malformed.
	#[error("{0}")]
	Validation(Cow<'static, str>),

	/// A unique column already contains the submitted value.
	#[error("{0}")]
	DuplicateKey(Cow<'static, str>),

	/// The game panel rejected a request or could not be reached.
	#[error("{message}")]
	Upstream
	{
		/// The status code the panel responded with, if it responded at all.
		status: Option<StatusCode>,

		/// The message to report.
		message: Cow<'static, str>,

		/// The underlying error, if any.
		#[source]
		source: Option<BoxError>,
	},

	/// Something went wrong communicating with the database.
	#[error("database error; please report this incident")]
	Database(#[from] sqlx::Error),

	/// Something else went wrong that is not the client's fault.
	#[error("{message}")]
	Internal
	{
		/// The message to report.
		message: Cow<'static, str>,

		/// The underlying error.
		#[source]
		source: BoxError,
	},

	/// An HTTP handler panicked, but was caught by middleware.
	#[error("something unexpected happened; please report this incident")]
	Panic,
}

impl Error
{
	/// Create a new [`Error`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { inner: Box::new(Inner::new(kind)) }
	}

	/// Returns the original error source.
	pub fn source(&self) -> &(dyn std::error::Error + Send + Sync + 'static)
	{
		&self.inner.kind
	}

	/// Returns the source code location of the original error source.
	pub fn source_location(&self) -> Location<'static>
	{
		self.inner.source_location
	}

	/// Returns the appropriate HTTP status code to use in an error response.
	pub fn status(&self) -> StatusCode
	{
		match self.inner.kind {
			ErrorKind::Unauthenticated | ErrorKind::TokenExpired | ErrorKind::InvalidToken => {
				StatusCode::UNAUTHORIZED
			},
			ErrorKind::Forbidden(_) => StatusCode::FORBIDDEN,
			ErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
			ErrorKind::InvalidCredentials
			| ErrorKind::Validation(_)
			| ErrorKind::DuplicateKey(_) => StatusCode::BAD_REQUEST,
			ErrorKind::Upstream { status, .. } => {
				status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
			},
			ErrorKind::Database(_) | ErrorKind::Internal { .. } | ErrorKind::Panic => {
				StatusCode::INTERNAL_SERVER_ERROR
			},
		}
	}

	/// Machine-readable code attached to some authentication failures.
	fn code(&self) -> Option<&'static str>
	{
		match self.inner.kind {
			ErrorKind::TokenExpired => Some("TOKEN_EXPIRED"),
			ErrorKind::InvalidToken => Some("INVALID_TOKEN"),
			ErrorKind::Unauthenticated
			| ErrorKind::Forbidden(_)
			| ErrorKind::NotFound { .. }
			| ErrorKind::InvalidCredentials
			| ErrorKind::Validation(_)
			| ErrorKind::DuplicateKey(_)
			| ErrorKind::Upstream { .. }
			| ErrorKind::Database(_)
			| ErrorKind::Internal { .. }
			| ErrorKind::Panic => None,
		}
	}

	/// Indicate that an HTTP panicked but the panic was caught.
	#[track_caller]
	pub(crate) fn panic() -> Self
	{
		Self::new(ErrorKind::Panic)
	}

	/// Reject a request that carries no bearer token.
	#[track_caller]
	pub(crate) fn unauthenticated() -> Self
	{
		Self::new(ErrorKind::Unauthenticated)
	}

	/// Reject a request whose token has expired.
	#[track_caller]
	pub(crate) fn token_expired() -> Self
	{
		Self::new(ErrorKind::TokenExpired)
	}

	/// Reject a request whose token failed verification.
	#[track_caller]
	pub(crate) fn invalid_token() -> Self
	{
		Self::new(ErrorKind::InvalidToken)
	}

	/// Reject a request because the caller lacks permission.
	#[track_caller]
	pub(crate) fn forbidden(reason: impl Into<Cow<'static, str>>) -> Self
	{
		Self::new(ErrorKind::Forbidden(reason.into()))
	}

	/// Reject a request because a requested resource was not found.
	///
	/// The message will read "`{what}` not found".
	#[track_caller]
	pub(crate) fn not_found(what: impl Into<Cow<'static, str>>) -> Self
	{
		Self::new(ErrorKind::NotFound { what: what.into() })
	}

	#[track_caller]
	pub(crate) fn invalid_credentials() -> Self
	{
		Self::new(ErrorKind::InvalidCredentials)
	}

	/// Reject a request because it was malformed in some way.
	#[track_caller]
	pub(crate) fn validation(reason: impl Into<Cow<'static, str>>) -> Self
	{
		Self::new(ErrorKind::Validation(reason.into()))
	}

	#[track_caller]
	pub(crate) fn duplicate_key(reason: impl Into<Cow<'static, str>>) -> Self
	{
		Self::new(ErrorKind::DuplicateKey(reason.into()))
	}

	/// The game panel failed a request.
	///
	/// If `status` is [`None`], the response will be a 500.
	#[track_caller]
	pub(crate) fn upstream(
		status: Option<StatusCode>,
		message: impl Into<Cow<'static, str>>,
		source: Option<BoxError>,
	) -> Self
	{
		Self::new(ErrorKind::Upstream { status, message: message.into(), source })
	}

	#[track_caller]
	pub(crate) fn internal(
		message: impl Into<Cow<'static, str>>,
		source: impl Into<BoxError>,
	) -> Self
	{
		Self::new(ErrorKind::Internal { message: message.into(), source: source.into() })
	}
}

impl fmt::Debug for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "[{}]: {:?}", self.source_location(), self.inner.kind)
	}
}

impl fmt::Display for Error
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(self.source(), f)
	}
}

impl IntoResponse for Error
{
	fn into_response(self) -> Response
	{
		#[derive(Debug, Serialize)]
		#[allow(clippy::missing_docs_in_private_items)]
		struct ErrorResponse
		{
			error: String,

			#[serde(skip_serializing_if = "Option::is_none")]
			code: Option<&'static str>,
		}

		let status = self.status();

		if status.is_server_error() {
			tracing::error! {
				target: "cs2_panel_api::audit_log",
				%status,
				kind = ?self.inner.kind,
				source_location = %self.source_location(),
				"internal server error: \"{self}\"",
			};
		} else {
			tracing::debug! {
				%status,
				source_location = %self.source_location(),
				"runtime error: \"{self}\"",
			};
		}

		let response = ErrorResponse { error: self.to_string(), code: self.code() };

		(status, axum::Json(response)).into_response()
	}
}

impl From<sqlx::Error> for Error
{
	#[track_caller]
	fn from(value: sqlx::Error) -> Self
	{
		Self::new(value.into())
	}
}

/// The actual representation of [`Error`].
struct Inner
{
	/// Which particular error we're dealing with.
	kind: ErrorKind,

	/// The source code location of where this [`Error`] was created.
	source_location: Location<'static>,
}

impl Inner
{
	/// Create a new [`Inner`].
	#[track_caller]
	fn new(kind: ErrorKind) -> Self
	{
		Self { kind, source_location: *Location::caller() }
	}
}

//! [JWT] session tokens.
//!
//! Tokens are signed with HS256 and carry the session payload flattened next
//! to the standard `iat` and `exp` claims.
//!
//! [JWT]: https://jwt.io

use std::fmt;
use std::ops::Deref;
use std::time::Duration;

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::Error;

/// How long a session token stays valid.
pub const TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// A JWT.
#[derive(Clone, Serialize, Deserialize)]
pub struct Jwt<T>
{
	/// The payload to encode in the token.
	#[serde(flatten)]
	payload: T,

	/// Timestamp (in seconds) of when this token was issued.
	#[serde(rename = "iat")]
	issued_at: i64,

	/// Timestamp (in seconds) of when this token will expire.
	#[serde(rename = "exp")]
	expires_at: i64,
}

impl<T> Jwt<T>
{
	/// Creates a new [`Jwt`] that is valid for [`TOKEN_LIFETIME`] starting now.
	pub fn new(payload: T) -> Self
	{
		Self::issued_at(payload, OffsetDateTime::now_utc(), TOKEN_LIFETIME)
	}

	/// Creates a new [`Jwt`] issued at a specific point in time.
	pub fn issued_at(payload: T, issued_at: OffsetDateTime, lifetime: Duration) -> Self
	{
		let issued_at = issued_at.unix_timestamp();
		let lifetime = i64::try_from(lifetime.as_secs()).unwrap_or(i64::MAX);

		Self { payload, issued_at, expires_at: issued_at.saturating_add(lifetime) }
	}

	/// Returns the inner payload.
	pub fn into_payload(self) -> T
	{
		self.payload
	}

	/// Returns the `exp` claim.
	pub fn expires_at(&self) -> i64
	{
		self.expires_at
	}
}

impl<T> fmt::Debug for Jwt<T>
where
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("Jwt")
			.field("payload", &self.payload)
			.field("iat", &self.issued_at)
			.field("exp", &self.expires_at)
			.finish()
	}
}

impl<T> Deref for Jwt<T>
{
	type Target = T;

	fn deref(&self) -> &Self::Target
	{
		&self.payload
	}
}

/// Keys and settings for signing and verifying tokens.
pub struct JwtState
{
	header: Header,
	encoding_key: EncodingKey,
	decoding_key: DecodingKey,
	validation: Validation,
}

impl JwtState
{
	/// Creates a new [`JwtState`] from a shared secret.
	pub fn new(secret: &str) -> Self
	{
		let mut validation = Validation::new(Algorithm::HS256);

		validation.leeway = 0;
		validation.set_required_spec_claims(&["exp"]);

		Self {
			header: Header::new(Algorithm::HS256),
			encoding_key: EncodingKey::from_secret(secret.as_bytes()),
			decoding_key: DecodingKey::from_secret(secret.as_bytes()),
			validation,
		}
	}

	/// Signs a token.
	pub fn encode<T>(&self, jwt: &Jwt<T>) -> Result<String, Error>
	where
		T: Serialize,
	{
		jsonwebtoken::encode(&self.header, jwt, &self.encoding_key).map_err(Error::EncodeJwt)
	}

	/// Verifies and decodes a token.
	///
	/// An expired token is reported as [`Error::TokenExpired`]; every other
	/// failure as [`Error::InvalidToken`].
	pub fn decode<T>(&self, token: &str) -> Result<Jwt<T>, Error>
	where
		T: DeserializeOwned,
	{
		jsonwebtoken::decode::<Jwt<T>>(token, &self.decoding_key, &self.validation)
			.map(|data| data.claims)
			.map_err(|error| match error.kind() {
				ErrorKind::ExpiredSignature => Error::TokenExpired,
				_ => Error::InvalidToken(error),
			})
	}
}

impl fmt::Debug for JwtState
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_struct("JwtState")
			.field("header", &self.header)
			.field("validation", &self.validation)
			.finish_non_exhaustive()
	}
}

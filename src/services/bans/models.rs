//! Request / Response types for this service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::lifecycle;

/// The state a ban is in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BanStatus
{
	#[default]
	Active,
	Unbanned,
	Expired,
}

impl BanStatus
{
	/// Returns a string representation of this [`BanStatus`], as stored in the
	/// database.
	pub const fn as_str(&self) -> &'static str
	{
		match self {
			Self::Active => "ACTIVE",
			Self::Unbanned => "UNBANNED",
			Self::Expired => "EXPIRED",
		}
	}
}

impl fmt::Display for BanStatus
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}

/// Error for parsing a string into a [`BanStatus`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown ban status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for BanStatus
{
	type Err = UnknownStatus;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"ACTIVE" => Ok(Self::Active),
			"UNBANNED" => Ok(Self::Unbanned),
			"EXPIRED" => Ok(Self::Expired),
			_ => Err(UnknownStatus(value.to_owned())),
		}
	}
}

impl_sqlx_as_str!(BanStatus);

/// A ban as it is stored in `sa_bans`.
#[derive(Debug, FromRow)]
pub struct BanRow
{
	pub id: i64,
	pub player_name: String,
	pub player_steamid: String,
	pub player_ip: Option<String>,
	pub admin_name: String,
	pub admin_steamid: String,
	pub reason: String,
	pub duration: i64,
	pub created: OffsetDateTime,
	pub ends: Option<OffsetDateTime>,
	pub status: BanStatus,
	pub updated_at: Option<OffsetDateTime>,
}

/// A ban.
#[derive(Debug, Serialize)]
pub struct Ban
{
	pub id: i64,
	pub player_name: String,
	pub player_steamid: String,
	pub player_ip: Option<String>,
	pub admin_name: String,
	pub admin_steamid: String,
	pub reason: String,

	/// Length of the ban in minutes; `0` for permanent bans.
	pub duration: i64,

	#[serde(with = "time::serde::rfc3339")]
	pub created: OffsetDateTime,

	#[serde(with = "time::serde::rfc3339::option")]
	pub ends: Option<OffsetDateTime>,

	/// The status as of now, see [`lifecycle::effective_status()`].
	pub status: BanStatus,

	#[serde(with = "time::serde::rfc3339::option")]
	pub updated_at: Option<OffsetDateTime>,
}

impl Ban
{
	/// Resolves the effective status of a stored ban at `now`.
	pub fn from_row(row: BanRow, now: OffsetDateTime) -> Self
	{
		let status = lifecycle::effective_status(row.status, row.ends, now);

		Self {
			id: row.id,
			player_name: row.player_name,
			player_steamid: row.player_steamid,
			player_ip: row.player_ip,
			admin_name: row.admin_name,
			admin_steamid: row.admin_steamid,
			reason: row.reason,
			duration: row.duration,
			created: row.created,
			ends: row.ends,
			status,
			updated_at: row.updated_at,
		}
	}
}

/// Request payload for creating or updating a ban.
#[derive(Debug, Clone, Deserialize)]
pub struct BanRequest
{
	pub player_name: String,
	pub player_steamid: String,

	#[serde(default)]
	pub player_ip: Option<String>,

	pub reason: String,

	/// Length of the ban in minutes; `0` for permanent bans.
	#[serde(default, deserialize_with = "crate::serde::de::int_or_string")]
	pub duration: i64,

	#[serde(default)]
	pub status: BanStatus,
}

#[cfg(test)]
mod tests
{
	use time::macros::datetime;

	use super::*;

	fn row(status: BanStatus, ends: Option<OffsetDateTime>) -> BanRow
	{
		BanRow {
			id: 1,
			player_name: String::from("alphakeks"),
			player_steamid: String::from("76561198282622073"),
			player_ip: None,
			admin_name: String::from("admin"),
			admin_steamid: String::from("1"),
			reason: String::from("cheating"),
			duration: 60,
			created: datetime!(2024-05-01 12:00 UTC),
			ends,
			status,
			updated_at: None,
		}
	}

	#[test]
	fn ban_serializes_effective_status()
	{
		let ban = Ban::from_row(
			row(BanStatus::Active, Some(datetime!(2024-05-01 13:00 UTC))),
			datetime!(2024-06-01 00:00 UTC),
		);

		let json = serde_json::to_value(&ban).unwrap();

		assert_eq!(json["status"], "EXPIRED");
		assert_eq!(json["created"], "2024-05-01T12:00:00Z");
		assert_eq!(json["ends"], "2024-05-01T13:00:00Z");
		assert_eq!(json["updated_at"], serde_json::Value::Null);
	}

	#[test]
	fn request_defaults()
	{
		let req: BanRequest = serde_json::from_str(
			r#"{ "player_name": "foo", "player_steamid": "7656", "reason": "spam" }"#,
		)
		.unwrap();

		assert_eq!(req.duration, 0);
		assert_eq!(req.status, BanStatus::Active);
		assert_eq!(req.player_ip, None);
	}

	#[test]
	fn duration_may_be_a_string()
	{
		let req: BanRequest = serde_json::from_str(
			r#"{ "player_name": "foo", "player_steamid": "7656", "reason": "spam", "duration": "60" }"#,
		)
		.unwrap();

		assert_eq!(req.duration, 60);

		assert!(
			serde_json::from_str::<BanRequest>(
				r#"{ "player_name": "foo", "player_steamid": "7656", "reason": "spam", "duration": "1h" }"#,
			)
			.is_err()
		);
	}

	#[test]
	fn unknown_status_is_rejected()
	{
		let result = serde_json::from_str::<BanRequest>(
			r#"{ "player_name": "foo", "player_steamid": "7656", "reason": "spam", "status": "GONE" }"#,
		);

		assert!(result.is_err());
		assert!("GONE".parse::<BanStatus>().is_err());
		assert_eq!("UNBANNED".parse::<BanStatus>(), Ok(BanStatus::Unbanned));
	}
}

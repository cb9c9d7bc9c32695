//! Request / Response types for this service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// The groups a player can be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VipGroup
{
	#[serde(rename = "VIP")]
	Vip,

	#[serde(rename = "SVIP")]
	Svip,
}

impl VipGroup
{
	pub const fn as_str(self) -> &'static str
	{
		match self {
			Self::Vip => "VIP",
			Self::Svip => "SVIP",
		}
	}
}

impl fmt::Display for VipGroup
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}

/// Error for parsing a string into a [`VipGroup`].
#[derive(Debug, Error)]
#[error("unknown group `{0}`")]
pub struct UnknownGroup(pub String);

impl FromStr for VipGroup
{
	type Err = UnknownGroup;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"VIP" => Ok(Self::Vip),
			"SVIP" => Ok(Self::Svip),
			_ => Err(UnknownGroup(value.to_owned())),
		}
	}
}

impl_sqlx_as_str!(VipGroup);

/// A VIP grant.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vip
{
	pub id: i64,

	/// The player's SteamID64.
	#[serde(with = "steam_id64")]
	pub steamid64: i64,

	pub group_name: VipGroup,

	/// The player's name, for display.
	pub name: String,

	/// Unix timestamp (seconds) of when the grant runs out, or `0` for never.
	pub expires: i64,
}

/// Request payload for creating or updating a VIP grant.
#[derive(Debug, Deserialize)]
pub struct VipRequest
{
	#[serde(with = "steam_id64")]
	pub steamid64: i64,

	/// Validated against [`VipGroup`] by the service, so an unknown group
	/// gets a proper error message.
	pub group_name: String,

	pub name: String,

	/// Unix timestamp (seconds); `0` or absent for a permanent grant.
	#[serde(default, deserialize_with = "crate::serde::de::int_or_string")]
	pub expires: i64,
}

/// SteamID64s exceed the integer range JavaScript can represent exactly, so
/// they are sent as strings. Numbers are accepted too.
mod steam_id64
{
	use serde::{Deserializer, Serializer, de};

	pub fn serialize<S>(steam_id: &i64, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_str(steam_id)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
	where
		D: Deserializer<'de>,
	{
		let steam_id = crate::serde::de::int_or_string(deserializer)?;

		if steam_id <= 0 {
			return Err(de::Error::custom("steamid64 must be positive"));
		}

		Ok(steam_id)
	}
}

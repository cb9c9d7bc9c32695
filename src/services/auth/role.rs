//! Panel roles and role-based authorization.
//!
//! Every panel user has exactly one [`Role`]. Routes declare which roles may
//! access them as a [`RoleSet`]; [`authorize()`] checks one against the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Error;

/// The role of a panel user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role
{
	/// Full access, including user and VIP management.
	#[serde(rename = "Administrator")]
	Administrator,

	/// Can delete bans and control servers, but only restart them.
	#[serde(rename = "Senior Moderator")]
	SeniorModerator,

	/// Can manage bans.
	#[serde(rename = "Moderator")]
	Moderator,
}

impl Role
{
	/// The role's canonical name, as stored and sent over the wire.
	pub const fn as_str(self) -> &'static str
	{
		match self {
			Self::Administrator => "Administrator",
			Self::SeniorModerator => "Senior Moderator",
			Self::Moderator => "Moderator",
		}
	}

	const fn bit(self) -> u8
	{
		match self {
			Self::Administrator => 1 << 0,
			Self::SeniorModerator => 1 << 1,
			Self::Moderator => 1 << 2,
		}
	}
}

impl fmt::Display for Role
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}

/// Error for parsing a string into a [`Role`].
#[derive(Debug, Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role
{
	type Err = UnknownRole;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"Administrator" => Ok(Self::Administrator),
			"Senior Moderator" => Ok(Self::SeniorModerator),
			"Moderator" => Ok(Self::Moderator),
			_ => Err(UnknownRole(value.to_owned())),
		}
	}
}

impl_sqlx_as_str!(Role);

/// A set of [`Role`]s that may access something.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RoleSet(u8);

impl RoleSet
{
	/// Every role.
	pub const ALL: Self = Self::of(&[Role::Administrator, Role::SeniorModerator, Role::Moderator]);

	/// Administrators and Senior Moderators.
	pub const SENIOR: Self = Self::of(&[Role::Administrator, Role::SeniorModerator]);

	/// Administrators only.
	pub const ADMIN: Self = Self::of(&[Role::Administrator]);

	/// Builds a set out of the given roles.
	pub const fn of(roles: &[Role]) -> Self
	{
		let mut bits = 0;
		let mut idx = 0;

		while idx < roles.len() {
			bits |= roles[idx].bit();
			idx += 1;
		}

		Self(bits)
	}

	/// Whether `role` is a member of this set.
	pub const fn contains(self, role: Role) -> bool
	{
		self.0 & role.bit() != 0
	}
}

impl fmt::Debug for RoleSet
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.debug_set()
			.entries(
				[Role::Administrator, Role::SeniorModerator, Role::Moderator]
					.into_iter()
					.filter(|&role| self.contains(role)),
			)
			.finish()
	}
}

/// Checks that `actual` is one of the `required` roles.
pub fn authorize(required: RoleSet, actual: Role) -> Result<(), Error>
{
	if required.contains(actual) {
		Ok(())
	} else {
		Err(Error::InsufficientPermissions)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn role_names_round_trip_through_serde()
	{
		let json = serde_json::to_string(&Role::SeniorModerator).unwrap();

		assert_eq!(json, r#""Senior Moderator""#);
		assert_eq!(serde_json::from_str::<Role>(&json).unwrap(), Role::SeniorModerator);
		assert!(serde_json::from_str::<Role>(r#""Owner""#).is_err());
	}

	#[test]
	fn from_str_matches_as_str()
	{
		for role in [Role::Administrator, Role::SeniorModerator, Role::Moderator] {
			assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
		}

		assert!("administrator".parse::<Role>().is_err());
	}

	#[test]
	fn role_sets()
	{
		assert!(RoleSet::ALL.contains(Role::Moderator));
		assert!(RoleSet::SENIOR.contains(Role::SeniorModerator));
		assert!(!RoleSet::SENIOR.contains(Role::Moderator));
		assert!(RoleSet::ADMIN.contains(Role::Administrator));
		assert!(!RoleSet::ADMIN.contains(Role::SeniorModerator));
	}

	#[test]
	fn authorize_rejects_roles_outside_the_set()
	{
		assert!(authorize(RoleSet::ADMIN, Role::Administrator).is_ok());
		assert!(matches!(
			authorize(RoleSet::SENIOR, Role::Moderator),
			Err(Error::InsufficientPermissions)
		));
	}
}

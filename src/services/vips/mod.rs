//! A service for managing VIP grants.
//!
//! Grants live in the `player_groups` table, which the game server plugin
//! reads to hand out in-game perks.

use axum::extract::FromRef;
use derive_more::Debug;
use sqlx::{MySql, Pool};

use crate::database::{SqlErrorExt, UpdateQueryBuilder, resource};
use crate::pagination::{Page, PaginationRequest};
use crate::services::AuthService;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{Vip, VipGroup, VipRequest};

mod http;

#[cfg(test)]
mod tests;

/// The `player_groups` table.
struct PlayerGroups;

impl resource::Resource for PlayerGroups
{
	const TABLE: &'static str = "player_groups";
	const COLUMNS: &'static str = "id, steamid64, group_name, name, expires";
	const SEARCH_COLUMNS: &'static [&'static str] =
		&["name", "CAST(steamid64 AS CHAR)", "group_name"];
	const ORDER_BY: &'static str = "id DESC";

	type Row = Vip;
}

/// A service for managing VIP grants.
#[derive(Debug, Clone, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct VipService
{
	#[debug(skip)]
	database: Pool<MySql>,
	auth_svc: AuthService,
}

/// A [`VipRequest`] that passed validation.
#[derive(Debug)]
struct ValidVip<'a>
{
	steamid64: i64,
	group: VipGroup,
	name: &'a str,
	expires: i64,
}

impl<'a> ValidVip<'a>
{
	fn new(req: &'a VipRequest) -> Result<Self>
	{
		let group = req
			.group_name
			.parse::<VipGroup>()
			.map_err(|_| Error::InvalidGroup)?;

		let name = req.name.trim();

		if name.is_empty() {
			return Err(Error::EmptyField("name"));
		}

		if req.expires < 0 {
			return Err(Error::NegativeExpiry);
		}

		Ok(Self { steamid64: req.steamid64, group, name, expires: req.expires })
	}
}

impl VipService
{
	/// Create a new [`VipService`].
	pub fn new(database: Pool<MySql>, auth_svc: AuthService) -> Self
	{
		Self { database, auth_svc }
	}

	/// Fetch a page of VIP grants.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_vips(&self, req: PaginationRequest) -> Result<Page<Vip>>
	{
		let page = resource::fetch_page::<PlayerGroups>(&self.database, &req).await?;

		Ok(page)
	}

	/// Fetch a single VIP grant.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_vip(&self, vip_id: i64) -> Result<Vip>
	{
		resource::fetch_one::<PlayerGroups>(&self.database, vip_id)
			.await?
			.ok_or(Error::VipDoesNotExist)
	}

	/// Grant a player a group.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn create_vip(&self, req: VipRequest) -> Result<i64>
	{
		let vip = ValidVip::new(&req)?;

		let result = sqlx::query(
			r"
			INSERT INTO player_groups (steamid64, group_name, name, expires)
			VALUES (?, ?, ?, ?)
			",
		)
		.bind(vip.steamid64)
		.bind(vip.group)
		.bind(vip.name)
		.bind(vip.expires)
		.execute(&self.database)
		.await
		.map_err(|error| {
			if error.is_unique_violation() { Error::DuplicateSteamId } else { Error::Database(error) }
		})?;

		let vip_id = i64::try_from(result.last_insert_id())
			.map_err(|error| Error::Database(sqlx::Error::Decode(Box::new(error))))?;

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			%vip_id,
			steamid64 = vip.steamid64,
			group = %vip.group,
			"granted VIP",
		};

		Ok(vip_id)
	}

	/// Update a VIP grant.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn update_vip(&self, vip_id: i64, req: VipRequest) -> Result<()>
	{
		let vip = ValidVip::new(&req)?;
		let mut query = UpdateQueryBuilder::new("player_groups");

		query
			.set("group_name", vip.group)
			.set("name", vip.name)
			.set("steamid64", vip.steamid64)
			.set("expires", vip.expires)
			.where_id(vip_id);

		let result = query.build().execute(&self.database).await.map_err(|error| {
			if error.is_unique_violation() { Error::DuplicateSteamId } else { Error::Database(error) }
		})?;

		if result.rows_affected() == 0 {
			return Err(Error::VipDoesNotExist);
		}

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			%vip_id,
			group = %vip.group,
			"updated VIP",
		};

		Ok(())
	}

	/// Revoke a VIP grant.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete_vip(&self, vip_id: i64) -> Result<()>
	{
		if !resource::delete::<PlayerGroups>(&self.database, vip_id).await? {
			return Err(Error::VipDoesNotExist);
		}

		tracing::info!(target: "cs2_panel_api::audit_log", %vip_id, "revoked VIP");

		Ok(())
	}
}

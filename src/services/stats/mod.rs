//! Dashboard statistics.
//!
//! Four independent numbers are gathered concurrently: the number of game
//! servers (from the panel), and the number of active server admins, bans and
//! VIP grants (from the database). What a user gets to see depends on their
//! role; hidden numbers are reported as `0`.

use axum::extract::FromRef;
use serde::Serialize;
use sqlx::{MySql, Pool};
use thiserror::Error;

use crate::runtime;
use crate::services::AuthService;
use crate::services::auth::{Role, RoleSet};
use crate::services::panel::{self, PanelClient};

mod http;


/// Type alias with a default `Err` type of [`Error`].
///
/// [`Error`]: enum@Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors that can occur when aggregating statistics.
///
/// Any single failure fails the whole aggregation.
#[derive(Debug, Error)]
pub enum Error
{
	#[error("failed to count servers: {0}")]
	Panel(#[from] panel::Error),

	#[error("failed to count rows: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<Error> for runtime::Error
{
	#[track_caller]
	fn from(value: Error) -> Self
	{
		Self::internal("Failed to aggregate dashboard stats", value)
	}
}

/// Dashboard statistics, as seen by a particular role.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats
{
	pub total_servers: u64,
	pub active_admins: u64,
	pub active_bans: u64,
	pub active_vips: u64,
}

impl Stats
{
	/// Zeroes out everything `role` is not allowed to see.
	pub fn visible_to(self, role: Role) -> Self
	{
		let show = |roles: RoleSet, value: u64| if roles.contains(role) { value } else { 0 };

		Self {
			total_servers: show(RoleSet::SENIOR, self.total_servers),
			active_admins: show(RoleSet::ADMIN, self.active_admins),
			active_bans: show(RoleSet::ALL, self.active_bans),
			active_vips: show(RoleSet::ADMIN, self.active_vips),
		}
	}
}

/// A service for dashboard statistics.
#[derive(Debug, Clone, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct StatsService
{
	database: Pool<MySql>,
	panel: PanelClient,
	auth_svc: AuthService,
}

impl StatsService
{
	/// Create a new [`StatsService`].
	pub fn new(database: Pool<MySql>, panel: PanelClient, auth_svc: AuthService) -> Self
	{
		Self { database, panel, auth_svc }
	}

	/// Gathers statistics and hides whatever `role` may not see.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn aggregate(&self, role: Role) -> Result<Stats>
	{
		let (total_servers, active_admins, active_bans, active_vips) = tokio::try_join!(
			async { self.panel.server_count().await.map_err(Error::from) },
			self.count("SELECT COUNT(*) FROM sa_admins WHERE ends IS NULL OR ends > NOW()"),
			self.count(
				"SELECT COUNT(*) FROM sa_bans \
				 WHERE status = 'ACTIVE' AND (ends IS NULL OR ends > NOW())",
			),
			self.count(
				"SELECT COUNT(*) FROM player_groups \
				 WHERE expires = 0 OR expires > UNIX_TIMESTAMP()",
			),
		)?;

		let stats = Stats { total_servers, active_admins, active_bans, active_vips };

		Ok(stats.visible_to(role))
	}

	async fn count(&self, query: &'static str) -> Result<u64>
	{
		let count = sqlx::query_scalar::<_, i64>(query)
			.fetch_one(&self.database)
			.await?;

		Ok(u64::try_from(count).unwrap_or_default())
	}
}

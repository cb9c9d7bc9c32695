//! A service for managing player bans.
//!
//! Bans live in the `sa_bans` table shared with the game server plugin. The
//! panel never flips a ban to `EXPIRED` on its own; instead, the status is
//! resolved whenever a ban is read (see [`lifecycle`]).

use axum::extract::FromRef;
use derive_more::Debug;
use sqlx::{MySql, Pool};
use time::OffsetDateTime;

use crate::database::{UpdateQueryBuilder, resource};
use crate::pagination::{Page, PaginationRequest};
use crate::services::AuthService;
use crate::services::auth::Session;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{Ban, BanRequest, BanRow, BanStatus};

pub mod lifecycle;

mod http;


/// The `sa_bans` table.
struct SaBans;

impl resource::Resource for SaBans
{
	const TABLE: &'static str = "sa_bans";
	const COLUMNS: &'static str = "id, player_name, player_steamid, player_ip, admin_name, \
	                               admin_steamid, reason, duration, created, ends, status, \
	                               updated_at";
	const SEARCH_COLUMNS: &'static [&'static str] = &["player_name", "player_steamid"];
	const ORDER_BY: &'static str = "created DESC, id DESC";

	type Row = BanRow;
}

/// A service for managing player bans.
#[derive(Debug, Clone, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct BanService
{
	#[debug(skip)]
	database: Pool<MySql>,
	auth_svc: AuthService,
}

/// The trimmed, checked fields of a [`BanRequest`].
struct ValidBan<'a>
{
	player_name: &'a str,
	player_steamid: &'a str,
	player_ip: Option<&'a str>,
	reason: &'a str,
	duration: i64,
	status: BanStatus,
}

impl<'a> ValidBan<'a>
{
	fn new(req: &'a BanRequest) -> Result<Self>
	{
		let player_name = non_empty("player_name", &req.player_name)?;
		let player_steamid = non_empty("player_steamid", &req.player_steamid)?;
		let reason = non_empty("reason", &req.reason)?;
		let player_ip = req
			.player_ip
			.as_deref()
			.map(str::trim)
			.filter(|ip| !ip.is_empty());

		if !(0..=lifecycle::MAX_DURATION_MINUTES).contains(&req.duration) {
			return Err(Error::InvalidDuration);
		}

		Ok(Self {
			player_name,
			player_steamid,
			player_ip,
			reason,
			duration: req.duration,
			status: req.status,
		})
	}
}

impl BanService
{
	/// Create a new [`BanService`].
	pub fn new(database: Pool<MySql>, auth_svc: AuthService) -> Self
	{
		Self { database, auth_svc }
	}

	/// Fetch a page of bans.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_bans(&self, req: PaginationRequest) -> Result<Page<Ban>>
	{
		let page = resource::fetch_page::<SaBans>(&self.database, &req).await?;
		let now = OffsetDateTime::now_utc();

		Ok(page.map(|row| Ban::from_row(row, now)))
	}

	/// Fetch a single ban.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_ban(&self, ban_id: i64) -> Result<Ban>
	{
		let row = resource::fetch_one::<SaBans>(&self.database, ban_id)
			.await?
			.ok_or(Error::BanDoesNotExist)?;

		Ok(Ban::from_row(row, OffsetDateTime::now_utc()))
	}

	/// Ban a player.
	///
	/// The ban is attributed to the panel user who submitted it.
	#[tracing::instrument(skip(self, session), fields(admin.id = session.id), err(level = "debug"))]
	pub async fn create_ban(&self, session: &Session, req: BanRequest) -> Result<i64>
	{
		let ban = ValidBan::new(&req)?;
		let created = lifecycle::created_now();
		let ends = lifecycle::compute_ends(created, ban.duration);

		let result = sqlx::query(
			r"
			INSERT INTO sa_bans
			  (player_name, player_steamid, player_ip, admin_name, admin_steamid,
			   reason, duration, created, ends, status)
			VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
			",
		)
		.bind(ban.player_name)
		.bind(ban.player_steamid)
		.bind(ban.player_ip)
		.bind(&session.username)
		.bind(session.id.to_string())
		.bind(ban.reason)
		.bind(ban.duration)
		.bind(created)
		.bind(ends)
		.bind(ban.status)
		.execute(&self.database)
		.await?;

		let ban_id = i64::try_from(result.last_insert_id())
			.map_err(|error| Error::Database(sqlx::Error::Decode(Box::new(error))))?;

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			%ban_id,
			admin = %session.username,
			player = ban.player_steamid,
			duration = ban.duration,
			"created ban",
		};

		Ok(ban_id)
	}

	/// Update a ban.
	///
	/// `ends` is recomputed relative to when the ban was originally created,
	/// not relative to now.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn update_ban(&self, ban_id: i64, req: BanRequest) -> Result<()>
	{
		let ban = ValidBan::new(&req)?;

		let created = sqlx::query_scalar::<_, OffsetDateTime>("SELECT created FROM sa_bans WHERE id = ?")
			.bind(ban_id)
			.fetch_optional(&self.database)
			.await?
			.ok_or(Error::BanDoesNotExist)?;

		let ends = lifecycle::compute_ends(created, ban.duration);
		let mut query = UpdateQueryBuilder::new("sa_bans");

		query
			.set("player_name", ban.player_name)
			.set("player_steamid", ban.player_steamid)
			.set("player_ip", ban.player_ip)
			.set("reason", ban.reason)
			.set("duration", ban.duration)
			.set("ends", ends)
			.set("status", ban.status)
			.set("updated_at", OffsetDateTime::now_utc())
			.where_id(ban_id);

		let result = query.build().execute(&self.database).await?;

		// deleted between the two queries
		if result.rows_affected() == 0 {
			return Err(Error::BanDoesNotExist);
		}

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			%ban_id,
			status = %ban.status,
			duration = ban.duration,
			"updated ban",
		};

		Ok(())
	}

	/// Delete a ban.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn delete_ban(&self, ban_id: i64) -> Result<()>
	{
		if !resource::delete::<SaBans>(&self.database, ban_id).await? {
			return Err(Error::BanDoesNotExist);
		}

		tracing::info!(target: "cs2_panel_api::audit_log", %ban_id, "deleted ban");

		Ok(())
	}
}

fn non_empty<'a>(field: &'static str, value: &'a str) -> Result<&'a str>
{
	let value = value.trim();

	if value.is_empty() {
		return Err(Error::EmptyField(field));
	}

	Ok(value)
}

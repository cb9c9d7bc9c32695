//! When bans end and what state they are in.

use time::{Duration, OffsetDateTime};

use super::BanStatus;

/// The longest ban duration we accept, in minutes (100 years).
pub const MAX_DURATION_MINUTES: i64 = 100 * 365 * 24 * 60;

/// Computes when a ban created at `created` and lasting `duration_minutes`
/// ends.
///
/// A duration of `0` means the ban is permanent and never ends.
pub fn compute_ends(created: OffsetDateTime, duration_minutes: i64) -> Option<OffsetDateTime>
{
	if duration_minutes <= 0 {
		return None;
	}

	created.checked_add(Duration::minutes(duration_minutes.min(MAX_DURATION_MINUTES)))
}

/// The current time, truncated to whole seconds.
///
/// Ban timestamps are stored with second precision, so `ends` is computed from
/// the same value that ends up in the `created` column.
pub fn created_now() -> OffsetDateTime
{
	let now = OffsetDateTime::now_utc();

	now - Duration::nanoseconds(i64::from(now.nanosecond()))
}

/// The status a ban is reported with at `now`.
///
/// An `ACTIVE` ban whose end has passed has expired, even if nothing updated
/// the stored status yet.
pub fn effective_status(
	stored: BanStatus,
	ends: Option<OffsetDateTime>,
	now: OffsetDateTime,
) -> BanStatus
{
	match (stored, ends) {
		(BanStatus::Active, Some(ends)) if ends <= now => BanStatus::Expired,
		(status, _) => status,
	}
}

#[cfg(test)]
mod tests
{
	use time::macros::datetime;

	use super::*;

	#[test]
	fn permanent_bans_never_end()
	{
		assert_eq!(compute_ends(datetime!(2024-05-01 12:00 UTC), 0), None);
	}

	#[test]
	fn ends_is_relative_to_created()
	{
		let created = datetime!(2024-05-01 12:00 UTC);

		assert_eq!(compute_ends(created, 90), Some(datetime!(2024-05-01 13:30 UTC)));
		assert_eq!(compute_ends(created, 60 * 24 * 7), Some(datetime!(2024-05-08 12:00 UTC)));
	}

	#[test]
	fn created_now_has_no_subsecond_part()
	{
		assert_eq!(created_now().nanosecond(), 0);
	}

	#[test]
	fn active_bans_past_their_end_are_expired()
	{
		let now = datetime!(2024-05-02 00:00 UTC);

		assert_eq!(
			effective_status(BanStatus::Active, Some(datetime!(2024-05-01 00:00 UTC)), now),
			BanStatus::Expired,
		);

		assert_eq!(
			effective_status(BanStatus::Active, Some(datetime!(2024-05-03 00:00 UTC)), now),
			BanStatus::Active,
		);

		assert_eq!(effective_status(BanStatus::Active, None, now), BanStatus::Active);
	}

	#[test]
	fn other_statuses_are_reported_as_stored()
	{
		let now = datetime!(2024-05-02 00:00 UTC);
		let ended = Some(datetime!(2024-05-01 00:00 UTC));

		assert_eq!(effective_status(BanStatus::Unbanned, ended, now), BanStatus::Unbanned);
		assert_eq!(effective_status(BanStatus::Expired, None, now), BanStatus::Expired);
	}
}

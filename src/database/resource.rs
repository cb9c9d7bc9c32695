//! Generic list / fetch / delete over a single table.
//!
//! Bans, panel users and VIP grants all follow the same shape: a paginated,
//! searchable listing, a lookup by primary key, and deletion by primary key.
//! Each of them implements [`Resource`] and gets these operations for free.

use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySql, Pool};

use super::{FilteredQueryBuilder, QueryBuilderExt, like_pattern};
use crate::pagination::{Page, PaginationRequest};

/// A table that can be listed, searched, fetched and deleted by `id`.
pub trait Resource
{
	/// The table name.
	const TABLE: &'static str;

	/// Comma-separated list of columns to select.
	const COLUMNS: &'static str;

	/// Column expressions a search term is matched against.
	const SEARCH_COLUMNS: &'static [&'static str];

	/// `ORDER BY` clause for listings, newest first.
	const ORDER_BY: &'static str;

	/// How a single row is decoded.
	type Row: for<'r> FromRow<'r, MySqlRow> + Send + Unpin;
}

/// Fetches a single page of `R`, honoring the search term.
///
/// The total count and the page itself are queried concurrently.
#[tracing::instrument(level = "debug", skip(database), fields(table = R::TABLE), err(level = "debug"))]
pub async fn fetch_page<R>(database: &Pool<MySql>, req: &PaginationRequest) -> sqlx::Result<Page<R::Row>>
where
	R: Resource,
{
	let pattern = req.search().map(like_pattern);

	let mut count_query = FilteredQueryBuilder::new(format!("SELECT COUNT(*) FROM {}", R::TABLE));
	let mut page_query =
		FilteredQueryBuilder::new(format!("SELECT {} FROM {}", R::COLUMNS, R::TABLE));

	if let Some(pattern) = pattern.as_deref() {
		count_query.filter_any_like(R::SEARCH_COLUMNS, pattern);
		page_query.filter_any_like(R::SEARCH_COLUMNS, pattern);
	}

	page_query
		.push(" ORDER BY ")
		.push(R::ORDER_BY)
		.push_limits(req.limit(), req.offset());

	let (total, items) = tokio::try_join!(
		count_query
			.build_query_scalar::<i64>()
			.fetch_one(database),
		page_query
			.build_query_as::<R::Row>()
			.fetch_all(database),
	)?;

	let total = u64::try_from(total).map_err(|error| sqlx::Error::ColumnDecode {
		index: String::from("COUNT(*)"),
		source: Box::new(error),
	})?;

	Ok(Page::new(items, total, req))
}

/// Fetches a single row of `R` by its primary key.
#[tracing::instrument(level = "debug", skip(database), fields(table = R::TABLE), err(level = "debug"))]
pub async fn fetch_one<R>(database: &Pool<MySql>, id: i64) -> sqlx::Result<Option<R::Row>>
where
	R: Resource,
{
	let mut query = FilteredQueryBuilder::new(format!("SELECT {} FROM {}", R::COLUMNS, R::TABLE));

	query.filter("id = ", id);

	query
		.build_query_as::<R::Row>()
		.fetch_optional(database)
		.await
}

/// Deletes a single row of `R` by its primary key.
///
/// Returns whether a row was actually deleted.
#[tracing::instrument(level = "debug", skip(database), fields(table = R::TABLE), err(level = "debug"))]
pub async fn delete<R>(database: &Pool<MySql>, id: i64) -> sqlx::Result<bool>
where
	R: Resource,
{
	let mut query = FilteredQueryBuilder::new(format!("DELETE FROM {}", R::TABLE));

	query.filter("id = ", id);

	let result = query.build().execute(database).await?;

	Ok(result.rows_affected() > 0)
}

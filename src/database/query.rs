//! Helpers for dealing with SQL queries.

use std::fmt;
use std::ops::{Deref, DerefMut};

use sqlx::{MySql, QueryBuilder};

/// Extension trait for [`sqlx::QueryBuilder`].
///
/// Provides some helpful methods.
pub trait QueryBuilderExt
{
	/// Pushes `LIMIT` and `OFFSET` clauses into the query.
	fn push_limits(&mut self, limit: u64, offset: u64) -> &mut Self;
}

impl QueryBuilderExt for QueryBuilder<'_, MySql>
{
	fn push_limits(&mut self, limit: u64, offset: u64) -> &mut Self
	{
		self.push(" LIMIT ")
			.push_bind(limit)
			.push(" OFFSET ")
			.push_bind(offset)
	}
}

/// Turns a search term into a case-insensitive substring pattern for `LIKE`.
///
/// `%`, `_` and `\` in the term match literally.
pub fn like_pattern(term: &str) -> String
{
	let mut pattern = String::with_capacity(term.len() + 2);

	pattern.push('%');

	for ch in term.to_lowercase().chars() {
		if matches!(ch, '%' | '_' | '\\') {
			pattern.push('\\');
		}

		pattern.push(ch);
	}

	pattern.push('%');
	pattern
}

/// A wrapper around [`sqlx::QueryBuilder`] that allows easily building queries
/// with one or more `WHERE` filters.
pub struct FilteredQueryBuilder<'args>
{
	/// The underlying query builder.
	query: QueryBuilder<'args, MySql>,

	/// Whether we already pushed `WHERE`.
	has_where: bool,
}

impl<'args> FilteredQueryBuilder<'args>
{
	/// Creates a new [`FilteredQueryBuilder`].
	pub fn new(query: impl Into<String>) -> Self
	{
		Self { query: QueryBuilder::new(query), has_where: false }
	}

	/// Adds a filter into the query.
	///
	/// # Example
	///
	/// ```rust,ignore
	/// let mut query = FilteredQueryBuilder::new("SELECT * FROM sa_bans");
	///
	/// if let Some(status) = status {
	///     query.filter("status = ", status);
	/// }
	///
	/// let result = query.build().fetch_all(&database).await?;
	/// ```
	pub fn filter<V>(&mut self, column: impl fmt::Display, value: V) -> &mut Self
	where
		V: sqlx::Type<MySql> + sqlx::Encode<'args, MySql> + Send + 'args,
	{
		self.push_conjunction();
		self.query.push(column).push_bind(value);
		self
	}

	/// Adds a filter matching `pattern` against any of `columns`.
	///
	/// Columns are lowercased before matching, so `pattern` should come from
	/// [`like_pattern()`].
	pub fn filter_any_like(&mut self, columns: &[&str], pattern: &str) -> &mut Self
	{
		if columns.is_empty() {
			return self;
		}

		self.push_conjunction();
		self.query.push("(");

		let mut separated = self.query.separated(" OR ");

		for column in columns {
			separated
				.push(format_args!("LOWER({column}) LIKE "))
				.push_bind_unseparated(pattern.to_owned());
		}

		self.query.push(")");
		self
	}

	/// Returns the underlying query builder.
	pub fn into_inner(self) -> QueryBuilder<'args, MySql>
	{
		self.query
	}

	fn push_conjunction(&mut self)
	{
		self.query
			.push(if self.has_where { " AND " } else { " WHERE " });

		self.has_where = true;
	}
}

impl<'args> Deref for FilteredQueryBuilder<'args>
{
	type Target = QueryBuilder<'args, MySql>;

	fn deref(&self) -> &Self::Target
	{
		&self.query
	}
}

impl DerefMut for FilteredQueryBuilder<'_>
{
	fn deref_mut(&mut self) -> &mut Self::Target
	{
		&mut self.query
	}
}

/// A wrapper around [`sqlx::QueryBuilder`] that allows easily building an
/// `UPDATE` query.
pub struct UpdateQueryBuilder<'args>
{
	/// The underlying query builder.
	query: QueryBuilder<'args, MySql>,

	/// Whether we already pushed `SET`.
	has_set: bool,
}

impl<'args> UpdateQueryBuilder<'args>
{
	/// Creates a new [`UpdateQueryBuilder`].
	pub fn new(table: impl fmt::Display) -> Self
	{
		Self { query: QueryBuilder::new(format!("UPDATE {table}")), has_set: false }
	}

	/// Adds an update into the query.
	pub fn set<V>(&mut self, column: impl fmt::Display, value: V) -> &mut Self
	where
		V: sqlx::Type<MySql> + sqlx::Encode<'args, MySql> + Send + 'args,
	{
		self.query
			.push(if self.has_set { ", " } else { " SET " })
			.push(column)
			.push(" = ")
			.push_bind(value);

		self.has_set = true;
		self
	}

	/// Restricts the update to the row with the given primary key.
	pub fn where_id(&mut self, id: i64) -> &mut Self
	{
		self.query.push(" WHERE id = ").push_bind(id);
		self
	}

	/// Returns the underlying query builder.
	pub fn into_inner(self) -> QueryBuilder<'args, MySql>
	{
		self.query
	}
}

impl<'args> Deref for UpdateQueryBuilder<'args>
{
	type Target = QueryBuilder<'args, MySql>;

	fn deref(&self) -> &Self::Target
	{
		&self.query
	}
}

impl DerefMut for UpdateQueryBuilder<'_>
{
	fn deref_mut(&mut self) -> &mut Self::Target
	{
		&mut self.query
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn like_pattern_escapes_wildcards()
	{
		assert_eq!(like_pattern("Foo"), "%foo%");
		assert_eq!(like_pattern("100%_done"), "%100\\%\\_done%");
		assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
	}

	#[test]
	fn filters_are_joined_with_and()
	{
		let mut query = FilteredQueryBuilder::new("SELECT id FROM sa_bans");

		query.filter("status = ", "ACTIVE");
		query.filter_any_like(&["player_name", "player_steamid"], "%x%");

		assert_eq!(
			query.sql(),
			"SELECT id FROM sa_bans WHERE status = ? AND (LOWER(player_name) LIKE ? OR \
			 LOWER(player_steamid) LIKE ?)",
		);
	}

	#[test]
	fn update_query_shape()
	{
		let mut query = UpdateQueryBuilder::new("player_groups");

		query.set("name", "foo").set("expires", 0_i64).where_id(7);

		assert_eq!(query.sql(), "UPDATE player_groups SET name = ?, expires = ? WHERE id = ?");
	}
}

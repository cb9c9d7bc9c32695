//! Pagination for list endpoints.
//!
//! Clients send `page`, `limit` and `search` as query parameters. Values that
//! are missing or not positive integers silently fall back to their defaults,
//! so a sloppy client always gets the first page instead of an error.

use serde::{Deserialize, Serialize};

/// Page to return if none (or garbage) was requested.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size to use if none (or garbage) was requested.
pub const DEFAULT_LIMIT: u64 = 10;

/// Upper bound for the page size.
pub const MAX_LIMIT: u64 = 100;

/// Query parameters accepted by every list endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PaginationRequest
{
	#[serde(default)]
	page: Option<String>,

	#[serde(default)]
	limit: Option<String>,

	#[serde(default)]
	search: Option<String>,
}

impl PaginationRequest
{
	/// The requested page, starting at 1.
	pub fn page(&self) -> u64
	{
		parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE)
	}

	/// The requested page size.
	pub fn limit(&self) -> u64
	{
		parse_positive(self.limit.as_deref())
			.unwrap_or(DEFAULT_LIMIT)
			.min(MAX_LIMIT)
	}

	/// How many rows to skip.
	pub fn offset(&self) -> u64
	{
		(self.page() - 1).saturating_mul(self.limit())
	}

	/// The trimmed search term, if a non-empty one was given.
	pub fn search(&self) -> Option<&str>
	{
		self.search
			.as_deref()
			.map(str::trim)
			.filter(|term| !term.is_empty())
	}
}

fn parse_positive(value: Option<&str>) -> Option<u64>
{
	value?.trim().parse::<u64>().ok().filter(|&value| value > 0)
}

/// A single page of results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T>
{
	pub items: Vec<T>,
	pub total_items: u64,
	pub total_pages: u64,
	pub current_page: u64,
}

impl<T> Page<T>
{
	/// Builds a page out of the rows that were fetched for `req`.
	pub fn new(items: Vec<T>, total_items: u64, req: &PaginationRequest) -> Self
	{
		Self {
			items,
			total_items,
			total_pages: total_items.div_ceil(req.limit()),
			current_page: req.page(),
		}
	}

	/// A page containing everything there is.
	pub fn single(items: Vec<T>) -> Self
	{
		let total_items = items.len() as u64;

		Self { items, total_items, total_pages: 1, current_page: 1 }
	}

	pub fn map<U>(self, mapper: impl FnMut(T) -> U) -> Page<U>
	{
		Page {
			items: self.items.into_iter().map(mapper).collect(),
			total_items: self.total_items,
			total_pages: self.total_pages,
			current_page: self.current_page,
		}
	}
}

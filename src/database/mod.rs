//! Helper traits & types for SQL.

mod error;
pub use error::SqlErrorExt;

mod query;
pub use query::{FilteredQueryBuilder, QueryBuilderExt, UpdateQueryBuilder, like_pattern};

pub mod resource;
pub use resource::Resource;

/// The minimum number of database pool connections.
pub const MIN_CONNECTIONS: u32 = if cfg!(test) { 0 } else { 1 };

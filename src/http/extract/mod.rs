//! Request extractors.
//!
//! These wrap axum's own extractors so that every rejection is reported in
//! the API's `{"error": ...}` format.

mod json;
pub use json::Json;

mod path;
pub use path::Path;

mod query;
pub use query::Query;

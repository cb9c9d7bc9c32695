//! A health check.
//!
//! Load balancers and uptime monitors hit `GET /`; if the process can route a
//! request, it is considered healthy. The database and the panel are not
//! consulted.

use axum::extract::FromRef;

mod http;

/// A service that simply responds if the API is up.
#[derive(Debug, Clone, Copy, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct HealthService {}

impl HealthService
{
	/// Create a new [`HealthService`].
	pub fn new() -> Self
	{
		Self {}
	}

	/// Reports that the API is running.
	#[tracing::instrument(level = "trace", skip(self))]
	pub fn status(&self) -> &'static str
	{
		"CS2 Panel API is running"
	}
}

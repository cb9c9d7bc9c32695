//! Request / Response types for this service.

use serde::Deserialize;

/// Request payload for sending a power signal.
#[derive(Debug, Deserialize)]
pub struct PowerRequest
{
	/// One of `start`, `stop` or `restart`.
	#[serde(default)]
	pub signal: String,
}

//! Helpers for inspecting database errors.

/// Extension trait for [`sqlx::Error`].
pub trait SqlErrorExt
{
	/// Whether this error was caused by a `UNIQUE` constraint.
	fn is_unique_violation(&self) -> bool;
}

impl SqlErrorExt for sqlx::Error
{
	fn is_unique_violation(&self) -> bool
	{
		self.as_database_error()
			.is_some_and(|error| error.is_unique_violation())
	}
}

//! Password hashing.
//!
//! bcrypt is deliberately slow, so all of this runs on tokio's blocking thread
//! pool.

use super::Result;

/// The bcrypt cost factor for new hashes.
pub const BCRYPT_COST: u32 = 10;

/// Hashes a plaintext password.
pub async fn hash(password: String) -> Result<String>
{
	let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST)).await??;

	Ok(hash)
}

/// Checks a plaintext password against a stored hash.
pub async fn verify(password: String, hash: String) -> Result<bool>
{
	let is_valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;

	Ok(is_valid)
}

#[cfg(test)]
mod tests
{
	#[tokio::test]
	async fn hashes_verify()
	{
		let hash = super::hash(String::from("hunter2")).await.unwrap();

		assert!(hash.starts_with("$2b$10$"));
		assert!(super::verify(String::from("hunter2"), hash.clone()).await.unwrap());
		assert!(!super::verify(String::from("hunter3"), hash).await.unwrap());
	}
}

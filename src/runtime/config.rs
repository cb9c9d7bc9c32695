//! Runtime configuration for the API.
//!
//! This module contains the [`Config`] struct - a set of configuration options
//! that will be read from the environment on startup. See the `.env.example`
//! file in the root of the repository for examples.

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use std::{env, fmt};

use thiserror::Error;
use url::Url;

/// The API's runtime configuration.
///
/// See [module level docs] for more details.
///
/// [module level docs]: crate::runtime::config
#[derive(Clone)]
pub struct Config
{
	/// [`Inner`] actually contains all the values, we just wrap it so
	/// [`Config`] is cheap to clone.
	inner: Arc<Inner>,
}

/// Error that can occur while initializing the API's [`Config`].
#[derive(Debug, Error)]
pub enum InitializeConfigError
{
	/// A required environment variable was not found or invalid
	/// UTF-8.
	#[error("failed to read configuration value `{var}`: {source}")]
	Env
	{
		/// The variable we tried to read.
		var: &'static str,

		/// The underlying error.
		source: env::VarError,
	},

	/// A required configuration option was empty.
	#[error("`{0}` cannot be empty")]
	EmptyValue(&'static str),

	/// A required configuration option could not be parsed into the required
	/// type.
	#[error("failed to parse configuration value `{var}`: {source}")]
	Parse
	{
		/// The variable we tried to parse.
		var: &'static str,

		/// The underlying error.
		source: Box<dyn std::error::Error + Send + Sync + 'static>,
	},
}

impl Config
{
	/// Default address the HTTP server listens on.
	pub const DEFAULT_LISTEN_ADDR: SocketAddr =
		SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 3000);

	/// Default upper bound for database connections.
	pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

	/// Default timeout for requests to the game panel.
	pub const DEFAULT_PANEL_TIMEOUT: Duration = Duration::from_secs(10);

	/// Initializes a [`Config`] by reading and parsing environment variables.
	pub fn new() -> Result<Self, InitializeConfigError>
	{
		let database_url = parse_from_env::<Url>("DATABASE_URL")?;
		let database_max_connections = parse_from_env_opt::<u32>("DATABASE_MAX_CONNECTIONS")?
			.unwrap_or(Self::DEFAULT_MAX_CONNECTIONS);

		let jwt_secret = parse_from_env::<String>("PANEL_JWT_SECRET")?;
		let panel_base_url = parse_from_env::<Url>("PTERO_BASE_URL")?;
		let panel_api_key = parse_from_env::<String>("PTERO_API_KEY")?;
		let panel_timeout = parse_from_env_opt::<u64>("PTERO_TIMEOUT_SECS")?
			.map_or(Self::DEFAULT_PANEL_TIMEOUT, Duration::from_secs);

		let listen_addr = parse_from_env_opt::<SocketAddr>("PANEL_LISTEN_ADDR")?
			.unwrap_or(Self::DEFAULT_LISTEN_ADDR);

		let log_json = parse_from_env_opt::<bool>("PANEL_LOG_JSON")?.unwrap_or(false);

		Ok(Self {
			inner: Arc::new(Inner {
				database_url,
				database_max_connections,
				jwt_secret,
				panel_base_url,
				panel_api_key,
				panel_timeout,
				listen_addr,
				log_json,
			}),
		})
	}

	/// Builds a [`Config`] from explicit values.
	///
	/// Everything not covered by the arguments uses its default.
	pub fn from_parts(
		database_url: Url,
		jwt_secret: impl Into<String>,
		panel_base_url: Url,
		panel_api_key: impl Into<String>,
	) -> Self
	{
		Self {
			inner: Arc::new(Inner {
				database_url,
				database_max_connections: Self::DEFAULT_MAX_CONNECTIONS,
				jwt_secret: jwt_secret.into(),
				panel_base_url,
				panel_api_key: panel_api_key.into(),
				panel_timeout: Self::DEFAULT_PANEL_TIMEOUT,
				listen_addr: Self::DEFAULT_LISTEN_ADDR,
				log_json: false,
			}),
		}
	}

	/// Returns the API's database URL.
	pub fn database_url(&self) -> &Url
	{
		&self.inner.database_url
	}

	/// Returns the maximum number of pooled database connections.
	pub fn database_max_connections(&self) -> u32
	{
		self.inner.database_max_connections
	}

	/// Returns the secret used to sign session tokens.
	pub fn jwt_secret(&self) -> &str
	{
		&self.inner.jwt_secret
	}

	/// Returns the base URL of the Pterodactyl panel.
	pub fn panel_base_url(&self) -> &Url
	{
		&self.inner.panel_base_url
	}

	/// Returns the client API key for the panel.
	pub fn panel_api_key(&self) -> &str
	{
		&self.inner.panel_api_key
	}

	/// Returns how long to wait for the panel before giving up.
	pub fn panel_timeout(&self) -> Duration
	{
		self.inner.panel_timeout
	}

	/// Returns the address the HTTP server should bind to.
	pub fn listen_addr(&self) -> SocketAddr
	{
		self.inner.listen_addr
	}

	/// Whether logs should be emitted as JSON.
	pub fn log_json(&self) -> bool
	{
		self.inner.log_json
	}
}

impl fmt::Debug for Config
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let mut database_url = self.database_url().clone();

		if database_url.password().is_some() {
			let _ = database_url.set_password(Some("*****"));
		}

		f.debug_struct("Config")
			.field("database_url", &format_args!("{:?}", database_url.as_str()))
			.field("database_max_connections", &self.database_max_connections())
			.field("jwt_secret", &"*****")
			.field("panel_base_url", &format_args!("{:?}", self.panel_base_url().as_str()))
			.field("panel_api_key", &"*****")
			.field("panel_timeout", &self.panel_timeout())
			.field("listen_addr", &self.listen_addr())
			.field("log_json", &self.log_json())
			.finish()
	}
}

#[allow(clippy::missing_docs_in_private_items)]
struct Inner
{
	/// The URL of the API's database.
	database_url: Url,

	/// Upper bound for the connection pool.
	database_max_connections: u32,

	/// Secret for signing and verifying session tokens.
	jwt_secret: String,

	/// Base URL of the Pterodactyl panel, e.g. `https://panel.example.com`.
	panel_base_url: Url,

	/// Client API key for the Pterodactyl panel.
	panel_api_key: String,

	panel_timeout: Duration,

	listen_addr: SocketAddr,

	log_json: bool,
}

/// Reads and parses an environment variable.
fn parse_from_env<T>(var: &'static str) -> Result<T, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	let value = env::var(var).map_err(|source| InitializeConfigError::Env { var, source })?;

	if value.is_empty() {
		return Err(InitializeConfigError::EmptyValue(var));
	}

	value
		.parse::<T>()
		.map_err(|error| InitializeConfigError::Parse { var, source: Box::new(error) })
}

/// Reads and parses an environment variable.
///
/// Returns [`None`] if a variable does not exist or is empty.
fn parse_from_env_opt<T>(var: &'static str) -> Result<Option<T>, InitializeConfigError>
where
	T: FromStr<Err: std::error::Error + Send + Sync + 'static>,
{
	let Some(value) = env::var(var).ok() else {
		return Ok(None);
	};

	if value.is_empty() {
		return Ok(None);
	}

	value
		.parse::<T>()
		.map(Some)
		.map_err(|error| InitializeConfigError::Parse { var, source: Box::new(error) })
}

//! A service for listing game servers and controlling their power state.
//!
//! This is a thin layer over the [`PanelClient`]: there is no local record
//! of servers.

use axum::extract::FromRef;

use crate::pagination::Page;
use crate::services::AuthService;
use crate::services::auth::{Role, Session};
use crate::services::panel::{GameServer, PanelClient, PowerSignal};

mod error;
pub use error::{Error, Result};

mod models;
pub use models::PowerRequest;

mod http;


/// A service for listing game servers and controlling their power state.
#[derive(Debug, Clone, FromRef)]
#[allow(clippy::missing_docs_in_private_items)]
pub struct ServerService
{
	panel: PanelClient,
	auth_svc: AuthService,
}

impl ServerService
{
	/// Create a new [`ServerService`].
	pub fn new(panel: PanelClient, auth_svc: AuthService) -> Self
	{
		Self { panel, auth_svc }
	}

	/// Fetch all game servers.
	///
	/// The panel is always asked for the full list, so the result is a single
	/// page.
	#[tracing::instrument(skip(self), err(level = "debug"))]
	pub async fn fetch_servers(&self) -> Result<Page<GameServer>>
	{
		let servers = self
			.panel
			.list_servers()
			.await
			.map_err(Error::FetchServers)?;

		Ok(Page::single(servers))
	}

	/// Send a power signal to a server.
	///
	/// Returns the signal that was sent.
	#[tracing::instrument(skip(self, session), fields(user.id = session.id), err(level = "debug"))]
	pub async fn send_power(
		&self,
		session: &Session,
		server_id: &str,
		req: PowerRequest,
	) -> Result<PowerSignal>
	{
		let signal = req
			.signal
			.parse::<PowerSignal>()
			.map_err(|_| Error::InvalidSignal)?;

		authorize_signal(session.role, signal)?;

		self.panel
			.send_power(server_id, signal)
			.await
			.map_err(Error::SendPower)?;

		tracing::info! {
			target: "cs2_panel_api::audit_log",
			user_id = session.id,
			%server_id,
			%signal,
			"sent power signal",
		};

		Ok(signal)
	}
}

/// Checks whether `role` may send `signal`.
///
/// Routes already restrict access to Administrators and Senior Moderators.
fn authorize_signal(role: Role, signal: PowerSignal) -> Result<()>
{
	match (role, signal) {
		(Role::Administrator, _) | (_, PowerSignal::Restart) => Ok(()),
		(Role::SeniorModerator | Role::Moderator, PowerSignal::Start | PowerSignal::Stop) => {
			Err(Error::RestartOnly)
		},
	}
}

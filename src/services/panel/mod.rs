//! A client for the game panel's (Pterodactyl) client API.
//!
//! The API does not keep any server records of its own; everything about game
//! servers is fetched from the panel on demand.

use derive_more::Debug;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Response};
use serde_json::json;
use url::Url;

use crate::runtime;

mod error;
pub use error::{Error, Result};

mod models;
pub use models::{GameServer, PowerSignal, UnknownSignal, location_for_node};
use models::{ErrorBody, ServerList};

/// Media type the panel's client API expects.
const ACCEPT: &str = "application/vnd.pterodactyl.v1+json";

/// A client for the game panel.
#[derive(Debug, Clone)]
pub struct PanelClient
{
	#[debug(skip)]
	http_client: reqwest::Client,

	#[debug("{:?}", base_url.as_str())]
	base_url: Url,
}

impl PanelClient
{
	/// Creates a new [`PanelClient`].
	///
	/// Every request carries the configured API key and times out after the
	/// configured duration.
	pub fn new(config: &runtime::Config) -> Result<Self>
	{
		let base_url = config.panel_base_url().clone();

		if base_url.cannot_be_a_base() {
			return Err(Error::BaseUrl(base_url));
		}

		let mut authorization = HeaderValue::try_from(format!("Bearer {}", config.panel_api_key()))
			.map_err(Error::ApiKey)?;

		authorization.set_sensitive(true);

		let mut headers = HeaderMap::new();

		headers.insert(header::AUTHORIZATION, authorization);
		headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));

		let http_client = reqwest::Client::builder()
			.timeout(config.panel_timeout())
			.default_headers(headers)
			.build()?;

		Ok(Self { http_client, base_url })
	}

	/// Fetches every server the API key has access to.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn list_servers(&self) -> Result<Vec<GameServer>>
	{
		let list = self.fetch_server_list().await?;

		Ok(list.data.into_iter().map(GameServer::from).collect())
	}

	/// Returns how many servers the API key has access to.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn server_count(&self) -> Result<u64>
	{
		let list = self.fetch_server_list().await?;

		Ok(list.meta.pagination.total)
	}

	/// Sends a power signal to a server.
	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub async fn send_power(&self, server_id: &str, signal: PowerSignal) -> Result<()>
	{
		let url = self.endpoint(&["api", "client", "servers", server_id, "power"]);
		let request = self
			.http_client
			.post(url)
			.json(&json!({ "signal": signal }));

		send(request).await?;

		Ok(())
	}

	async fn fetch_server_list(&self) -> Result<ServerList>
	{
		let url = self.endpoint(&["api", "client"]);
		let response = send(self.http_client.get(url)).await?;

		Ok(response.json::<ServerList>().await?)
	}

	/// Appends `segments` to the base URL, percent-encoding each of them.
	fn endpoint(&self, segments: &[&str]) -> Url
	{
		let mut url = self.base_url.clone();

		// checked in `new()`
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(segments);
		}

		url
	}
}

/// Sends a request, turning non-2xx responses into [`Error::Status`].
async fn send(request: RequestBuilder) -> Result<Response>
{
	let response = request.send().await?;
	let status = response.status();

	if status.is_success() {
		return Ok(response);
	}

	let body = response.text().await.unwrap_or_default();
	let detail = serde_json::from_str::<ErrorBody>(&body)
		.ok()
		.and_then(ErrorBody::into_detail);

	tracing::warn!(%status, ?detail, response_body = %body, "panel request failed");

	Err(Error::Status { status, detail })
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use axum::http::StatusCode;

	use super::*;
	use crate::testing;

	#[tokio::test]
	async fn lists_servers_from_mock_panel()
	{
		let panel = testing::MockPanel::spawn().await;
		let client = PanelClient::new(&testing::config(panel.url())).unwrap();

		let servers = client.list_servers().await.unwrap();

		assert_eq!(servers.len(), 2);
		assert_eq!(servers[0].location, "Europe");
		assert_eq!(servers[1].ip, "0.0.0.0");
		assert_eq!(client.server_count().await.unwrap(), 2);
	}

	#[tokio::test]
	async fn power_failure_carries_status_and_detail()
	{
		let panel = testing::MockPanel::spawn().await;
		let client = PanelClient::new(&testing::config(panel.url())).unwrap();

		client
			.send_power("running", PowerSignal::Restart)
			.await
			.unwrap();

		assert_eq!(panel.power_signals(), vec![(String::from("running"), String::from("restart"))]);

		let error = client
			.send_power(testing::MockPanel::INSTALLING, PowerSignal::Start)
			.await
			.unwrap_err();

		assert_eq!(error.status(), Some(StatusCode::CONFLICT));
		assert_eq!(error.detail(), Some(testing::MockPanel::INSTALLING_DETAIL));
	}

	#[tokio::test]
	async fn server_ids_are_a_single_path_segment()
	{
		let client = PanelClient::new(&testing::config("http://panel.test/sub/".parse().unwrap())).unwrap();
		let url = client.endpoint(&["api", "client", "servers", "a/../b?c", "power"]);

		assert_eq!(url.as_str(), "http://panel.test/sub/api/client/servers/a%2F..%2Fb%3Fc/power");
	}

	#[tokio::test]
	async fn unreachable_panel_has_no_status()
	{
		let client = PanelClient::new(&testing::config(testing::closed_port_url())).unwrap();
		let error = tokio::time::timeout(Duration::from_secs(15), client.list_servers())
			.await
			.unwrap()
			.unwrap_err();

		assert_eq!(error.status(), None);
	}
}

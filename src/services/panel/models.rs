//! Types for the game panel's client API, and what we turn them into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Game panel nodes and the region they are reported as.
const NODE_LOCATIONS: &[(&str, &str)] =
	&[("CS2-EMEA", "Europe"), ("CS2-APAC", "Asia"), ("CS2-NA", "America")];

/// Region for nodes that are not in [`NODE_LOCATIONS`].
const DEFAULT_LOCATION: &str = "Global";

/// Resolves a panel node name to a region.
pub fn location_for_node(node: &str) -> &'static str
{
	NODE_LOCATIONS
		.iter()
		.find(|&&(name, _)| name == node)
		.map_or(DEFAULT_LOCATION, |&(_, location)| location)
}

/// A game server, as shown in the panel's server list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameServer
{
	/// The panel's short identifier for the server.
	pub id: String,
	pub name: String,
	pub location: &'static str,
	pub ip: String,
	pub port: u16,
}

impl From<ServerObject> for GameServer
{
	fn from(ServerObject { attributes }: ServerObject) -> Self
	{
		let allocation = attributes
			.relationships
			.and_then(|relationships| relationships.allocations)
			.and_then(|allocations| allocations.data.into_iter().next())
			.map(|allocation| allocation.attributes);

		let (ip, port) = match allocation {
			Some(Allocation { ip, port }) if !ip.is_empty() => (ip, port),
			Some(Allocation { port, .. }) => (String::from("0.0.0.0"), port),
			None => (String::from("0.0.0.0"), 0),
		};

		Self {
			id: attributes.identifier,
			name: attributes.name,
			location: location_for_node(&attributes.node),
			ip,
			port,
		}
	}
}

/// A power action that can be sent to a game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerSignal
{
	Start,
	Stop,
	Restart,
}

impl PowerSignal
{
	pub const fn as_str(self) -> &'static str
	{
		match self {
			Self::Start => "start",
			Self::Stop => "stop",
			Self::Restart => "restart",
		}
	}
}

impl fmt::Display for PowerSignal
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.as_str())
	}
}

/// Error for parsing a string into a [`PowerSignal`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown power signal `{0}`")]
pub struct UnknownSignal(pub String);

impl FromStr for PowerSignal
{
	type Err = UnknownSignal;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"start" => Ok(Self::Start),
			"stop" => Ok(Self::Stop),
			"restart" => Ok(Self::Restart),
			_ => Err(UnknownSignal(value.to_owned())),
		}
	}
}

/// Response body of `GET /api/client`.
#[derive(Debug, Deserialize)]
pub(super) struct ServerList
{
	pub data: Vec<ServerObject>,
	pub meta: ListMeta,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListMeta
{
	pub pagination: ListPagination,
}

#[derive(Debug, Deserialize)]
pub(super) struct ListPagination
{
	pub total: u64,
}

#[derive(Debug, Deserialize)]
pub(super) struct ServerObject
{
	attributes: ServerAttributes,
}

#[derive(Debug, Deserialize)]
struct ServerAttributes
{
	identifier: String,
	name: String,

	#[serde(default)]
	node: String,

	#[serde(default)]
	relationships: Option<Relationships>,
}

#[derive(Debug, Deserialize)]
struct Relationships
{
	#[serde(default)]
	allocations: Option<AllocationList>,
}

#[derive(Debug, Deserialize)]
struct AllocationList
{
	#[serde(default)]
	data: Vec<AllocationObject>,
}

#[derive(Debug, Deserialize)]
struct AllocationObject
{
	attributes: Allocation,
}

#[derive(Debug, Deserialize)]
struct Allocation
{
	#[serde(default)]
	ip: String,

	#[serde(default)]
	port: u16,
}

/// Body of a failed panel response.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody
{
	#[serde(default)]
	errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject
{
	#[serde(default)]
	detail: Option<String>,
}

impl ErrorBody
{
	/// The first non-empty `detail` in the body.
	pub fn into_detail(self) -> Option<String>
	{
		self.errors
			.into_iter()
			.find_map(|error| error.detail.filter(|detail| !detail.is_empty()))
	}
}

#[cfg(test)]
mod tests
{
	use serde_json::json;

	use super::*;

	#[test]
	fn known_nodes_map_to_regions()
	{
		assert_eq!(location_for_node("CS2-EMEA"), "Europe");
		assert_eq!(location_for_node("CS2-APAC"), "Asia");
		assert_eq!(location_for_node("CS2-NA"), "America");
		assert_eq!(location_for_node("somewhere-else"), "Global");
		assert_eq!(location_for_node(""), "Global");
	}

	#[test]
	fn server_uses_first_allocation()
	{
		let object: ServerObject = serde_json::from_value(json!({
			"attributes": {
				"identifier": "1a7ce997",
				"name": "Surf #1",
				"node": "CS2-EMEA",
				"relationships": {
					"allocations": {
						"data": [
							{ "attributes": { "ip": "45.1.2.3", "port": 27015 } },
							{ "attributes": { "ip": "45.1.2.3", "port": 27020 } },
						],
					},
				},
			},
		}))
		.unwrap();

		assert_eq!(GameServer::from(object), GameServer {
			id: String::from("1a7ce997"),
			name: String::from("Surf #1"),
			location: "Europe",
			ip: String::from("45.1.2.3"),
			port: 27015,
		});
	}

	#[test]
	fn server_without_allocation_gets_defaults()
	{
		let object: ServerObject = serde_json::from_value(json!({
			"attributes": { "identifier": "abc", "name": "KZ", "node": "unknown" },
		}))
		.unwrap();

		let server = GameServer::from(object);

		assert_eq!(server.location, "Global");
		assert_eq!(server.ip, "0.0.0.0");
		assert_eq!(server.port, 0);
	}

	#[test]
	fn error_detail_is_first_non_empty_one()
	{
		let body: ErrorBody = serde_json::from_value(json!({
			"errors": [
				{ "code": "ConflictingServerStateException", "detail": "" },
				{ "code": "ConflictingServerStateException", "detail": "Server is installing." },
			],
		}))
		.unwrap();

		assert_eq!(body.into_detail().as_deref(), Some("Server is installing."));

		let body: ErrorBody = serde_json::from_value(json!({})).unwrap();

		assert_eq!(body.into_detail(), None);
	}

	#[test]
	fn signals_parse()
	{
		assert_eq!("restart".parse::<PowerSignal>(), Ok(PowerSignal::Restart));
		assert!("kill".parse::<PowerSignal>().is_err());
		assert!("Restart".parse::<PowerSignal>().is_err());
	}
}

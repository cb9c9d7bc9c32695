/*
 * CS2 Panel API - administration backend for CS2 game servers.
 * Copyright (C) 2024  The CS2 Panel API contributors
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

//! A role-gated HTTP API for managing CS2 servers: bans, VIP grants, panel
//! users and server power control.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, Pool};

#[macro_use]
mod macros;

pub mod setup;
pub mod runtime;

pub mod services;

mod middleware;
mod database;
pub mod pagination;
mod http;
mod serde;

#[cfg(test)]
mod testing;

/// Connects to the database and applies any outstanding migrations.
pub async fn connect_database(config: &runtime::Config) -> Result<Pool<MySql>, setup::Error>
{
	let database = MySqlPoolOptions::new()
		.min_connections(database::MIN_CONNECTIONS)
		.max_connections(config.database_max_connections())
		.connect(config.database_url().as_str())
		.await?;

	sqlx::migrate!("./database/migrations")
		.run(&database)
		.await?;

	Ok(database)
}

/// Create a server that will run the API.
pub async fn server(config: runtime::Config) -> Result<axum::Router, setup::Error>
{
	let database = connect_database(&config).await?;

	app(config, database)
}

/// Wires every service into a single [`axum::Router`].
///
/// The database pool is taken as-is; no connection is made here.
pub fn app(config: runtime::Config, database: Pool<MySql>) -> Result<axum::Router, setup::Error>
{
	use self::services::{
		AuthService,
		BanService,
		HealthService,
		PanelClient,
		ServerService,
		StatsService,
		UserService,
		VipService,
	};

	let panel = PanelClient::new(&config)?;

	let auth_svc = AuthService::new(&config, database.clone());
	let health_svc = HealthService::new();
	let ban_svc = BanService::new(database.clone(), auth_svc.clone());
	let user_svc = UserService::new(database.clone(), auth_svc.clone());
	let vip_svc = VipService::new(database.clone(), auth_svc.clone());
	let server_svc = ServerService::new(panel.clone(), auth_svc.clone());
	let stats_svc = StatsService::new(database, panel, auth_svc.clone());

	let api = axum::Router::new()
		.merge(axum::Router::from(auth_svc))
		.nest("/bans", ban_svc.into())
		.nest("/users", user_svc.into())
		.nest("/vips", vip_svc.into())
		.nest("/servers", server_svc.into())
		.nest("/stats", stats_svc.into());

	let server = axum::Router::new()
		.merge(axum::Router::from(health_svc))
		.nest("/api", api)
		.layer(middleware::panic_handler::layer())
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::trace::layer())
		.layer(middleware::request_id::set_layer());

	Ok(server)
}

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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cs2_panel_api::runtime::{self, Config};
use cs2_panel_api::services::auth::password;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// The main server entrypoint for the API.
#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	match Cli::parse().action.unwrap_or_default() {
		Action::Serve { env_file } => serve(env_file).await,
		Action::HashPassword { password } => {
			println!("{}", password::hash(password).await?);
			Ok(())
		},
	}
}

async fn serve(env_file: Option<PathBuf>) -> color_eyre::Result<()>
{
	if let Some(path) = env_file.as_deref() {
		dotenvy::from_filename(path).wrap_err("load custom `.env` file")?;
	} else if dotenvy::dotenv().is_err() {
		eprintln!("WARNING: no `.env` file found");
	}

	let config = Config::new().wrap_err("load config")?;

	init_logging(config.log_json());
	runtime::panic_hook::install();

	tracing::debug!(?config, "loaded config");

	let tcp_listener = TcpListener::bind(config.listen_addr()).await?;
	let server = cs2_panel_api::server(config).await?;

	tracing::info!("listening on {}", tcp_listener.local_addr()?);

	axum::serve(tcp_listener, server)
		.with_graceful_shutdown(runtime::signal::shutdown())
		.await?;

	tracing::info!("shut down");

	Ok(())
}

fn init_logging(json: bool)
{
	let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());

	if json {
		subscriber.json().init();
	} else {
		subscriber.pretty().init();
	}
}

/// CS2 Panel API
#[derive(Debug, Parser)]
struct Cli
{
	/// What you want to do
	#[command(subcommand)]
	action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action
{
	/// Serve the API
	Serve
	{
		/// Use a custom `.env` file.
		#[arg(long, name = "FILE")]
		env_file: Option<PathBuf>,
	},

	/// Hash a password with bcrypt, for seeding the Administrator account.
	HashPassword
	{
		password: String,
	},
}

impl Default for Action
{
	fn default() -> Self
	{
		Self::Serve { env_file: None }
	}
}

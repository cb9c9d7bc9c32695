//! Shutdown signals.

use std::error::Error;

use tokio::signal::ctrl_c;

/// Resolves once the OS asks us to shut down (SIGINT, or SIGTERM on unix).
pub async fn shutdown()
{
	tokio::select! {
		ctrl_c_result = ctrl_c() => match ctrl_c_result {
			Ok(()) => tracing::info!("received SIGINT"),
			Err(err) => {
				tracing::error!(error = &err as &dyn Error, "failed listening for SIGINT");
			},
		},

		() = terminate() => {},
	}
}

#[cfg(unix)]
async fn terminate()
{
	use tokio::signal::unix::{SignalKind, signal};

	match signal(SignalKind::terminate()) {
		Ok(mut signal) => match signal.recv().await {
			Some(()) => tracing::info!("received SIGTERM"),
			None => tracing::warn!("cannot receive more SIGTERM signals"),
		},
		Err(err) => {
			tracing::error!(error = &err as &dyn Error, "failed listening for SIGTERM");
			std::future::pending::<()>().await;
		},
	}
}

#[cfg(not(unix))]
async fn terminate()
{
	std::future::pending().await
}

//! A [`tower::Service`] that authenticates requests and checks their role.
//!
//! Wrap a route in [`AuthLayer`] to require a valid session token whose role
//! is in the given [`RoleSet`]. Rejected requests never reach the inner
//! service; they are answered with the appropriate `401` / `403` directly.

use std::task::{self, Poll};

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

use super::{AuthService, RoleSet};
use crate::runtime;

/// A layer producing the [`Authenticate`] middleware.
#[derive(Debug, Clone)]
pub struct AuthLayer
{
	/// For verifying tokens.
	auth_svc: AuthService,

	/// The roles allowed through.
	roles: RoleSet,
}

impl AuthLayer
{
	/// Creates a new [`AuthLayer`] admitting the given roles.
	pub fn new(auth_svc: AuthService, roles: RoleSet) -> Self
	{
		Self { auth_svc, roles }
	}
}

impl<S> tower::Layer<S> for AuthLayer
{
	type Service = Authenticate<S>;

	fn layer(&self, inner: S) -> Self::Service
	{
		Authenticate { auth_svc: self.auth_svc.clone(), roles: self.roles, inner }
	}
}

/// Middleware for authenticating and authorizing requests.
#[derive(Debug, Clone)]
pub struct Authenticate<S>
{
	/// For verifying tokens.
	auth_svc: AuthService,

	/// The roles allowed through.
	roles: RoleSet,

	/// The inner service.
	inner: S,
}

impl<S> tower::Service<Request> for Authenticate<S>
where
	S: tower::Service<Request, Response = Response> + Clone + Send + 'static,
	<S as tower::Service<Request>>::Future: Send,
{
	type Response = Response;
	type Error = S::Error;
	type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

	fn poll_ready(&mut self, cx: &mut task::Context<'_>) -> Poll<Result<(), Self::Error>>
	{
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, mut req: Request) -> Self::Future
	{
		let session = match self.auth_svc.authenticate(req.headers(), self.roles) {
			Ok(session) => session,
			Err(error) => {
				let response = runtime::Error::from(error).into_response();
				return Box::pin(async move { Ok(response) });
			},
		};

		tracing::debug!(session.id = session.id, session.role = %session.role, "authenticated request");

		req.extensions_mut().insert(session);

		let ready = self.inner.clone();
		let mut inner = std::mem::replace(&mut self.inner, ready);

		Box::pin(async move { inner.call(req).await })
	}
}

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::{Jwt, JwtState, Role};
use crate::testing::{self, body_json, request};

#[tokio::test]
async fn missing_token_is_unauthenticated()
{
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::GET, "/api/bans", None, None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert_eq!(body_json(response).await, json!({ "error": "Authentication required" }));
}

#[tokio::test]
async fn expired_token_has_its_own_code()
{
	let token = testing::expired_token(Role::Administrator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::GET, "/api/users", Some(&token), None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert_eq!(body_json(response).await["code"], "TOKEN_EXPIRED");
}

#[tokio::test]
async fn token_signed_with_another_secret_is_invalid()
{
	let token = JwtState::new("some other secret")
		.encode(&Jwt::new(testing::session(Role::Administrator)))
		.unwrap();

	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::GET, "/api/stats", Some(&token), None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert_eq!(body_json(response).await["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn garbage_token_is_invalid()
{
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::GET, "/api/stats", Some("definitely-not-a-jwt"), None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert_eq!(body_json(response).await["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn wrong_role_is_forbidden_not_unauthenticated()
{
	let token = testing::token(Role::Moderator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::GET, "/api/users", Some(&token), None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::FORBIDDEN);
	assert_eq!(body_json(response).await, json!({ "error": "Forbidden: Insufficient permissions" }));
}

#[tokio::test]
async fn logout_always_succeeds()
{
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::POST, "/api/logout", None, None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(body_json(response).await, json!({ "message": "Logged out successfully" }));
}

#[tokio::test]
async fn malformed_login_is_a_validation_error()
{
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::POST, "/api/login", None, Some(json!({ "username": "admin" }))))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);

	let error = body_json(response).await["error"].as_str().unwrap().to_owned();

	assert!(error.starts_with("Invalid request body"), "{error}");
}

#[tokio::test]
async fn login_without_database_is_a_server_error()
{
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(
			Method::POST,
			"/api/login",
			None,
			Some(json!({ "username": "admin", "password": "hunter2" })),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
	assert_eq!(
		body_json(response).await,
		json!({ "error": "database error; please report this incident" }),
	);
}

#[tokio::test]
async fn responses_carry_a_request_id()
{
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::POST, "/api/logout", None, None))
		.await
		.unwrap();

	assert!(response.headers().contains_key("x-request-id"));
}

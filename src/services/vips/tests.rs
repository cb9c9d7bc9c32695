use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::{MySql, Pool};
use tower::ServiceExt;

use crate::services::auth::Role;
use crate::testing::{self, body_json, request};

#[tokio::test]
async fn only_administrators_manage_vips()
{
	let token = testing::token(Role::SeniorModerator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(Method::GET, "/api/vips", Some(&token), None))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn invalid_group_is_rejected()
{
	let token = testing::token(Role::Administrator);

	for method in [Method::POST, Method::PUT] {
		let uri = if method == Method::POST { "/api/vips" } else { "/api/vips/3" };
		let response = testing::app(testing::closed_port_url())
			.oneshot(request(
				method,
				uri,
				Some(&token),
				Some(json!({
					"steamid64": "76561198282622073",
					"group_name": "MVP",
					"name": "AlphaKeks",
				})),
			))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		assert_eq!(body_json(response).await, json!({ "error": "Invalid group. Must be VIP or SVIP." }));
	}
}

#[tokio::test]
async fn invalid_steamid_is_rejected()
{
	let token = testing::token(Role::Administrator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(
			Method::POST,
			"/api/vips",
			Some(&token),
			Some(json!({ "steamid64": "not a number", "group_name": "VIP", "name": "AlphaKeks" })),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn valid_grant_reaches_database()
{
	let token = testing::token(Role::Administrator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(
			Method::POST,
			"/api/vips",
			Some(&token),
			Some(json!({ "steamid64": 76561198282622073_u64, "group_name": "SVIP", "name": "AlphaKeks" })),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn negative_expiry_is_rejected()
{
	let token = testing::token(Role::Administrator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(
			Method::POST,
			"/api/vips",
			Some(&token),
			Some(json!({
				"steamid64": "76561198282622073",
				"group_name": "VIP",
				"name": "AlphaKeks",
				"expires": -5,
			})),
		))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
	assert_eq!(
		body_json(response).await,
		json!({ "error": "`expires` must be a unix timestamp, or 0 for a permanent grant" }),
	);
}

#[tokio::test]
async fn string_expiry_is_accepted()
{
	let token = testing::token(Role::Administrator);
	let response = testing::app(testing::closed_port_url())
		.oneshot(request(
			Method::PUT,
			"/api/vips/3",
			Some(&token),
			Some(json!({
				"steamid64": "76561198282622073",
				"group_name": "VIP",
				"name": "AlphaKeks",
				"expires": "1700000000",
			})),
		))
		.await
		.unwrap();

	// parsing succeeded, so the request gets as far as the (unreachable) database
	assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[sqlx::test(migrations = "./database/migrations")]
#[ignore = "needs a MySQL server at DATABASE_URL"]
async fn one_grant_per_steamid(database: Pool<MySql>)
{
	let token = testing::token(Role::Administrator);
	let app = testing::app_with_database(database);
	let grant = json!({
		"steamid64": "76561198282622073",
		"group_name": "VIP",
		"name": "AlphaKeks",
		"expires": "1700000000",
	});

	let first = app
		.clone()
		.oneshot(request(Method::POST, "/api/vips", Some(&token), Some(grant.clone())))
		.await
		.unwrap();

	assert_eq!(first.status(), StatusCode::CREATED);

	let vip_id = body_json(first).await["id"].as_i64().unwrap();

	let second = app
		.clone()
		.oneshot(request(Method::POST, "/api/vips", Some(&token), Some(grant)))
		.await
		.unwrap();

	assert_eq!(second.status(), StatusCode::BAD_REQUEST);
	assert_eq!(body_json(second).await, json!({ "error": "This SteamID is already assigned a group" }));

	let vip = app
		.oneshot(request(Method::GET, &format!("/api/vips/{vip_id}"), Some(&token), None))
		.await
		.unwrap();

	let vip = body_json(vip).await;

	assert_eq!(vip["steamid64"], "76561198282622073");
	assert_eq!(vip["group_name"], "VIP");
	assert_eq!(vip["expires"], 1_700_000_000_i64);
}

#[sqlx::test(migrations = "./database/migrations")]
#[ignore = "needs a MySQL server at DATABASE_URL"]
async fn missing_grants_are_not_found(database: Pool<MySql>)
{
	let token = testing::token(Role::Administrator);
	let app = testing::app_with_database(database);

	let update = app
		.clone()
		.oneshot(request(
			Method::PUT,
			"/api/vips/4242",
			Some(&token),
			Some(json!({ "steamid64": "76561198282622073", "group_name": "SVIP", "name": "AlphaKeks" })),
		))
		.await
		.unwrap();

	assert_eq!(update.status(), StatusCode::NOT_FOUND);

	let delete = app
		.oneshot(request(Method::DELETE, "/api/vips/4242", Some(&token), None))
		.await
		.unwrap();

	assert_eq!(delete.status(), StatusCode::NOT_FOUND);
	assert_eq!(body_json(delete).await, json!({ "error": "VIP record not found" }));
}

#[sqlx::test(migrations = "./database/migrations")]
#[ignore = "needs a MySQL server at DATABASE_URL"]
async fn search_matches_steamid_and_name(database: Pool<MySql>)
{
	let token = testing::token(Role::Administrator);
	let app = testing::app_with_database(database);

	for (steamid64, name) in [("76561198000000001", "alice"), ("76561198000000002", "bob")] {
		let response = app
			.clone()
			.oneshot(request(
				Method::POST,
				"/api/vips",
				Some(&token),
				Some(json!({ "steamid64": steamid64, "group_name": "SVIP", "name": name })),
			))
			.await
			.unwrap();

		assert_eq!(response.status(), StatusCode::CREATED);
	}

	for search in ["00000002", "BOB"] {
		let response = app
			.clone()
			.oneshot(request(Method::GET, &format!("/api/vips?search={search}"), Some(&token), None))
			.await
			.unwrap();

		let page = body_json(response).await;

		assert_eq!(page["totalItems"], 1, "{search}");
		assert_eq!(page["items"][0]["name"], "bob", "{search}");
	}
}

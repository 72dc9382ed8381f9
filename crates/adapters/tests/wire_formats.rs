//! Adapter wire-format tests against fake upstream providers.
//!
//! Each test spawns a small axum server playing the role of the external
//! provider, points a real adapter at it, and checks the adapter's
//! request shape and failure handling. Everything expected to go wrong
//! must come back as a quiet `Ok(None)`, never an error.

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use quotd_adapters::{FavqsAdapter, ForismaticAdapter};
use quotd_types::{Provider, QuoteAdapter, UNKNOWN_AUTHOR};
use serde_json::json;

async fn spawn_upstream(router: Router) -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		let _ = axum::serve(listener, router).await;
	});
	format!("http://{}", addr)
}

fn forismatic_provider(base_url: &str) -> Provider {
	Provider::new("Forismatic", ForismaticAdapter::ID, format!("{}/api/1.0/", base_url))
		.with_timeout_ms(1_000)
}

fn favqs_provider(base_url: &str) -> Provider {
	Provider::new("FavQs", FavqsAdapter::ID, format!("{}/api/qotd", base_url))
		.with_timeout_ms(1_000)
}

/// Upstream that checks the Forismatic query contract before answering.
fn forismatic_upstream(payload: serde_json::Value) -> Router {
	Router::new().route(
		"/api/1.0/",
		get(
			move |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| async move {
				if params.get("method").map(String::as_str) != Some("getQuote")
					|| params.get("format").map(String::as_str) != Some("json")
					|| params.get("lang").map(String::as_str) != Some("ru")
				{
					return StatusCode::BAD_REQUEST.into_response();
				}
				let user_agent = headers
					.get("user-agent")
					.and_then(|v| v.to_str().ok())
					.unwrap_or_default();
				if !user_agent.starts_with("Mozilla/5.0") {
					return StatusCode::BAD_REQUEST.into_response();
				}
				Json(payload.clone()).into_response()
			},
		),
	)
}

#[tokio::test]
async fn forismatic_normalizes_payload() {
	let base_url = spawn_upstream(forismatic_upstream(json!({
		"quoteText": "  Stay hungry  ",
		"quoteAuthor": "  A. Person  "
	})))
	.await;

	let adapter = ForismaticAdapter::new().unwrap();
	let quote = adapter
		.fetch_quote(&forismatic_provider(&base_url))
		.await
		.unwrap()
		.expect("quote expected");

	assert_eq!(quote.text, "Stay hungry");
	assert_eq!(quote.author, "A. Person");
	assert_eq!(quote.source, "Forismatic");
}

#[tokio::test]
async fn forismatic_defaults_blank_author() {
	let base_url = spawn_upstream(forismatic_upstream(json!({
		"quoteText": "X",
		"quoteAuthor": ""
	})))
	.await;

	let adapter = ForismaticAdapter::new().unwrap();
	let quote = adapter
		.fetch_quote(&forismatic_provider(&base_url))
		.await
		.unwrap()
		.expect("quote expected");

	assert_eq!(quote.text, "X");
	assert_eq!(quote.author, UNKNOWN_AUTHOR);
}

#[tokio::test]
async fn forismatic_rejects_blank_text() {
	let base_url = spawn_upstream(forismatic_upstream(json!({
		"quoteText": "   ",
		"quoteAuthor": "Y"
	})))
	.await;

	let adapter = ForismaticAdapter::new().unwrap();
	let result = adapter
		.fetch_quote(&forismatic_provider(&base_url))
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn forismatic_treats_missing_keys_as_absence() {
	let base_url = spawn_upstream(forismatic_upstream(json!({}))).await;

	let adapter = ForismaticAdapter::new().unwrap();
	let result = adapter
		.fetch_quote(&forismatic_provider(&base_url))
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn forismatic_treats_error_status_as_absence() {
	let app = Router::new().route(
		"/api/1.0/",
		get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
	);
	let base_url = spawn_upstream(app).await;

	let adapter = ForismaticAdapter::new().unwrap();
	let result = adapter
		.fetch_quote(&forismatic_provider(&base_url))
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn forismatic_treats_malformed_body_as_absence() {
	let app = Router::new().route("/api/1.0/", get(|| async { "certainly not json" }));
	let base_url = spawn_upstream(app).await;

	let adapter = ForismaticAdapter::new().unwrap();
	let result = adapter
		.fetch_quote(&forismatic_provider(&base_url))
		.await
		.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn forismatic_treats_timeout_as_absence() {
	let app = Router::new().route(
		"/api/1.0/",
		get(|| async {
			tokio::time::sleep(tokio::time::Duration::from_millis(500)).await;
			Json(json!({"quoteText": "too late", "quoteAuthor": ""}))
		}),
	);
	let base_url = spawn_upstream(app).await;

	let provider = forismatic_provider(&base_url).with_timeout_ms(50);
	let adapter = ForismaticAdapter::new().unwrap();
	let result = adapter.fetch_quote(&provider).await.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn favqs_normalizes_nested_payload() {
	let app = Router::new().route(
		"/api/qotd",
		get(|headers: HeaderMap| async move {
			let accept = headers
				.get("accept")
				.and_then(|v| v.to_str().ok())
				.unwrap_or_default();
			if accept != "application/json" {
				return StatusCode::BAD_REQUEST.into_response();
			}
			Json(json!({
				"qotd_date": "2020-01-01",
				"quote": {"id": 42, "body": "Carpe diem", "author": "Horace"}
			}))
			.into_response()
		}),
	);
	let base_url = spawn_upstream(app).await;

	let adapter = FavqsAdapter::new().unwrap();
	let quote = adapter
		.fetch_quote(&favqs_provider(&base_url))
		.await
		.unwrap()
		.expect("quote expected");

	assert_eq!(quote.text, "Carpe diem");
	assert_eq!(quote.author, "Horace");
	assert_eq!(quote.source, "FavQs");
}

#[tokio::test]
async fn favqs_defaults_blank_author() {
	let app = Router::new().route(
		"/api/qotd",
		get(|| async { Json(json!({"quote": {"body": "Carpe diem", "author": ""}})) }),
	);
	let base_url = spawn_upstream(app).await;

	let adapter = FavqsAdapter::new().unwrap();
	let quote = adapter
		.fetch_quote(&favqs_provider(&base_url))
		.await
		.unwrap()
		.expect("quote expected");

	assert_eq!(quote.text, "Carpe diem");
	assert_eq!(quote.author, UNKNOWN_AUTHOR);
	assert_eq!(quote.source, "FavQs");
}

#[tokio::test]
async fn favqs_treats_missing_quote_object_as_absence() {
	let app = Router::new().route("/api/qotd", get(|| async { Json(json!({})) }));
	let base_url = spawn_upstream(app).await;

	let adapter = FavqsAdapter::new().unwrap();
	let result = adapter.fetch_quote(&favqs_provider(&base_url)).await.unwrap();

	assert!(result.is_none());
}

#[tokio::test]
async fn favqs_treats_connection_refusal_as_absence() {
	// Nothing is listening on this port.
	let provider = Provider::new("FavQs", FavqsAdapter::ID, "http://127.0.0.1:1/api/qotd")
		.with_timeout_ms(1_000);

	let adapter = FavqsAdapter::new().unwrap();
	let result = adapter.fetch_quote(&provider).await.unwrap();

	assert!(result.is_none());
}

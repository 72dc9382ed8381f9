use axum::{
	extract::State,
	http::StatusCode,
	response::{Html, Json},
};
use serde::Serialize;
use tracing::info;

use crate::page;
use crate::state::AppState;

/// JSON body returned by `/refresh` on success.
#[derive(Debug, Serialize)]
pub struct RefreshSuccess {
	pub success: bool,
	pub quote: String,
	pub author: String,
	pub source: String,
}

/// JSON body returned by `/refresh` when no provider yielded a quote.
#[derive(Debug, Serialize)]
pub struct RefreshFailure {
	pub success: bool,
	pub error: String,
}

/// GET / - render the quote page
///
/// The page is always usable: on total resolution failure it shows the
/// error message where the quote would be.
pub async fn index(State(state): State<AppState>) -> Html<String> {
	let outcome = state.resolver.resolve().await;
	Html(page::render_index(&outcome))
}

/// GET /refresh - fetch a fresh quote for the page's refresh control
pub async fn refresh(
	State(state): State<AppState>,
) -> Result<Json<RefreshSuccess>, (StatusCode, Json<RefreshFailure>)> {
	match state.resolver.resolve().await {
		Ok(quote) => {
			info!("refresh served a quote from {}", quote.source);
			Ok(Json(RefreshSuccess {
				success: true,
				quote: quote.text,
				author: quote.author,
				source: quote.source,
			}))
		},
		Err(err) => Err((
			StatusCode::INTERNAL_SERVER_ERROR,
			Json(RefreshFailure {
				success: false,
				error: err.to_string(),
			}),
		)),
	}
}

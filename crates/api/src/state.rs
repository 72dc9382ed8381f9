use std::sync::Arc;

use quotd_service::QuoteResolver;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub resolver: Arc<QuoteResolver>,
}

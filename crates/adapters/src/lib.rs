//! Provider adapters for the quotd quote server.
//!
//! One adapter per external quote provider, each translating that
//! provider's wire format into the normalized [`Quote`] shape, plus the
//! [`ProviderRegistry`] that maps provider descriptors to adapters.
//!
//! [`Quote`]: quotd_types::Quote

pub mod favqs;
pub mod forismatic;
pub mod registry;

pub use favqs::FavqsAdapter;
pub use forismatic::ForismaticAdapter;
pub use registry::ProviderRegistry;

use quotd_types::AdapterError;
use tracing::{error, warn};

/// Browser-like identifier sent with every provider request; some
/// providers reject default HTTP client user agents.
pub(crate) const BROWSER_USER_AGENT: &str =
	"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Log an expected fetch failure before it is collapsed to "no result".
///
/// Timeouts and bad statuses are routine enough for `warn`; transport
/// and payload problems get `error` so they stand out when a provider
/// changes its format under us.
pub(crate) fn log_fetch_failure(provider: &str, err: &AdapterError) {
	match err {
		AdapterError::Http(source) if source.is_timeout() => {
			warn!("{}: request timed out", provider);
		},
		AdapterError::Http(source) => {
			error!("{}: request failed: {}", provider, source);
		},
		AdapterError::HttpStatus { status } => {
			warn!("{}: provider returned HTTP {}", provider, status);
		},
		AdapterError::InvalidResponse { reason } => {
			error!("{}: {}", provider, reason);
		},
	}
}

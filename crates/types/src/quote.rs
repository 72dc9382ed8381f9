//! The normalized quote entity.

use serde::Serialize;

/// Attribution used when a provider returns a quote without an author.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// A quote normalized from any provider's wire format.
///
/// `text` is never empty: construction goes through [`Quote::from_raw`],
/// which refuses blank text instead of producing a hollow quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
	/// Quote body, whitespace-trimmed.
	pub text: String,
	/// Author, whitespace-trimmed; [`UNKNOWN_AUTHOR`] when the provider
	/// left it blank.
	pub author: String,
	/// Display name of the provider that produced the quote.
	pub source: String,
}

impl Quote {
	/// Normalize raw provider fields into a quote.
	///
	/// Returns `None` when the text is blank after trimming; an author
	/// alone is not a quote.
	pub fn from_raw(text: &str, author: &str, source: &str) -> Option<Self> {
		let text = text.trim();
		if text.is_empty() {
			return None;
		}

		let author = author.trim();
		let author = if author.is_empty() { UNKNOWN_AUTHOR } else { author };

		Some(Self {
			text: text.to_string(),
			author: author.to_string(),
			source: source.to_string(),
		})
	}
}

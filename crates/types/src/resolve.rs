//! Resolution failure type.

use thiserror::Error;

/// Failure outcome of one top-level resolution attempt.
///
/// Returned when every provider was tried without producing a quote.
/// The message carries the recorded per-provider faults only; providers
/// that merely had nothing to offer leave no trace here.
#[derive(Debug, Error)]
pub enum ResolveError {
	#[error("could not obtain a quote from any provider{}", fault_detail(.errors))]
	Exhausted { errors: Vec<String> },
}

impl ResolveError {
	/// Recorded `"provider: error"` entries, in the order they occurred.
	pub fn errors(&self) -> &[String] {
		match self {
			Self::Exhausted { errors } => errors,
		}
	}
}

fn fault_detail(errors: &[String]) -> String {
	if errors.is_empty() {
		String::new()
	} else {
		format!(". Errors: {}", errors.join("; "))
	}
}

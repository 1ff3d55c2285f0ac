//! Error kinds surfaced by the explorer core and its fetch adapter.

use thiserror::Error;

/// Failures raised while loading datasets, navigating years or mutating
/// the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
	/// Network failure or a non-2xx response.
	#[error("failed to fetch {url}: {reason}")]
	FetchFailure {
		/// Requested resource.
		url: String,
		/// Transport error or HTTP status line.
		reason: String,
	},
	/// Body could not be decoded, or decoded into an invalid dataset.
	#[error("malformed data: {0}")]
	ParseFailure(String),
	/// Navigation outside the configured year list.
	#[error("unknown year {0:?}")]
	UnknownYear(String),
	/// Mutation addressed a node absent from the current store.
	#[error("node {0:?} not found in the current graph")]
	NotFound(String),
	/// Party lookup against a table that never registered it.
	#[error("party {0:?} has no color in the current dataset")]
	UnknownParty(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VizError>;

impl From<serde_json::Error> for VizError {
	fn from(err: serde_json::Error) -> Self {
		Self::ParseFailure(err.to_string())
	}
}

//! Leptos adapters around the explorer core.

pub mod community_filter;
pub mod force_graph;
pub mod notice;
pub mod party_controls;
pub mod reset_button;
pub mod search_bar;
pub mod speech_modal;
pub mod year_slider;

use log::error;

use crate::error::Result;

/// Filter failures mean a stale node id reached a fresh store; log them,
/// the UI keeps running.
pub(crate) fn log_failure(action: &str, result: Result<()>) {
	if let Err(err) = result {
		error!("{action} failed: {err}");
	}
}

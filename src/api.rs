//! HTTP GETs for snapshots and speeches.

use gloo_net::http::Request;

use crate::error::{Result, VizError};
use crate::session::{Dataset, SpeechFile, SpeechIndex};

/// Body of a 2xx response; anything else is a [`VizError::FetchFailure`].
async fn fetch_text(url: &str) -> Result<String> {
	let failure = |reason: String| VizError::FetchFailure {
		url: url.to_string(),
		reason,
	};
	let response = Request::get(url)
		.send()
		.await
		.map_err(|e| failure(e.to_string()))?;
	if !response.ok() {
		return Err(failure(format!(
			"HTTP {} {}",
			response.status(),
			response.status_text()
		)));
	}
	response.text().await.map_err(|e| failure(e.to_string()))
}

/// `{year}.json` snapshot.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
	Dataset::from_json(&fetch_text(url).await?)
}

/// Name to speech file mapping, fetched once at startup.
pub async fn fetch_speech_index(url: &str) -> Result<SpeechIndex> {
	SpeechIndex::from_json(&fetch_text(url).await?)
}

/// One politician's speeches.
pub async fn fetch_speeches(url: &str) -> Result<SpeechFile> {
	SpeechFile::from_json(&fetch_text(url).await?)
}

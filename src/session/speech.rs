//! Speech index and per-politician speech files.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Uppercased politician name → speech file name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeechIndex(HashMap<String, String>);

impl SpeechIndex {
	/// Decodes `mapeamento_discursos.json`.
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	/// Looks a node label up the way the index is keyed.
	pub fn file_for(&self, label: &str) -> Option<&str> {
		self.0.get(&label.to_uppercase()).map(String::as_str)
	}

	/// Number of mapped names.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// True when the index failed to load or is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(String, String)> for SpeechIndex {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// One speech from the chamber's records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speech {
	/// Start timestamp, ISO 8601.
	#[serde(default)]
	pub data_hora_inicio: Option<String>,
	/// Kind of speech, as published.
	#[serde(default)]
	pub tipo_discurso: Option<String>,
	/// Summary text.
	#[serde(default)]
	pub sumario: Option<String>,
	/// Link to the full transcript.
	#[serde(default)]
	pub url_texto: Option<String>,
}

impl Speech {
	/// Start date as `dd/mm/yyyy`.
	pub fn formatted_date(&self) -> Option<String> {
		let raw = self.data_hora_inicio.as_deref()?.trim();
		let date = DateTime::parse_from_rfc3339(raw)
			.map(|dt| dt.date_naive())
			.or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
			.or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
			.or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
			.ok()?;
		Some(date.format("%d/%m/%Y").to_string())
	}

	/// Speech kind; blank counts as missing.
	pub fn kind(&self) -> Option<&str> {
		non_empty(&self.tipo_discurso)
	}

	/// Summary; blank counts as missing.
	pub fn summary(&self) -> Option<&str> {
		non_empty(&self.sumario)
	}
}

fn non_empty(field: &Option<String>) -> Option<&str> {
	field.as_deref().filter(|s| !s.is_empty())
}

/// Body of `discursos/{file}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechFile {
	/// Speeches as published, possibly empty.
	#[serde(default)]
	pub discursos: Vec<Speech>,
}

impl SpeechFile {
	/// Decodes a speech file body.
	pub fn from_json(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn index_lookup_uppercases_the_label() {
		let index = SpeechIndex::from_json(r#"{"ANA SOUZA": "ana_souza.json"}"#).unwrap();
		assert_eq!(index.file_for("Ana Souza"), Some("ana_souza.json"));
		assert_eq!(index.file_for("Beto"), None);
	}

	#[test]
	fn speech_file_parses_camel_case_fields() {
		let text = r#"{"discursos": [{
			"dataHoraInicio": "2019-03-12T14:05",
			"tipoDiscurso": "BREVES COMUNICAÇÕES",
			"sumario": "Defesa da reforma.",
			"urlTexto": "https://example.org/texto"
		}, {"sumario": null}]}"#;
		let file = SpeechFile::from_json(text).unwrap();
		assert_eq!(file.discursos.len(), 2);
		assert_eq!(file.discursos[0].formatted_date().as_deref(), Some("12/03/2019"));
		assert_eq!(file.discursos[1].formatted_date(), None);
		assert_eq!(file.discursos[1].url_texto, None);
	}

	#[test]
	fn dates_accept_several_layouts() {
		let speech = |raw: &str| Speech {
			data_hora_inicio: Some(raw.into()),
			tipo_discurso: None,
			sumario: None,
			url_texto: None,
		};
		assert_eq!(speech("2020-01-02").formatted_date().as_deref(), Some("02/01/2020"));
		assert_eq!(speech("2020-01-02T10:00:00").formatted_date().as_deref(), Some("02/01/2020"));
		assert_eq!(speech("2020-01-02T10:00:00-03:00").formatted_date().as_deref(), Some("02/01/2020"));
		assert_eq!(speech("ontem").formatted_date(), None);
	}

	#[test]
	fn blank_kind_and_summary_count_as_missing() {
		let file = SpeechFile::from_json(
			r#"{"discursos": [{"tipoDiscurso": "", "sumario": ""}, {"tipoDiscurso": "PEQUENO EXPEDIENTE"}]}"#,
		)
		.unwrap();
		assert_eq!(file.discursos[0].kind(), None);
		assert_eq!(file.discursos[0].summary(), None);
		assert_eq!(file.discursos[1].kind(), Some("PEQUENO EXPEDIENTE"));
		assert_eq!(file.discursos[1].summary(), None);
	}
}

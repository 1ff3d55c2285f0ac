//! Selected-year cursor over the published years.

use log::warn;

use crate::config::DEFAULT_YEARS;
use crate::error::{Result, VizError};

/// Index into the configured years; always points at a valid year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearCursor {
	years: Vec<String>,
	index: usize,
}

impl YearCursor {
	/// Starts at the first year. An empty list falls back to
	/// [`DEFAULT_YEARS`].
	pub fn new(years: Vec<String>) -> Self {
		if years.is_empty() {
			warn!("no years configured, using the published range");
			return Self::new(DEFAULT_YEARS.iter().map(|y| y.to_string()).collect());
		}
		Self { years, index: 0 }
	}

	/// The navigable years, oldest first.
	pub fn years(&self) -> &[String] {
		&self.years
	}

	/// Position of the selected year.
	pub fn index(&self) -> usize {
		self.index
	}

	/// The selected year.
	pub fn current(&self) -> &str {
		&self.years[self.index]
	}

	/// Direct entry: rejects anything outside the list and keeps the cursor.
	pub fn select(&mut self, year: &str) -> Result<&str> {
		let index = self
			.years
			.iter()
			.position(|y| y == year.trim())
			.ok_or_else(|| VizError::UnknownYear(year.to_string()))?;
		self.index = index;
		Ok(self.current())
	}

	/// Slider position.
	pub fn select_index(&mut self, index: usize) -> Result<&str> {
		if index >= self.years.len() {
			return Err(VizError::UnknownYear(format!("#{index}")));
		}
		self.index = index;
		Ok(self.current())
	}

	/// Prev/next. Stepping past either end leaves the cursor where it is.
	pub fn step(&mut self, delta: isize) -> Option<&str> {
		let next = self.index.checked_add_signed(delta)?;
		if next >= self.years.len() {
			return None;
		}
		self.index = next;
		Some(self.current())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::ViewerConfig;

	fn cursor() -> YearCursor {
		YearCursor::new(ViewerConfig::default().years)
	}

	#[test]
	fn starts_at_first_year() {
		assert_eq!(cursor().current(), "2017");
	}

	#[test]
	fn out_of_range_entry_keeps_cursor() {
		let mut cursor = cursor();
		cursor.select("2019").unwrap();
		assert_eq!(cursor.select("2031"), Err(VizError::UnknownYear("2031".into())));
		assert_eq!(cursor.select("abc"), Err(VizError::UnknownYear("abc".into())));
		assert_eq!(cursor.current(), "2019");
		assert!(cursor.select_index(8).is_err());
		assert_eq!(cursor.select_index(7).unwrap(), "2024");
	}

	#[test]
	fn stepping_stops_at_the_edges() {
		let mut cursor = cursor();
		assert_eq!(cursor.step(-1), None);
		assert_eq!(cursor.step(1), Some("2018"));
		cursor.select("2024").unwrap();
		assert_eq!(cursor.step(1), None);
		assert_eq!(cursor.current(), "2024");
	}

	#[test]
	fn empty_year_list_falls_back_to_published_years() {
		let cursor = YearCursor::new(Vec::new());
		assert_eq!(cursor.years().len(), DEFAULT_YEARS.len());
	}
}

//! Deployment settings: year domain, resource layout, node sizing and the
//! force simulation parameters handed to `force_graph`.

use force_graph::SimulationParameters;

/// Years published by the deployment, in navigation order.
pub const DEFAULT_YEARS: &[&str] = &[
	"2017", "2018", "2019", "2020", "2021", "2022", "2023", "2024",
];

/// Tunables for the force layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Node repulsion.
	pub force_charge: f32,
	/// Edge attraction.
	pub force_spring: f32,
	/// Cap on the force applied per step.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity kept between steps.
	pub damping_factor: f32,
	/// Simulation steps run right after a load, before the first frame.
	pub warmup_ticks: usize,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			warmup_ticks: 300,
		}
	}
}

impl LayoutConfig {
	/// Parameters in the shape `force_graph` expects.
	pub fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Everything the explorer needs to know about where data lives and how
/// nodes are sized.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
	/// Navigable years, oldest first.
	pub years: Vec<String>,
	/// Prefix for yearly snapshots, `{data_root}{year}.json`.
	pub data_root: String,
	/// Name to speech file mapping.
	pub speech_index_url: String,
	/// Prefix for per-politician speech files.
	pub speech_root: String,
	/// Size of every node after a load.
	pub base_node_size: f64,
	/// Size of the best search match.
	pub highlight_node_size: f64,
	/// Scatter half-width for initial positions.
	pub initial_spread: f32,
	/// Force simulation tunables.
	pub layout: LayoutConfig,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			years: DEFAULT_YEARS.iter().map(|y| y.to_string()).collect(),
			data_root: "/public/".into(),
			speech_index_url: "/public/mapeamento_discursos.json".into(),
			speech_root: "/public/discursos/".into(),
			base_node_size: 4.0,
			highlight_node_size: 10.0,
			initial_spread: 2500.0,
			layout: LayoutConfig::default(),
		}
	}
}

impl ViewerConfig {
	/// URL of a year's snapshot.
	pub fn dataset_url(&self, year: &str) -> String {
		format!("{}{}.json", self.data_root, year)
	}

	/// URL of a speech file named by the index.
	pub fn speech_url(&self, file_name: &str) -> String {
		format!("{}{}", self.speech_root, file_name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_urls_point_into_the_copied_public_dir() {
		let config = ViewerConfig::default();
		assert_eq!(config.dataset_url("2019"), "/public/2019.json");
		assert_eq!(config.speech_index_url, "/public/mapeamento_discursos.json");
		assert_eq!(config.speech_url("joao.json"), "/public/discursos/joao.json");
		assert_eq!(config.years.first().map(String::as_str), Some("2017"));
		assert_eq!(config.years.last().map(String::as_str), Some("2024"));
	}
}

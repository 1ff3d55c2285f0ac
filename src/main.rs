//! Binary entry point: installs logging and mounts the explorer app.

use covote_graph::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App)
}

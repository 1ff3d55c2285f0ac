//! Force-directed canvas for the active session: per-session layout state,
//! the frame painter and the Leptos component wiring them to the DOM.

mod component;
mod render;
mod state;

pub use component::ForceGraphCanvas;

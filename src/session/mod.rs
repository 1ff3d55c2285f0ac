//! Host-independent explorer core: graph store, filters and the controller
//! that sequences dataset loads.

pub mod community;
pub mod dataset;
pub mod explorer;
pub mod palette;
pub mod party;
pub mod search;
pub mod speech;
pub mod store;
pub mod years;

pub use community::CommunityFilter;
pub use dataset::{Dataset, LinkRecord, NodeRecord};
pub use explorer::{Explorer, LoadOutcome, LoadTicket, Session};
pub use palette::{Color, PartyColorTable, community_color};
pub use party::PartyOverlay;
pub use search::SearchFilter;
pub use speech::{Speech, SpeechFile, SpeechIndex};
pub use store::{DrawPriority, GraphEdge, GraphNode, GraphStore, NodeAttributes, RenderAttributes};
pub use years::YearCursor;

//! Fleet snapshot storage boundary.
//!
//! A fleet store persists the *whole* car collection at once (full snapshot on
//! save, full reload on load). There is no incremental write path.

pub mod in_memory;
pub mod json_file;
pub mod r#trait;

pub use in_memory::InMemoryFleetStore;
pub use json_file::{FleetDocument, JsonFleetStore};
pub use r#trait::{FleetStore, StoreError};

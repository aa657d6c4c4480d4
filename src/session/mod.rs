//! Session layer around the engine.
//!
//! - `GameSnapshot`: the persisted and transmitted shape of one game
//! - `GameStore`: keyed storage with swappable backends
//! - `GameService`: applies a human move, the machine reply, and passes

pub mod snapshot;
pub mod store;
pub mod service;

pub use snapshot::GameSnapshot;
pub use store::{EncodedStore, GameStore, InMemoryStore};
pub use service::{GameService, MACHINE_SIDE};

pub mod models;
pub mod repository;
pub mod storage;
pub mod utils;
pub mod workflow;

pub use models::*;
pub use repository::*;
pub use storage::{InMemoryStore, KeyValueStore, Slot, StorageError};
pub use workflow::PhaseStateMachine;

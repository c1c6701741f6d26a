pub mod document;
pub mod error;
pub mod memory;
pub mod snapshot;
pub mod store;

pub use document::Document;
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use snapshot::{Snapshot, SnapshotStream};
pub use store::{BatchOp, DocumentStore, PROJECTS, TASKS};

pub use tb_core::Fields;

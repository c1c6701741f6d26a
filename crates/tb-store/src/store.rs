use crate::{Document, Result as StoreErrorResult, SnapshotStream};

use tb_core::Fields;

use async_trait::async_trait;

/// Collection holding task documents
pub const TASKS: &str = "tasks";
/// Collection holding project documents
pub const PROJECTS: &str = "projects";

/// One write inside a batch
#[derive(Debug, Clone)]
pub enum BatchOp {
    /// Create or replace a whole document. The store assigns an id
    /// when none is given.
    Set { id: Option<String>, fields: Fields },
    /// Remove a document. Removing an absent document is a no-op.
    Delete { id: String },
}

/// Capability handle to the hosted document database.
///
/// The board never talks to a concrete backend; everything flows through
/// this trait so tests and embedders can substitute their own.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document with a store-assigned id, returning that id
    async fn create(&self, collection: &str, fields: Fields) -> StoreErrorResult<String>;

    /// Merge fields into an existing document. Fails with `NotFound`
    /// when the document does not exist.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreErrorResult<()>;

    /// Permanently remove a document. Removing an absent document
    /// succeeds silently.
    async fn delete(&self, collection: &str, id: &str) -> StoreErrorResult<()>;

    /// Read the entire collection once
    async fn get_all(&self, collection: &str) -> StoreErrorResult<Vec<Document>>;

    /// Apply a group of writes atomically. A committed batch produces
    /// exactly one snapshot, regardless of how many writes it holds.
    async fn batch(&self, collection: &str, ops: Vec<BatchOp>) -> StoreErrorResult<()>;

    /// Subscribe to full-collection snapshots. The current state arrives
    /// immediately, then one snapshot per committed change. Dropping the
    /// stream cancels the subscription.
    async fn subscribe(&self, collection: &str) -> StoreErrorResult<SnapshotStream>;
}

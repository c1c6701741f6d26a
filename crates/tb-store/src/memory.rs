use crate::{
    BatchOp, Document, DocumentStore, Result as StoreErrorResult, Snapshot, SnapshotStream,
    StoreError,
};

use tb_core::Fields;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};
use uuid::Uuid;

const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// In-memory reference implementation of [`DocumentStore`].
///
/// Collections spring into existence on first use. Every committed write
/// bumps the collection revision and fans the full state out to all
/// subscribers over a broadcast channel.
#[derive(Clone)]
pub struct MemoryStore {
    inner: Arc<RwLock<StoreInner>>,
    channel_capacity: usize,
}

struct StoreInner {
    collections: HashMap<String, CollectionState>,
}

/// Per-collection documents plus the snapshot fan-out channel.
/// Documents are kept ordered by id so snapshots are deterministic.
struct CollectionState {
    documents: BTreeMap<String, Fields>,
    revision: u64,
    sender: broadcast::Sender<Snapshot>,
}

impl CollectionState {
    fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            documents: BTreeMap::new(),
            revision: 0,
            sender,
        }
    }

    fn snapshot(&self, collection: &str) -> Snapshot {
        let documents = self
            .documents
            .iter()
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .collect();
        Snapshot::new(collection, self.revision, documents)
    }

    /// Bump the revision and fan the new state out to subscribers
    fn publish(&mut self, collection: &str) {
        self.revision += 1;
        match self.sender.send(self.snapshot(collection)) {
            Ok(receiver_count) => log::debug!(
                "Published {} snapshot rev {} to {} subscribers",
                collection,
                self.revision,
                receiver_count
            ),
            Err(_) => log::debug!(
                "No subscribers for {} snapshot rev {}",
                collection,
                self.revision
            ),
        }
    }
}

impl StoreInner {
    fn collection_mut(&mut self, name: &str, capacity: usize) -> &mut CollectionState {
        self.collections.entry(name.to_string()).or_insert_with(|| {
            log::debug!("Created collection {}", name);
            CollectionState::new(capacity)
        })
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a store whose snapshot channels retain `capacity` snapshots
    /// for slow subscribers
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                collections: HashMap::new(),
            })),
            channel_capacity: capacity,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, fields: Fields) -> StoreErrorResult<String> {
        let mut inner = self.inner.write().await;
        let state = inner.collection_mut(collection, self.channel_capacity);

        let id = Uuid::new_v4().to_string();
        state.documents.insert(id.clone(), fields);
        state.publish(collection);

        log::debug!("Created document {}/{}", collection, id);
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreErrorResult<()> {
        let mut inner = self.inner.write().await;
        let state = inner.collection_mut(collection, self.channel_capacity);

        match state.documents.get_mut(id) {
            Some(existing) => {
                existing.extend(fields);
                state.publish(collection);
                Ok(())
            }
            None => Err(StoreError::not_found(collection, id)),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreErrorResult<()> {
        let mut inner = self.inner.write().await;
        let state = inner.collection_mut(collection, self.channel_capacity);

        // Deleting an absent document is a no-op and publishes nothing
        if state.documents.remove(id).is_some() {
            state.publish(collection);
            log::debug!("Deleted document {}/{}", collection, id);
        }
        Ok(())
    }

    async fn get_all(&self, collection: &str) -> StoreErrorResult<Vec<Document>> {
        let inner = self.inner.read().await;
        Ok(inner
            .collections
            .get(collection)
            .map(|state| {
                state
                    .documents
                    .iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn batch(&self, collection: &str, ops: Vec<BatchOp>) -> StoreErrorResult<()> {
        if ops.is_empty() {
            return Ok(());
        }

        let mut inner = self.inner.write().await;
        let state = inner.collection_mut(collection, self.channel_capacity);

        let op_count = ops.len();
        for op in ops {
            match op {
                BatchOp::Set { id, fields } => {
                    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
                    state.documents.insert(id, fields);
                }
                BatchOp::Delete { id } => {
                    state.documents.remove(&id);
                }
            }
        }
        state.publish(collection);

        log::debug!("Committed batch of {} writes to {}", op_count, collection);
        Ok(())
    }

    async fn subscribe(&self, collection: &str) -> StoreErrorResult<SnapshotStream> {
        let mut inner = self.inner.write().await;
        let state = inner.collection_mut(collection, self.channel_capacity);

        // Receiver is taken under the same lock that guards publishes, so
        // the initial snapshot and the live feed can neither miss nor
        // duplicate a commit.
        let receiver = state.sender.subscribe();
        let initial = state.snapshot(collection);

        log::debug!(
            "Subscribed to {} at revision {}",
            collection,
            initial.revision
        );
        Ok(SnapshotStream::new(initial, receiver))
    }
}

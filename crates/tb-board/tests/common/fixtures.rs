#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tb_auth::{AccessGate, AuthUser, StaticAuthProvider};
use tb_board::{BoardContext, BoardView, Dialogs};
use tb_core::{Fields, Priority, Project, ProjectColor, ProjectIcon, Status, Task};
use tb_store::{
    BatchOp, Document, DocumentStore, MemoryStore, PROJECTS, Result as StoreErrorResult,
    SnapshotStream, StoreError, TASKS,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const MEMBER_EMAIL: &str = "member@example.com";

/// Creates a test task with sensible defaults
pub fn create_test_task(id: &str, project_id: &str, status: Status) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        notes: None,
        status,
        priority: Priority::Medium,
        project_id: project_id.to_string(),
        is_archived: false,
        date: None,
        user_id: "member-1".to_string(),
        assignee: None,
        created_at: None,
        updated_by: None,
        updated_by_avatar: None,
        updated_by_id: None,
    }
}

/// Creates a test project with sensible defaults
pub fn create_test_project(id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        color: ProjectColor::Blue,
        icon: ProjectIcon::Code,
        created_at: None,
    }
}

pub fn admin_user() -> AuthUser {
    AuthUser::new("admin-1", "Admin User", ADMIN_EMAIL)
}

pub fn member_user() -> AuthUser {
    AuthUser::new("member-1", "Member User", MEMBER_EMAIL)
}

/// Gate admitting both fixture users and elevating the admin
pub fn test_gate() -> AccessGate {
    AccessGate::new([ADMIN_EMAIL, MEMBER_EMAIL], Some(ADMIN_EMAIL.to_string()))
}

/// Dialog double with a scripted confirm answer and captured messages
pub struct ScriptedDialogs {
    accept: bool,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self {
            accept: true,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        })
    }

    pub fn declining() -> Arc<Self> {
        Arc::new(Self {
            accept: false,
            confirms: Mutex::new(Vec::new()),
            alerts: Mutex::new(Vec::new()),
        })
    }

    pub fn confirm_messages(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }

    pub fn alert_messages(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.accept
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Store wrapper whose updates always fail, for revert paths
pub struct FailingUpdateStore {
    inner: MemoryStore,
}

impl FailingUpdateStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentStore for FailingUpdateStore {
    async fn create(&self, collection: &str, fields: Fields) -> StoreErrorResult<String> {
        self.inner.create(collection, fields).await
    }

    async fn update(&self, _collection: &str, _id: &str, _fields: Fields) -> StoreErrorResult<()> {
        Err(StoreError::backend("update rejected by test store"))
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreErrorResult<()> {
        self.inner.delete(collection, id).await
    }

    async fn get_all(&self, collection: &str) -> StoreErrorResult<Vec<Document>> {
        self.inner.get_all(collection).await
    }

    async fn batch(&self, collection: &str, ops: Vec<BatchOp>) -> StoreErrorResult<()> {
        self.inner.batch(collection, ops).await
    }

    async fn subscribe(&self, collection: &str) -> StoreErrorResult<SnapshotStream> {
        self.inner.subscribe(collection).await
    }
}

/// Store wrapper recording every update call and committed batch size
pub struct RecordingStore {
    inner: MemoryStore,
    updates: Mutex<Vec<String>>,
    batch_sizes: Mutex<Vec<usize>>,
}

impl RecordingStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            updates: Mutex::new(Vec::new()),
            batch_sizes: Mutex::new(Vec::new()),
        }
    }

    /// Ids passed to `update`, in call order
    pub fn updated_ids(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes.lock().unwrap().clone()
    }

    /// Forget everything recorded so far, e.g. after fixture setup
    pub fn clear_recorded(&self) {
        self.updates.lock().unwrap().clear();
        self.batch_sizes.lock().unwrap().clear();
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn create(&self, collection: &str, fields: Fields) -> StoreErrorResult<String> {
        self.inner.create(collection, fields).await
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreErrorResult<()> {
        self.updates.lock().unwrap().push(id.to_string());
        self.inner.update(collection, id, fields).await
    }

    async fn delete(&self, collection: &str, id: &str) -> StoreErrorResult<()> {
        self.inner.delete(collection, id).await
    }

    async fn get_all(&self, collection: &str) -> StoreErrorResult<Vec<Document>> {
        self.inner.get_all(collection).await
    }

    async fn batch(&self, collection: &str, ops: Vec<BatchOp>) -> StoreErrorResult<()> {
        self.batch_sizes.lock().unwrap().push(ops.len());
        self.inner.batch(collection, ops).await
    }

    async fn subscribe(&self, collection: &str) -> StoreErrorResult<SnapshotStream> {
        self.inner.subscribe(collection).await
    }
}

/// Context wired to the given store, signed in as `user`, with the
/// standard fixture gate
pub fn create_test_context(
    store: Arc<dyn DocumentStore>,
    user: AuthUser,
    dialogs: Arc<ScriptedDialogs>,
) -> BoardContext {
    let auth = Arc::new(StaticAuthProvider::signed_in(user));
    BoardContext::new(store, auth, test_gate(), dialogs, 500)
}

/// View over a memory store, signed in as `user`
pub fn create_test_view(
    store: &MemoryStore,
    user: AuthUser,
    dialogs: Arc<ScriptedDialogs>,
) -> BoardView {
    BoardView::new(create_test_context(Arc::new(store.clone()), user, dialogs))
}

/// Write a task document under its fixture id
pub async fn insert_task(store: &MemoryStore, task: &Task) {
    store
        .batch(
            TASKS,
            vec![BatchOp::Set {
                id: Some(task.id.clone()),
                fields: task.to_fields().unwrap(),
            }],
        )
        .await
        .unwrap();
}

/// Write a project document under its fixture id
pub async fn insert_project(store: &MemoryStore, project: &Project) {
    store
        .batch(
            PROJECTS,
            vec![BatchOp::Set {
                id: Some(project.id.clone()),
                fields: project.to_fields().unwrap(),
            }],
        )
        .await
        .unwrap();
}

/// Feed the store's current state into the view, as the session loop would
pub async fn sync_view(view: &mut BoardView, store: &MemoryStore) {
    let mut tasks = store.subscribe(TASKS).await.unwrap();
    let snapshot = tasks.recv().await.unwrap();
    view.apply_snapshot(&snapshot);

    let mut projects = store.subscribe(PROJECTS).await.unwrap();
    let snapshot = projects.recv().await.unwrap();
    view.apply_snapshot(&snapshot);
}

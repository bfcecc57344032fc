//! Generic per-domain state container.

use tokio::sync::RwLock;

/// Snapshot of one domain's cached views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityState<T> {
    /// The last successfully fetched detail view.
    pub current: Option<T>,
    /// The last successfully fetched list view.
    pub list: Vec<T>,
    /// Total matching items reported alongside the list.
    pub total: u64,
    /// True strictly between the start and settlement of a list fetch.
    pub loading: bool,
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self {
            current: None,
            list: Vec::new(),
            total: 0,
            loading: false,
        }
    }
}

/// The state half of a domain store.
///
/// Holds [`EntityState`] behind an async lock. Mutation happens only from
/// the owning store's actions, and only on confirmed server responses.
///
/// Concurrency contract: the lock is never held across a network await, so
/// overlapping calls against the same store resolve by completion order
/// (last-completed-wins, not last-issued-wins). Callers needing strict
/// ordering must serialize their calls.
#[derive(Debug, Default)]
pub struct EntityStore<T> {
    state: RwLock<EntityState<T>>,
}

impl<T: Clone> EntityStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EntityState::default()),
        }
    }

    /// A full copy of the current state.
    pub async fn snapshot(&self) -> EntityState<T> {
        self.state.read().await.clone()
    }

    /// The cached detail view.
    pub async fn current(&self) -> Option<T> {
        self.state.read().await.current.clone()
    }

    /// The cached list view.
    pub async fn list(&self) -> Vec<T> {
        self.state.read().await.list.clone()
    }

    /// Total matching items for the cached list view.
    pub async fn total(&self) -> u64 {
        self.state.read().await.total
    }

    /// True while exactly one list fetch issued by this store is in flight.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Overwrites the detail view from a confirmed response.
    pub(crate) async fn set_current(&self, value: T) {
        self.state.write().await.current = Some(value);
    }

    /// Marks a list fetch as started.
    pub(crate) async fn begin_load(&self) {
        self.state.write().await.loading = true;
    }

    /// Records a successful list fetch: list, total, and the loading flag
    /// settle under one write guard.
    pub(crate) async fn complete_load(&self, list: Vec<T>, total: u64) {
        let mut state = self.state.write().await;
        state.list = list;
        state.total = total;
        state.loading = false;
    }

    /// Clears the loading flag after a failed list fetch, leaving the
    /// cached views untouched.
    pub(crate) async fn abort_load(&self) {
        self.state.write().await.loading = false;
    }
}

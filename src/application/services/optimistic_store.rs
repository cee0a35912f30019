use crate::domain::entities::Identifiable;
use crate::shared::error::AppError;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Outcome of one `apply` call, produced exactly once per call.
#[derive(Debug)]
pub enum Settlement {
    /// The remote mutation succeeded; the optimistic patch stands.
    Confirmed,
    /// The remote mutation failed; the pre-mutation state was republished
    /// (unless a newer patch for the same entity superseded it).
    Reverted(AppError),
    /// The target id is not in the collection; the remote call was never
    /// issued.
    NotFound,
}

struct StoreInner<T: Identifiable> {
    items: Vec<Arc<T>>,
    // latest sequence issued per entity; a settlement carrying an older
    // sequence must not touch the published collection
    seqs: HashMap<T::Id, u64>,
}

/// Locally-owned entity collection with optimistic patch-then-reconcile
/// mutations.
///
/// `apply` publishes the patched entity synchronously, runs the remote
/// confirmation, and on failure republishes the captured pre-mutation
/// record. Untouched entries keep their `Arc` identity across every
/// publish, so a view diffing by pointer re-renders only the row that
/// changed.
pub struct OptimisticStore<T: Identifiable> {
    inner: RwLock<StoreInner<T>>,
}

impl<T> OptimisticStore<T>
where
    T: Identifiable + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                items: Vec::new(),
                seqs: HashMap::new(),
            }),
        }
    }

    /// Replace the whole collection with a fresh authoritative snapshot.
    /// Pending reconciliations are invalidated: a revert that settles after
    /// this call finds its sequence stale and leaves the new data alone.
    pub async fn replace_all(&self, items: Vec<T>) {
        let mut inner = self.inner.write().await;
        inner.items = items.into_iter().map(Arc::new).collect();
        inner.seqs.clear();
    }

    /// Current published collection. Entries are shared, not copied.
    pub async fn snapshot(&self) -> Vec<Arc<T>> {
        let inner = self.inner.read().await;
        inner.items.clone()
    }

    pub async fn get(&self, id: &T::Id) -> Option<Arc<T>> {
        let inner = self.inner.read().await;
        inner
            .items
            .iter()
            .find(|item| item.entity_id() == *id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Optimistically patch one entity and reconcile against `remote`.
    ///
    /// The patch is published before `remote` is awaited. `patch` must not
    /// mutate its argument; it produces the replacement record. On remote
    /// failure the captured pre-mutation record is republished, unless a
    /// later `apply` for the same id already published a newer patch.
    pub async fn apply<P, F, Fut>(&self, id: &T::Id, patch: P, remote: F) -> Settlement
    where
        P: FnOnce(&T) -> T + Send,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<(), AppError>> + Send,
    {
        let (original, seq) = {
            let mut inner = self.inner.write().await;
            let Some(pos) = inner.items.iter().position(|item| item.entity_id() == *id) else {
                return Settlement::NotFound;
            };

            let original = Arc::clone(&inner.items[pos]);
            inner.items[pos] = Arc::new(patch(original.as_ref()));

            let seq = inner
                .seqs
                .entry(id.clone())
                .and_modify(|s| *s += 1)
                .or_insert(1);
            (original, *seq)
        };

        match remote().await {
            Ok(()) => {
                debug!(seq, "optimistic patch confirmed");
                Settlement::Confirmed
            }
            Err(err) => {
                self.revert(id, original, seq).await;
                Settlement::Reverted(err)
            }
        }
    }

    async fn revert(&self, id: &T::Id, original: Arc<T>, seq: u64) {
        let mut inner = self.inner.write().await;
        let latest = inner.seqs.get(id).copied().unwrap_or(0);
        if latest != seq {
            debug!(seq, latest, "stale revert dropped");
            return;
        }
        if let Some(pos) = inner.items.iter().position(|item| item.entity_id() == *id) {
            inner.items[pos] = original;
        }
    }
}

impl<T> Default for OptimisticStore<T>
where
    T: Identifiable + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

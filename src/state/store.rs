use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;

use super::types::{StateKey, StateValue};

/// Session-scoped container of per-widget state cells.
///
/// Cells are created lazily on first access per key and live until the
/// whole store is replaced when a new screen arrives. Each cell is a watch
/// channel: every handle returned for the same key shares the channel, so
/// renderers, the owning control, and the submission snapshot all observe
/// one source of truth.
#[derive(Debug, Default)]
pub struct StateStore {
    cells: Mutex<HashMap<StateKey, watch::Sender<StateValue>>>,
}

/// Shared handle on one widget's state cell.
///
/// Writes use replace semantics and are totally ordered per key; by
/// discipline only the control bound to a key writes it.
#[derive(Debug, Clone)]
pub struct StateCell {
    tx: watch::Sender<StateValue>,
}

impl StateCell {
    pub fn get(&self) -> StateValue {
        self.tx.borrow().clone()
    }

    pub fn set(&self, value: StateValue) {
        self.tx.send_replace(value);
    }

    /// Subscribes an observer; the receiver sees every subsequent write.
    pub fn subscribe(&self) -> watch::Receiver<StateValue> {
        self.tx.subscribe()
    }
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell for `(form_id, widget_id)`, installing `default`
    /// on first access. Repeated calls with the same key return handles on
    /// the same underlying cell; the default of a later call is ignored.
    pub fn state_for(&self, form_id: &str, widget_id: &str, default: StateValue) -> StateCell {
        let key = StateKey::new(form_id, widget_id);
        let mut cells = self.lock_cells();
        let tx = cells
            .entry(key)
            .or_insert_with(|| watch::channel(default).0)
            .clone();
        StateCell { tx }
    }

    /// Current values of every cell belonging to one form, keyed for
    /// submission.
    pub fn snapshot(&self, form_id: &str) -> HashMap<StateKey, StateValue> {
        self.lock_cells()
            .iter()
            .filter(|(key, _)| key.form_id == form_id)
            .map(|(key, tx)| (key.clone(), tx.borrow().clone()))
            .collect()
    }

    /// Discards every cell. Called when the screen changes; widget ids are
    /// only scoped per form, so no identity survives a screen swap.
    pub fn reset(&self) {
        self.lock_cells().clear();
    }

    fn lock_cells(&self) -> MutexGuard<'_, HashMap<StateKey, watch::Sender<StateValue>>> {
        match self.cells.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two `state_for` calls with the same key must share one cell: a
    /// mutation through either handle is visible to both.
    #[test]
    fn test_same_key_returns_shared_cell() {
        let store = StateStore::new();

        let first = store.state_for("identifier", "identifier", StateValue::Null);
        let second = store.state_for("identifier", "identifier", StateValue::Null);

        first.set(StateValue::text("user@example.com"));
        assert_eq!(second.get(), StateValue::text("user@example.com"));
    }

    /// The default is installed only on first access; later defaults for
    /// the same key are ignored.
    #[test]
    fn test_default_installed_once() {
        let store = StateStore::new();

        let cell = store.state_for("f", "consent", StateValue::Flag(false));
        assert_eq!(cell.get(), StateValue::Flag(false));

        let again = store.state_for("f", "consent", StateValue::Flag(true));
        assert_eq!(again.get(), StateValue::Flag(false));
    }

    #[test]
    fn test_keys_are_form_scoped() {
        let store = StateStore::new();

        store
            .state_for("formA", "field", StateValue::Null)
            .set(StateValue::text("a"));
        store
            .state_for("formB", "field", StateValue::Null)
            .set(StateValue::text("b"));

        let snapshot_a = store.snapshot("formA");
        assert_eq!(snapshot_a.len(), 1);
        assert_eq!(
            snapshot_a.get(&StateKey::new("formA", "field")),
            Some(&StateValue::text("a"))
        );
    }

    /// A snapshot reflects every mutation made before it was taken.
    #[test]
    fn test_snapshot_sees_prior_mutations() {
        let store = StateStore::new();

        let cell = store.state_for("identifier", "identifier", StateValue::Null);
        cell.set(StateValue::text("first"));
        cell.set(StateValue::text("second"));

        let snapshot = store.snapshot("identifier");
        assert_eq!(
            snapshot.get(&StateKey::new("identifier", "identifier")),
            Some(&StateValue::text("second"))
        );
    }

    #[test]
    fn test_reset_discards_all_cells() {
        let store = StateStore::new();
        store
            .state_for("f", "w", StateValue::Null)
            .set(StateValue::text("stale"));

        store.reset();

        // A fresh cell starts from its default again.
        let cell = store.state_for("f", "w", StateValue::Null);
        assert_eq!(cell.get(), StateValue::Null);
    }

    #[tokio::test]
    async fn test_subscriber_observes_writes() {
        let store = StateStore::new();
        let cell = store.state_for("f", "w", StateValue::Null);
        let mut rx = cell.subscribe();

        cell.set(StateValue::text("edited"));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), StateValue::text("edited"));
    }
}

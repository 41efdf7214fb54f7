use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use banklite_ledger::User;

use super::{StoreError, UserPersistence};

/// Snapshot-in-a-mutex persistence for tests/dev.
///
/// Counts saves and can be told to fail them, so callers can observe
/// what a real disk write would have seen.
#[derive(Debug, Default)]
pub struct InMemoryPersistence {
    snapshot: Mutex<Vec<User>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing user list (as if loaded from disk).
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            snapshot: Mutex::new(users),
            ..Self::default()
        }
    }

    /// Last saved (or seeded) user list.
    pub fn snapshot(&self) -> Vec<User> {
        self.snapshot.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl UserPersistence for InMemoryPersistence {
    fn load(&self) -> Result<Vec<User>, StoreError> {
        self.snapshot
            .lock()
            .map(|s| s.clone())
            .map_err(|_| StoreError::Poisoned)
    }

    fn save(&self, users: &[User]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Storage("simulated save failure".to_string()));
        }
        let mut snapshot = self.snapshot.lock().map_err(|_| StoreError::Poisoned)?;
        *snapshot = users.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

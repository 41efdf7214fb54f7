use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use banklite_core::{DomainError, DomainResult, UserId, entity::position_of};
use banklite_ledger::User;

use super::{StoreError, UserPersistence};

#[derive(Debug)]
struct State {
    users: Vec<User>,
    next_user_id: UserId,
}

/// Process-wide user list.
///
/// Every mutation runs under the write lock: the change is applied, the
/// complete list is saved, and only a successful save makes it visible. A
/// failed save rolls the in-memory list back.
pub struct UserStore {
    state: RwLock<State>,
    persistence: Box<dyn UserPersistence>,
}

impl core::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UserStore").finish_non_exhaustive()
    }
}

impl UserStore {
    /// Load all users from `persistence`.
    pub fn open(persistence: impl UserPersistence + 'static) -> Result<Self, StoreError> {
        let users = persistence.load()?;
        let next_user_id = users
            .iter()
            .map(|u| u.id)
            .max()
            .map(|id| id.next())
            .unwrap_or(UserId::FIRST);

        tracing::info!(users = users.len(), next_user_id = %next_user_id, "user store opened");

        Ok(Self {
            state: RwLock::new(State {
                users,
                next_user_id,
            }),
            persistence: Box::new(persistence),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.state.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.state.write().map_err(|_| StoreError::Poisoned)
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.users.len())
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .read()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    pub fn get(&self, user_id: UserId) -> Result<Option<User>, StoreError> {
        let state = self.read()?;
        Ok(position_of(&state.users, &user_id).map(|i| state.users[i].clone()))
    }

    /// Insert a new user with the next id.
    ///
    /// Username uniqueness is checked here, under the write lock.
    pub fn register(&self, username: &str, password_hash: String) -> Result<User, StoreError> {
        let mut state = self.write()?;

        if state.users.iter().any(|u| u.username == username) {
            return Err(DomainError::conflict(format!("user '{username}' already exists")).into());
        }

        let user = User::new(state.next_user_id, username, password_hash);
        state.users.push(user.clone());

        if let Err(e) = self.persistence.save(&state.users) {
            state.users.pop();
            tracing::error!(username, error = %e, "failed to persist new user; rolled back");
            return Err(e);
        }

        state.next_user_id = user.id.next();
        tracing::info!(user_id = %user.id, username, "user registered");
        Ok(user)
    }

    /// Apply `op` to one user and persist the whole list.
    ///
    /// If `op` fails nothing is saved; if the save fails the user is
    /// restored to its previous state.
    pub fn update_user<T>(
        &self,
        user_id: UserId,
        op: impl FnOnce(&mut User) -> DomainResult<T>,
    ) -> Result<T, StoreError> {
        let mut state = self.write()?;

        let i = position_of(&state.users, &user_id).ok_or(DomainError::not_found("user"))?;

        let mut working = state.users[i].clone();
        let out = op(&mut working)?;
        let previous = std::mem::replace(&mut state.users[i], working);

        if let Err(e) = self.persistence.save(&state.users) {
            state.users[i] = previous;
            tracing::error!(user_id = %user_id, error = %e, "failed to persist user update; rolled back");
            return Err(e);
        }

        Ok(out)
    }
}

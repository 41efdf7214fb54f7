//! Service handle shared by all handlers.
//!
//! Store mutations and bcrypt run on tokio's blocking pool: both do
//! synchronous work (file writes, key stretching).

use std::sync::Arc;

use thiserror::Error;

use banklite_auth::{BearerToken, PasswordError, PasswordHasher, Principal};
use banklite_core::{DomainError, DomainResult, UserId};
use banklite_infra::{JsonFilePersistence, StoreError, UserStore};
use banklite_ledger::{Account, AccountIdGenerator, ClockIdGenerator, User};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        Self::Store(StoreError::Domain(value))
    }
}

#[derive(Debug, Clone)]
pub struct AppServices {
    store: Arc<UserStore>,
    hasher: PasswordHasher,
    account_ids: Arc<dyn AccountIdGenerator>,
}

impl AppServices {
    pub fn new(
        store: UserStore,
        hasher: PasswordHasher,
        account_ids: impl AccountIdGenerator + 'static,
    ) -> Self {
        Self {
            store: Arc::new(store),
            hasher,
            account_ids: Arc::new(account_ids),
        }
    }

    /// Production wiring: JSON file store, configured bcrypt cost, clock ids.
    pub fn from_config(config: &Config) -> Result<Self, ServiceError> {
        let store = UserStore::open(JsonFilePersistence::new(&config.users_file))?;
        let hasher = PasswordHasher::with_cost(config.bcrypt_cost)?;
        Ok(Self::new(store, hasher, ClockIdGenerator::new()))
    }

    /// Resolve a bearer token to the user whose username it is.
    pub fn principal_for_token(&self, token: &BearerToken) -> Result<Option<Principal>, ServiceError> {
        Ok(self
            .store
            .find_by_username(token.username())?
            .map(|u| Principal::new(u.id, u.username)))
    }

    pub async fn register(&self, username: String, password: String) -> Result<User, ServiceError> {
        // Cheap early exit; the store re-checks under its write lock.
        if self.store.find_by_username(&username)?.is_some() {
            return Err(DomainError::conflict(format!("user '{username}' already exists")).into());
        }

        let hasher = self.hasher;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

        let store = self.store.clone();
        let user =
            tokio::task::spawn_blocking(move || store.register(&username, password_hash)).await??;
        Ok(user)
    }

    /// The user if `password` matches, `None` for an unknown user or a wrong
    /// password.
    pub async fn login(&self, username: &str, password: String) -> Result<Option<User>, ServiceError> {
        let Some(user) = self.store.find_by_username(username)? else {
            return Ok(None);
        };

        let hasher = self.hasher;
        let password_hash = user.password_hash.clone();
        let valid =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash)).await?;

        Ok(valid.then_some(user))
    }

    pub fn accounts_of(&self, user_id: UserId) -> Result<Vec<Account>, ServiceError> {
        let user = self
            .store
            .get(user_id)?
            .ok_or(DomainError::not_found("user"))?;
        Ok(user.accounts)
    }

    /// Run a ledger operation against one user and persist the result.
    pub async fn update_user<T, F>(&self, user_id: UserId, op: F) -> Result<T, ServiceError>
    where
        T: Send + 'static,
        F: FnOnce(&mut User, &dyn AccountIdGenerator) -> DomainResult<T> + Send + 'static,
    {
        let store = self.store.clone();
        let account_ids = self.account_ids.clone();
        let out = tokio::task::spawn_blocking(move || {
            store.update_user(user_id, |user| op(user, account_ids.as_ref()))
        })
        .await??;
        Ok(out)
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use banklite_core::DomainError;
use banklite_ledger::User;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("user file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("user store lock poisoned")]
    Poisoned,

    #[error("storage error: {0}")]
    Storage(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Where the full user list is loaded from and saved to.
///
/// `save` always receives the complete list; there are no partial updates.
pub trait UserPersistence: Send + Sync {
    fn load(&self) -> Result<Vec<User>, StoreError>;
    fn save(&self, users: &[User]) -> Result<(), StoreError>;
}

impl<P> UserPersistence for Arc<P>
where
    P: UserPersistence + ?Sized,
{
    fn load(&self) -> Result<Vec<User>, StoreError> {
        (**self).load()
    }

    fn save(&self, users: &[User]) -> Result<(), StoreError> {
        (**self).save(users)
    }
}

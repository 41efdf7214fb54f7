//! Infrastructure layer: user storage and its on-disk format.

pub mod user_store;

pub use user_store::{InMemoryPersistence, JsonFilePersistence, StoreError, UserPersistence, UserStore};

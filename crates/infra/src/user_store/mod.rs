//! User store: every user held in memory, rewritten wholesale on change.

pub mod in_memory;
pub mod json_file;
pub mod persistence;
pub mod store;

pub use in_memory::InMemoryPersistence;
pub use json_file::JsonFilePersistence;
pub use persistence::{StoreError, UserPersistence};
pub use store::UserStore;

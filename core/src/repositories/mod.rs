pub mod credential;
pub mod storage;

pub use credential::{CredentialStore, MemoryCredentialStore, NamespacedCredentialStore};
pub use storage::{KeyValueStore, MemoryKeyValueStore};

//! Storage abstractions for the service layer.
//!
//! Collections are owned exclusively by a store; callers get clones back,
//! never references into the map. Absence is reported as `None`, every
//! other failure as an opaque backend error.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use models::person::Person;
use models::user::User;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Keyed access to registered users.
///
/// Registered users are never updated, so the only write is an insert
/// that the store must make atomic with its own existence check.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, email: &str) -> Result<Option<User>, StorageError>;
    /// Returns whether the user was inserted; false when the email is taken.
    async fn save_if_absent(&self, user: User) -> Result<bool, StorageError>;
}

/// Keyed access to the people roster.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn get(&self, id: Uuid) -> Result<Option<Person>, StorageError>;
    async fn save(&self, person: Person) -> Result<(), StorageError>;
    /// Returns whether the id existed.
    async fn delete(&self, id: Uuid) -> Result<bool, StorageError>;
    async fn list(&self) -> Result<Vec<Person>, StorageError>;
}

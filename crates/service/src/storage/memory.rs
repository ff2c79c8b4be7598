use std::collections::hash_map::Entry;
use std::{collections::HashMap, hash::Hash};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::person::Person;
use models::user::User;

use super::{PersonStore, StorageError, UserStore};

/// Generic in-memory key-value map store guarded by a read-write lock.
///
/// Reads take the shared lock and clone values out; writes take the
/// exclusive lock. Nothing survives a restart.
pub struct MemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

pub type MemoryUserStore = MemoryStore<String, User>;
pub type MemoryPeopleStore = MemoryStore<Uuid, Person>;

impl<K, V> MemoryStore<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self { inner: RwLock::new(HashMap::new()) }
    }
}

impl<K, V> Default for MemoryStore<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore<String, User> {
    async fn get(&self, email: &str) -> Result<Option<User>, StorageError> {
        let map = self.inner.read().await;
        Ok(map.get(email).cloned())
    }

    // One write guard across the existence check and the insert.
    async fn save_if_absent(&self, user: User) -> Result<bool, StorageError> {
        let mut map = self.inner.write().await;
        match map.entry(user.email.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(true)
            }
        }
    }
}

#[async_trait]
impl PersonStore for MemoryStore<Uuid, Person> {
    async fn get(&self, id: Uuid) -> Result<Option<Person>, StorageError> {
        let map = self.inner.read().await;
        Ok(map.get(&id).cloned())
    }

    async fn save(&self, person: Person) -> Result<(), StorageError> {
        let mut map = self.inner.write().await;
        map.insert(person.id, person);
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut map = self.inner.write().await;
        Ok(map.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Person>, StorageError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::person::{Address, Person};

use crate::errors::ServiceError;
use crate::storage::PersonStore;

/// Create input model: no id, the service generates one.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub address: Option<Address>,
}

impl PersonInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.firstname.trim().is_empty() {
            return Err(ServiceError::Validation("firstname is required".into()));
        }
        if self.lastname.trim().is_empty() {
            return Err(ServiceError::Validation("lastname is required".into()));
        }
        Ok(())
    }
}

/// CRUD over the people roster on top of a [`PersonStore`].
pub struct PeopleService {
    store: Arc<dyn PersonStore>,
}

impl PeopleService {
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }

    /// List the whole roster. Order is unspecified.
    pub async fn list(&self) -> Result<Vec<Person>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Fetch one person; `None` when the id is unknown.
    pub async fn get(&self, id: Uuid) -> Result<Option<Person>, ServiceError> {
        Ok(self.store.get(id).await?)
    }

    /// Create a person under a freshly generated id.
    #[instrument(skip(self, input), fields(firstname = %input.firstname))]
    pub async fn create(&self, input: PersonInput) -> Result<Person, ServiceError> {
        input.validate()?;
        let person = Person {
            id: Uuid::new_v4(),
            firstname: input.firstname,
            lastname: input.lastname,
            address: input.address,
        };
        self.store.save(person.clone()).await?;
        info!(id = %person.id, "person_created");
        Ok(person)
    }

    /// Delete by id if present, then return the remaining roster.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<Vec<Person>, ServiceError> {
        if self.store.delete(id).await? {
            info!(%id, "person_deleted");
        }
        Ok(self.store.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryPeopleStore;

    fn service() -> PeopleService {
        PeopleService::new(Arc::new(MemoryPeopleStore::default()))
    }

    fn input(firstname: &str, lastname: &str) -> PersonInput {
        PersonInput { firstname: firstname.into(), lastname: lastname.into(), address: None }
    }

    #[tokio::test]
    async fn create_assigns_fresh_distinct_ids() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("Alex", "Lee")).await?;
        let b = svc.create(input("Minh", "Le")).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn create_keeps_the_optional_address() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc
            .create(PersonInput {
                firstname: "Hung".into(),
                lastname: "Tran".into(),
                address: Some(Address { city: "City X".into(), state: "State X".into() }),
            })
            .await?;
        let fetched = svc.get(created.id).await?.unwrap();
        assert_eq!(fetched.address.unwrap().city, "City X");
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_both_names() {
        let svc = service();
        let err = svc.create(input("", "Lee")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = svc.create(input("Alex", "  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one_entry() -> Result<(), anyhow::Error> {
        let svc = service();
        let a = svc.create(input("Alex", "Lee")).await?;
        let b = svc.create(input("Minh", "Le")).await?;

        let remaining = svc.remove(a.id).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b.id);
        assert!(svc.get(a.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn remove_unknown_id_leaves_roster_unchanged() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.create(input("Alex", "Lee")).await?;
        let remaining = svc.remove(Uuid::new_v4()).await?;
        assert_eq!(remaining.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_id_is_none_not_error() -> Result<(), anyhow::Error> {
        let svc = service();
        assert!(svc.get(Uuid::new_v4()).await?.is_none());
        Ok(())
    }
}

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::user::{self, User};

use crate::errors::ServiceError;
use crate::storage::UserStore;

/// Registration input as decoded at the transport boundary.
///
/// Fields default to empty strings so an absent field fails validation with
/// a descriptive message rather than a decode error.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterParams {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
}

impl RegisterParams {
    pub fn validate(&self) -> Result<(), ServiceError> {
        user::validate_email(&self.email)?;
        user::validate_name(&self.name)?;
        Ok(())
    }
}

/// Registration and lookup rules on top of a [`UserStore`].
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user; the email is the unique identifier.
    ///
    /// The store performs the uniqueness check and the insert as one
    /// operation, so concurrent registrations of the same email produce
    /// exactly one winner.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::storage::memory::MemoryUserStore;
    /// use service::users::{RegisterParams, UserService};
    /// let svc = UserService::new(Arc::new(MemoryUserStore::default()));
    /// let params = RegisterParams { email: "alex@example.com".into(), name: "Alex Lee".into() };
    /// let user = tokio_test::block_on(svc.register(params)).unwrap();
    /// assert_eq!(user.email, "alex@example.com");
    /// ```
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: RegisterParams) -> Result<User, ServiceError> {
        params.validate()?;
        let user = User { email: params.email, name: params.name };
        if !self.store.save_if_absent(user.clone()).await? {
            return Err(ServiceError::AlreadyExists(format!(
                "email {} is already registered",
                user.email
            )));
        }
        info!(email = %user.email, "user_registered");
        Ok(user)
    }

    /// Look up a registered user by email.
    #[instrument(skip(self))]
    pub async fn get_by_email(&self, email: &str) -> Result<User, ServiceError> {
        user::validate_email(email)?;
        self.store
            .get(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))
    }
}

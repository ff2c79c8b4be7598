use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A registered account. The email doubles as the unique identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

/// Email rules shared by registration and lookup.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() {
        return Err(ModelError::Validation("email is required".into()));
    }
    if !email.contains('@') {
        return Err(ModelError::Validation("email must contain an '@' sign".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_email_rejects_empty_and_missing_at() {
        assert!(validate_email("alex@example.com").is_ok());
        assert!(matches!(validate_email(""), Err(ModelError::Validation(_))));
        assert!(matches!(validate_email("   "), Err(ModelError::Validation(_))));
        assert!(matches!(
            validate_email("alex.example.com"),
            Err(ModelError::Validation(_))
        ));
    }

    #[test]
    fn validate_name_requires_presence() {
        assert!(validate_name("Alex Lee").is_ok());
        assert!(matches!(validate_name(""), Err(ModelError::Validation(_))));
        assert!(matches!(validate_name("   "), Err(ModelError::Validation(_))));
    }
}

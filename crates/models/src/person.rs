use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directory entry. Ids are assigned by the service on create, never
/// supplied by callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub state: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn address_is_omitted_from_json_when_absent() {
        let person = Person {
            id: Uuid::new_v4(),
            firstname: "Minh".into(),
            lastname: "Le".into(),
            address: None,
        };
        let value = serde_json::to_value(&person).unwrap();
        assert!(value.get("address").is_none());
        assert_eq!(value["firstname"], "Minh");
    }

    #[test]
    fn person_parses_with_or_without_address() {
        let id = Uuid::new_v4();
        let bare: Person = serde_json::from_value(json!({
            "id": id,
            "firstname": "Minh",
            "lastname": "Le",
        }))
        .unwrap();
        assert!(bare.address.is_none());

        let full: Person = serde_json::from_value(json!({
            "id": id,
            "firstname": "Minh",
            "lastname": "Le",
            "address": { "city": "City X", "state": "State X" },
        }))
        .unwrap();
        assert_eq!(full.address.unwrap().city, "City X");
    }
}

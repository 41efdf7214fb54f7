use serde::{Deserialize, Serialize};

use banklite_core::{Entity, UserId};

use crate::Account;

/// A registered user and their ordered list of accounts.
///
/// This is also the on-disk record shape (`passwordHash` in camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            accounts: Vec::new(),
        }
    }

    /// The user as shown to clients: everything but the password hash.
    pub fn public_view(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            accounts: self.accounts.clone(),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Client-facing user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub username: String,
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_shape_uses_camel_case() {
        let user = User::new(UserId::new(3), "carol", "$2b$04$hash");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["passwordHash"], "$2b$04$hash");
        assert_eq!(json["accounts"], serde_json::json!([]));
    }

    #[test]
    fn public_view_drops_password_hash() {
        let user = User::new(UserId::new(3), "carol", "$2b$04$hash");
        let json = serde_json::to_value(user.public_view()).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["username"], "carol");
        assert!(json.get("passwordHash").is_none());
    }

    #[test]
    fn missing_accounts_field_loads_as_empty() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "dave", "passwordHash": "x"}"#,
        )
        .unwrap();
        assert!(user.accounts.is_empty());
    }
}

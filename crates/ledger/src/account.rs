use serde::{Deserialize, Serialize};

use banklite_core::{AccountId, Entity};

/// One account in a user's ledger.
///
/// `balance` is a plain JSON number and may go negative; nothing here
/// enforces an overdraft policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Free-form account type (e.g. "Checking", "Savings").
    #[serde(rename = "type")]
    pub kind: String,
    pub balance: f64,
}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &AccountId {
        &self.id
    }
}

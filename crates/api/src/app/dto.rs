use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------
//
// Fields are optional so a missing field is reported as a validation error
// with a readable message rather than a deserialization failure.

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAccountRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub initial_balance: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameAccountRequest {
    pub new_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdjustBalanceRequest {
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_account_id: Option<String>,
    pub to_account_id: Option<String>,
    pub amount: Option<f64>,
}

/// `Some` only for a present, non-empty string.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_account_uses_wire_field_names() {
        let req: AddAccountRequest = serde_json::from_str(
            r#"{"name": "Everyday", "type": "Checking", "initialBalance": 0}"#,
        )
        .unwrap();
        assert_eq!(req.kind.as_deref(), Some("Checking"));
        assert_eq!(req.initial_balance, Some(0.0));
    }

    #[test]
    fn string_amount_is_rejected() {
        assert!(serde_json::from_str::<AdjustBalanceRequest>(r#"{"amount": "5"}"#).is_err());
        let req: AdjustBalanceRequest = serde_json::from_str(r#"{"amount": -5}"#).unwrap();
        assert_eq!(req.amount, Some(-5.0));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }
}

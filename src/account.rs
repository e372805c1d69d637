use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AccountsResponse {
    #[serde(default)]
    pub accounts: Vec<Account>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserialize_accounts_list() {
        let response: AccountsResponse = serde_json::from_value(json!({
            "accounts": [
                {"id": "acc-1", "name": "Checking"},
                {"id": "acc-2", "name": "Savings"}
            ]
        }))
        .unwrap();
        assert_eq!(response.accounts.len(), 2);
        assert_eq!(response.accounts[0].id, "acc-1");
        assert_eq!(response.accounts[1].name, "Savings");
    }

    #[test]
    fn missing_accounts_key_defaults_to_empty() {
        let response: AccountsResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.accounts.is_empty());
    }

    #[test]
    fn extra_account_fields_are_passed_over() {
        let response: AccountsResponse = serde_json::from_value(json!({
            "accounts": [
                {"id": "acc-1", "name": "Checking", "currentBalance": 100.0, "type": "mercury"}
            ]
        }))
        .unwrap();
        assert_eq!(response.accounts[0].name, "Checking");
    }
}

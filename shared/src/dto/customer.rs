use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// Customer document returned by `GET /api/customers/customer`.
///
/// Populated wholesale from one response; the client never patches it in place.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerData {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub phone_number: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub accounts: Vec<Account>,
}

impl CustomerData {
    /// Whether `party` is this customer (name match, as the API exposes no ids)
    pub fn is_party(&self, party: &Party) -> bool {
        party.first_name == self.first_name && party.last_name == self.last_name
    }
}

/// Bank account with its card, ledger and payments
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: String,
    pub balance: f64,
    pub currency: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub card: Card,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub payments: Vec<Payment>,
}

/// Payment card attached to an account
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
}

/// Sender or receiver of a transaction
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub first_name: String,
    pub last_name: String,
}

/// Ledger entry
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub sender: Party,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub receiver: Party,
    pub amount: f64,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    pub transaction_date: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub transaction_type: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub currency_code: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
}

impl Transaction {
    /// Parsed `transaction_date`, `None` if the API sent something unreadable
    pub fn occurred_at(&self) -> Option<NaiveDateTime> {
        crate::utils::parse_timestamp(&self.transaction_date)
    }
}

/// Outgoing payment.
///
/// The API names the currency field `concurrency`; the wire name is kept and
/// exposed here as `currency`.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "concurrency", default)]
    #[serde_as(as = "DefaultOnNull")]
    pub currency: String,
    pub amount: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub beneficiary_name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub purpose: String,
}

/// Currency of a new account
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AccountType {
    #[default]
    UAH,
    USD,
    EUR,
}

impl AccountType {
    /// All account types in menu order
    pub fn all() -> &'static [AccountType] {
        &[AccountType::UAH, AccountType::USD, AccountType::EUR]
    }

    /// Currency code as shown and sent
    pub fn code(&self) -> &'static str {
        match self {
            AccountType::UAH => "UAH",
            AccountType::USD => "USD",
            AccountType::EUR => "EUR",
        }
    }
}

/// Create account request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub account_type: AccountType,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOMER_JSON: &str = r#"{
        "firstName": "Olena",
        "lastName": "Shevchenko",
        "email": "olena@example.com",
        "phoneNumber": "+380501234567",
        "accounts": [{
            "accountNumber": "UA213223130000026007233566001",
            "balance": 1520.5,
            "currency": "UAH",
            "status": "ACTIVE",
            "card": {
                "cardNumber": "4441111122223333",
                "expirationDate": "2029-08-31",
                "cvv": "123"
            },
            "transactions": [{
                "sender": {"firstName": "Olena", "lastName": "Shevchenko"},
                "receiver": {"firstName": "Taras", "lastName": "Bondar"},
                "amount": 250.0,
                "description": "Rent",
                "transactionDate": "2024-05-01T10:15:30",
                "transactionType": "TRANSFER",
                "currencyCode": "UAH",
                "status": "COMPLETED"
            }],
            "payments": [{
                "concurrency": "UAH",
                "amount": "99.90",
                "beneficiaryName": "Kyivstar",
                "purpose": "Mobile"
            }]
        }]
    }"#;

    #[test]
    fn test_customer_document_deserializes() {
        let customer: CustomerData = serde_json::from_str(CUSTOMER_JSON).unwrap();

        assert_eq!(customer.first_name, "Olena");
        assert_eq!(customer.accounts.len(), 1);

        let account = &customer.accounts[0];
        assert_eq!(account.card.cvv, "123");
        assert_eq!(account.transactions[0].receiver.last_name, "Bondar");
        assert_eq!(account.payments[0].currency, "UAH");
        assert_eq!(account.payments[0].beneficiary_name, "Kyivstar");
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let body = r#"{"firstName":"A","lastName":"B"}"#;
        let customer: CustomerData = serde_json::from_str(body).unwrap();
        assert!(customer.accounts.is_empty());
        assert_eq!(customer.email, "");
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let body = r#"{
            "firstName": "Olena",
            "lastName": "Shevchenko",
            "email": null,
            "phoneNumber": null,
            "accounts": [{
                "accountNumber": "UA213223130000026007233566001",
                "balance": 10.0,
                "currency": "UAH",
                "status": null,
                "card": null,
                "transactions": [{
                    "sender": null,
                    "receiver": {"firstName": "Taras", "lastName": "Bondar"},
                    "amount": 5.0,
                    "description": null,
                    "transactionDate": "2024-05-01T10:15:30",
                    "transactionType": null,
                    "currencyCode": null,
                    "status": null
                }],
                "payments": [{
                    "concurrency": null,
                    "amount": "1.00",
                    "beneficiaryName": null,
                    "purpose": null
                }]
            }]
        }"#;
        let customer: CustomerData = serde_json::from_str(body).unwrap();

        assert_eq!(customer.email, "");
        let account = &customer.accounts[0];
        assert_eq!(account.card, Card::default());
        assert_eq!(account.transactions[0].description, "");
        assert_eq!(account.transactions[0].sender, Party::default());
        assert_eq!(account.payments[0].currency, "");

        let empty: CustomerData =
            serde_json::from_str(r#"{"firstName":"A","lastName":"B","accounts":null}"#).unwrap();
        assert!(empty.accounts.is_empty());
    }

    #[test]
    fn test_is_party_matches_full_name() {
        let customer: CustomerData = serde_json::from_str(CUSTOMER_JSON).unwrap();
        let tx = &customer.accounts[0].transactions[0];
        assert!(customer.is_party(&tx.sender));
        assert!(!customer.is_party(&tx.receiver));
    }

    #[test]
    fn test_create_account_request_wire_format() {
        let request = CreateAccountRequest { account_type: AccountType::USD };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"accountType":"USD"}"#);
    }

    #[test]
    fn test_transaction_occurred_at() {
        let customer: CustomerData = serde_json::from_str(CUSTOMER_JSON).unwrap();
        let when = customer.accounts[0].transactions[0].occurred_at().unwrap();
        assert_eq!(when.to_string(), "2024-05-01 10:15:30");
    }
}

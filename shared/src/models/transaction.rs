use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::plain_number;
use crate::query::{FilterField, FilterInput, Record};

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A financial transaction row as shown on the transactions page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user: String,
    pub amount: f64,
    pub status: TransactionStatus,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Record for Transaction {
    const FIELDS: &'static [&'static str] = &["id", "user", "amount", "status", "date", "type"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "user" => Some(Cow::Borrowed(&self.user)),
            "amount" => Some(Cow::Owned(plain_number(self.amount))),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            "date" => Some(Cow::Owned(self.date.format("%Y-%m-%d").to_string())),
            "type" => Some(Cow::Borrowed(self.kind.as_str())),
            _ => None,
        }
    }
}

/// Filter bar of the transactions page.
pub const TRANSACTION_FILTERS: &[FilterField] = &[
    FilterField {
        key: "status",
        label: "Status",
        field: "status",
        input: FilterInput::Select {
            options: &["completed", "pending", "failed"],
        },
    },
    FilterField {
        key: "type",
        label: "Type",
        field: "type",
        input: FilterInput::Select {
            options: &["deposit", "withdrawal", "transfer"],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Transaction {
        serde_json::from_str(
            r#"{"id":"TXN001","user":"John Smith","amount":2500,"status":"completed","date":"2024-01-20","type":"deposit"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_transaction_deserializes_original_shape() {
        let txn = sample();
        assert_eq!(txn.kind, TransactionType::Deposit);
        assert_eq!(txn.status, TransactionStatus::Completed);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 1, 20).unwrap());
    }

    #[test]
    fn test_transaction_fields() {
        let txn = sample();
        assert_eq!(txn.field("amount").as_deref(), Some("2500"));
        assert_eq!(txn.field("date").as_deref(), Some("2024-01-20"));
        assert_eq!(txn.field("type").as_deref(), Some("deposit"));
        assert_eq!(txn.field("nope"), None);
        for field in Transaction::FIELDS {
            assert!(txn.field(field).is_some(), "{} should be present", field);
        }
    }
}

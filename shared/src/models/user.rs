use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::display::plain_number;
use crate::query::{FilterField, FilterInput, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer account row as shown on the users page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub join_date: NaiveDate,
    pub total_spent: f64,
}

impl Record for User {
    const FIELDS: &'static [&'static str] =
        &["id", "name", "email", "status", "joinDate", "totalSpent"];

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "email" => Some(Cow::Borrowed(&self.email)),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            "joinDate" => Some(Cow::Owned(self.join_date.format("%Y-%m-%d").to_string())),
            "totalSpent" => Some(Cow::Owned(plain_number(self.total_spent))),
            _ => None,
        }
    }
}

/// Filter bar of the users page. The search box matches against `name`.
pub const USER_FILTERS: &[FilterField] = &[
    FilterField {
        key: "searchTerm",
        label: "Search Name",
        field: "name",
        input: FilterInput::Text {
            placeholder: "Filter by name...",
        },
    },
    FilterField {
        key: "status",
        label: "Status",
        field: "status",
        input: FilterInput::Select {
            options: &["active", "inactive"],
        },
    },
];

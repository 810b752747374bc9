//! Table cell formatting.
//!
//! Every column declares a [`ColumnKind`]; each kind owns exactly one
//! formatter that turns a record's raw field value into a [`Cell`]. The
//! frontend only has to know how to draw each cell shape.

use crate::query::Record;

/// Emphasis applied to plain text cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Normal,
    Strong,
    Code,
    Muted,
}

/// Colour family of a badge or pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// A formatted table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Plain { text: String, style: TextStyle },
    /// Bordered status badge.
    Badge { label: String, tone: Tone },
    /// Borderless category pill; untinted when the category is unknown.
    Pill { label: String, tone: Option<Tone> },
    Link { href: String, label: String },
}

impl Cell {
    pub fn empty() -> Self {
        Cell::Plain {
            text: String::new(),
            style: TextStyle::Normal,
        }
    }

    fn plain(text: &str, style: TextStyle) -> Self {
        Cell::Plain {
            text: text.to_string(),
            style,
        }
    }
}

pub type CellFormatter = fn(&str) -> Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Strong,
    Code,
    Date,
    Currency,
    Status,
    Category,
    Email,
}

impl ColumnKind {
    pub fn formatter(self) -> CellFormatter {
        match self {
            ColumnKind::Text => format_text,
            ColumnKind::Strong => format_strong,
            ColumnKind::Code => format_code,
            ColumnKind::Date => format_date,
            ColumnKind::Currency => format_currency_cell,
            ColumnKind::Status => format_status,
            ColumnKind::Category => format_category,
            ColumnKind::Email => format_email,
        }
    }
}

/// A data-table column bound to a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    /// Formats this column's value for `record`. A missing field renders
    /// as an empty cell.
    pub fn render<R: Record>(&self, record: &R) -> Cell {
        record
            .field(self.key)
            .map(|value| (self.kind.formatter())(value.as_ref()))
            .unwrap_or_else(Cell::empty)
    }
}

pub const TRANSACTION_COLUMNS: &[Column] = &[
    Column { key: "id", label: "Transaction ID", kind: ColumnKind::Code },
    Column { key: "user", label: "User", kind: ColumnKind::Strong },
    Column { key: "amount", label: "Amount", kind: ColumnKind::Currency },
    Column { key: "type", label: "Type", kind: ColumnKind::Category },
    Column { key: "status", label: "Status", kind: ColumnKind::Status },
    Column { key: "date", label: "Date", kind: ColumnKind::Date },
];

pub const USER_COLUMNS: &[Column] = &[
    Column { key: "name", label: "User", kind: ColumnKind::Strong },
    Column { key: "email", label: "Email", kind: ColumnKind::Email },
    Column { key: "status", label: "Status", kind: ColumnKind::Status },
    Column { key: "joinDate", label: "Join Date", kind: ColumnKind::Date },
    Column { key: "totalSpent", label: "Total Spent", kind: ColumnKind::Currency },
];

fn format_text(value: &str) -> Cell {
    Cell::plain(value, TextStyle::Normal)
}

fn format_strong(value: &str) -> Cell {
    Cell::plain(value, TextStyle::Strong)
}

fn format_code(value: &str) -> Cell {
    Cell::plain(value, TextStyle::Code)
}

fn format_date(value: &str) -> Cell {
    Cell::plain(value, TextStyle::Muted)
}

fn format_currency_cell(value: &str) -> Cell {
    let text = value
        .parse::<f64>()
        .map(format_currency)
        .unwrap_or_else(|_| value.to_string());
    Cell::plain(&text, TextStyle::Strong)
}

fn format_status(value: &str) -> Cell {
    Cell::Badge {
        label: capitalize(value),
        tone: status_tone(value),
    }
}

fn format_category(value: &str) -> Cell {
    Cell::Pill {
        label: capitalize(value),
        tone: category_tone(value),
    }
}

fn format_email(value: &str) -> Cell {
    Cell::Link {
        href: format!("mailto:{}", value),
        label: value.to_string(),
    }
}

pub fn status_tone(status: &str) -> Tone {
    match status {
        "completed" | "active" => Tone::Success,
        "pending" => Tone::Warning,
        "failed" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

pub fn category_tone(category: &str) -> Option<Tone> {
    match category {
        "deposit" => Some(Tone::Success),
        "withdrawal" => Some(Tone::Danger),
        "transfer" => Some(Tone::Info),
        _ => None,
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dollar amount with thousands separators. Whole amounts carry no
/// decimals, fractional ones carry two.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if amount < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        out.push_str(&format!(".{:02}", fraction));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Numeric field value as matched and displayed before formatting.
pub(crate) fn plain_number(value: f64) -> String {
    value.to_string()
}

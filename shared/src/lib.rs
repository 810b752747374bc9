pub mod models {
    pub mod auth;
    pub mod analytics;
    pub mod settings;
    pub mod transaction;
    pub mod user;
}

pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod navigation;
pub mod query;
pub mod session;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use config::DashboardConfig;
pub use data::Snapshot;
pub use session::{KeyValueStore, MemoryStore, SessionService, StorageError};

// Re-export models
pub use models::{
    auth::{AuthenticatedUser, LoginRequest},
    analytics::{ActivityPoint, ChartData, KeyMetric, Metric, Period, RevenuePoint, Trend},
    settings::{Language, NotificationSettings, Theme},
    transaction::{Transaction, TransactionStatus, TransactionType, TRANSACTION_FILTERS},
    user::{User, UserStatus, USER_FILTERS},
};

// Re-export the table pipeline
pub use query::{
    filter, paginate, FilterField, FilterSpec, FilterValues, Page, PageRequest, PageSize, Record,
    TableAction, TableQuery,
};
pub use display::{Cell, Column, ColumnKind, Tone, TRANSACTION_COLUMNS, USER_COLUMNS};
pub use navigation::{authorize, Access, View};

//! Static dashboard data compiled into the binary.

use log::debug;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::analytics::{ChartData, KeyMetric, Metric};
use crate::models::transaction::Transaction;
use crate::models::user::User;

const SNAPSHOT_JSON: &str = include_str!("../data/snapshot.json");

static SNAPSHOT: OnceCell<Snapshot> = OnceCell::new();

/// Every record and figure the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub users: Vec<User>,
    pub metrics: Vec<Metric>,
    pub charts: ChartData,
    pub key_metrics: Vec<KeyMetric>,
}

impl Snapshot {
    /// Parses the embedded snapshot.
    pub fn load() -> Result<Self> {
        Self::from_json(SNAPSHOT_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;
        debug!(
            "Loaded snapshot: {} transactions, {} users",
            snapshot.transactions.len(),
            snapshot.users.len()
        );
        Ok(snapshot)
    }

    /// The embedded snapshot, parsed on first use and kept for the life of
    /// the process.
    pub fn shared() -> Result<&'static Snapshot> {
        SNAPSHOT.get_or_try_init(Self::load)
    }
}

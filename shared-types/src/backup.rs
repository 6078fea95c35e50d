use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::activity::ActivityEntry;
use crate::expense::Expense;
use crate::payment::Payment;
use crate::settings::AppSettings;
use crate::tenant::Tenant;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BackupData {
    pub tenants: Vec<Tenant>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    #[serde(default)]
    pub settings: Option<AppSettings>,
}

/// Downloadable/restorable snapshot of every collection. Restoring
/// replaces the in-memory collections wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BackupDocument {
    pub version: String,
    pub timestamp: DateTime<Utc>,
    pub data: BackupData,
}

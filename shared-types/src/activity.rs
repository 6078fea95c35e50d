use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ActivityType {
    Add,
    Edit,
    Delete,
    Payment,
    Notification,
    Report,
    Backup,
    Restore,
    Export,
    Import,
    Info,
}

/// One line in the recent-activity feed. The feed keeps the 100 most
/// recent entries; older ones are evicted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub message: String,
    pub activity_type: ActivityType,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityEntry>,
}

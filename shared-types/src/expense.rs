use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ExpenseCategory {
    Electricity,
    Elevator,
    Cleaning,
    Gardening,
    Maintenance,
    Antenna,
    Water,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 8] = [
        ExpenseCategory::Electricity,
        ExpenseCategory::Elevator,
        ExpenseCategory::Cleaning,
        ExpenseCategory::Gardening,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Antenna,
        ExpenseCategory::Water,
        ExpenseCategory::Other,
    ];
}

/// A building expense, independent of tenants and the dues ledger
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    pub paid_by: Option<String>,
    pub notes: Option<String>,
    /// Base64-encoded receipt photo, if one was attached
    pub receipt_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateExpenseRequest {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    pub paid_by: Option<String>,
    pub notes: Option<String>,
    pub receipt_image: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateExpenseRequest {
    pub date: Option<NaiveDate>,
    pub category: Option<ExpenseCategory>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub paid_by: Option<String>,
    pub notes: Option<String>,
    pub receipt_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpensesResponse {
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
    pub count: usize,
}

/// Per-category totals plus current month/year rollups
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpenseSummary {
    pub categories: Vec<CategoryTotal>,
    pub monthly_total: f64,
    pub yearly_total: f64,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One cell of a tenant's 12-month tracking grid
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthStatus {
    /// 1-12
    pub month: u32,
    pub paid: bool,
    pub amount: f64,
    pub date: Option<NaiveDate>,
}

/// A tenant's dues picture for one selectable year
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct YearSummary {
    pub year: i32,
    pub months: Vec<MonthStatus>,
    pub paid_months: u32,
    pub paid_total: f64,
    /// monthly_amount x 12
    pub expected_total: f64,
    /// max(0, expected - paid)
    pub debt_total: f64,
    /// paid - expected, signed
    pub balance: f64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct ToggleMonthRequest {
    pub paid: bool,
}

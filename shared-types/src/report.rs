use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::tenant::Tenant;

/// Dashboard headline numbers. Requesting these re-runs the status
/// reconciler over every tenant first.
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Statistics {
    pub total_tenants: usize,
    pub paid_tenants: usize,
    /// Pending plus overdue, matching the dashboard card
    pub pending_tenants: usize,
    /// Ledger revenue for the current calendar month
    pub monthly_revenue: f64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentSummary {
    pub expected_total: f64,
    pub received_total: f64,
    pub debt_total: f64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyRevenuePoint {
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthlyRevenueResponse {
    pub points: Vec<MonthlyRevenuePoint>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DebtorsResponse {
    pub debtors: Vec<Tenant>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct PeriodReportQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PeriodReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub payment_count: usize,
    pub total_revenue: f64,
    pub average_payment: f64,
}

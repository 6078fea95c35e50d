use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum PaymentMethod {
    Cash,
    Check,
    Transfer,
    Credit,
    Other,
}

/// The dues month a ledger entry covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthRef {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

/// A single entry in the append-only dues ledger.
///
/// The ledger is the only source of truth for received revenue; the
/// monthly tracking grid and all aggregates are derived from it.
/// `period` names the dues month the entry covers. Annual payments
/// carry no period: they cover a rolling year via
/// `Tenant::annual_payment_until` and never mark individual months.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Payment {
    pub id: Uuid,
    /// Reference by id only; deleting a tenant does not cascade here
    pub tenant_id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub notes: String,
    pub is_annual: bool,
    pub months_covered: Option<u32>,
    pub period: Option<MonthRef>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct RecordPaymentRequest {
    pub tenant_id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct AnnualPaymentRequest {
    pub tenant_id: Uuid,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentsResponse {
    pub payments: Vec<Payment>,
}

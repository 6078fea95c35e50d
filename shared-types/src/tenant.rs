use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Payment standing of a tenant, derived from the dues ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum TenantStatus {
    Paid,
    Pending,
    Overdue,
}

/// A unit occupant tracked for recurring building dues
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tenant {
    pub id: Uuid,
    /// Apartment label, unique within the building
    pub apartment: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Monthly dues in currency units
    pub monthly_amount: f64,
    pub status: TenantStatus,
    pub last_payment: Option<NaiveDate>,
    /// Set when an annual payment covers dues until this date
    pub annual_payment_until: Option<NaiveDate>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CreateTenantRequest {
    pub apartment: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub monthly_amount: f64,
    pub status: Option<TenantStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct UpdateTenantRequest {
    pub apartment: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub monthly_amount: Option<f64>,
    pub status: Option<TenantStatus>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TenantsResponse {
    pub tenants: Vec<Tenant>,
}

/// Tenant ids targeted by a bulk action (mark paid, delete)
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct BulkTenantsRequest {
    pub tenant_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BulkActionResponse {
    pub affected: usize,
}

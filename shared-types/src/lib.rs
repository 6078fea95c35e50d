use serde::{Deserialize, Serialize};

pub mod activity;
pub mod backup;
pub mod expense;
pub mod import;
pub mod payment;
pub mod report;
pub mod settings;
pub mod tenant;
pub mod tracking;

pub use activity::{ActivitiesResponse, ActivityEntry, ActivityType};
pub use backup::{BackupData, BackupDocument};
pub use expense::{
    CategoryTotal, CreateExpenseRequest, Expense, ExpenseCategory, ExpenseSummary,
    ExpensesResponse, UpdateExpenseRequest,
};
pub use import::{CsvImportReport, CsvImportRequest, CsvRowIssue};
pub use payment::{
    AnnualPaymentRequest, MonthRef, Payment, PaymentMethod, PaymentsResponse,
    RecordPaymentRequest,
};
pub use report::{
    DebtorsResponse, MonthlyRevenuePoint, MonthlyRevenueResponse, PaymentSummary, PeriodReport,
    PeriodReportQuery, Statistics,
};
pub use settings::AppSettings;
pub use tenant::{
    BulkActionResponse, BulkTenantsRequest, CreateTenantRequest, Tenant, TenantStatus,
    TenantsResponse, UpdateTenantRequest,
};
pub use tracking::{MonthStatus, ToggleMonthRequest, YearSummary};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

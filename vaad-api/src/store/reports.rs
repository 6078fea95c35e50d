use chrono::{Datelike, Utc};
use shared_types::{
    MonthlyRevenuePoint, PaymentSummary, PeriodReport, PeriodReportQuery, Statistics, Tenant,
    TenantStatus,
};

use super::{Store, StoreError, StoreResult};

impl Store {
    /// Dashboard headline numbers. Statuses are re-derived from the
    /// ledger before counting, so stale mutation-set statuses never
    /// leak into the dashboard.
    pub fn statistics(&self) -> Statistics {
        self.refresh_statuses();

        let state = self.read();
        let today = Utc::now().date_naive();

        let paid_tenants = state
            .tenants
            .iter()
            .filter(|t| t.status == TenantStatus::Paid)
            .count();

        let monthly_revenue = state
            .payments
            .iter()
            .filter(|p| p.date.year() == today.year() && p.date.month() == today.month())
            .map(|p| p.amount)
            .sum();

        Statistics {
            total_tenants: state.tenants.len(),
            paid_tenants,
            pending_tenants: state.tenants.len() - paid_tenants,
            monthly_revenue,
        }
    }

    /// Expected versus received for the current calendar month
    pub fn payment_summary(&self) -> PaymentSummary {
        let state = self.read();
        let today = Utc::now().date_naive();

        let expected_total: f64 = state.tenants.iter().map(|t| t.monthly_amount).sum();
        let received_total: f64 = state
            .payments
            .iter()
            .filter(|p| p.date.year() == today.year() && p.date.month() == today.month())
            .map(|p| p.amount)
            .sum();

        PaymentSummary {
            expected_total,
            received_total,
            debt_total: (expected_total - received_total).max(0.0),
        }
    }

    /// Ledger revenue per month for the last six calendar months,
    /// oldest first, including the current one. Months with no payments
    /// appear as zero.
    pub fn monthly_revenue(&self) -> Vec<MonthlyRevenuePoint> {
        let state = self.read();
        let today = Utc::now().date_naive();

        let mut points = Vec::with_capacity(6);
        let (mut year, mut month) = (today.year(), today.month());

        for _ in 0..6 {
            let total = state
                .payments
                .iter()
                .filter(|p| p.date.year() == year && p.date.month() == month)
                .map(|p| p.amount)
                .sum();
            points.push(MonthlyRevenuePoint { year, month, total });

            if month == 1 {
                year -= 1;
                month = 12;
            } else {
                month -= 1;
            }
        }

        points.reverse();
        points
    }

    /// Tenants who have not paid the current month, per the reconciler
    pub fn debtors(&self) -> Vec<Tenant> {
        self.refresh_statuses();

        self.read()
            .tenants
            .iter()
            .filter(|t| t.status != TenantStatus::Paid)
            .cloned()
            .collect()
    }

    /// Revenue over an inclusive date range
    pub fn period_report(&self, query: PeriodReportQuery) -> StoreResult<PeriodReport> {
        if query.start_date > query.end_date {
            return Err(StoreError::Validation(vec![
                "start_date must not be after end_date".to_string(),
            ]));
        }

        let state = self.read();
        let in_range: Vec<f64> = state
            .payments
            .iter()
            .filter(|p| p.date >= query.start_date && p.date <= query.end_date)
            .map(|p| p.amount)
            .collect();

        let total_revenue: f64 = in_range.iter().sum();
        let average_payment = if in_range.is_empty() {
            0.0
        } else {
            total_revenue / in_range.len() as f64
        };

        Ok(PeriodReport {
            start_date: query.start_date,
            end_date: query.end_date,
            payment_count: in_range.len(),
            total_revenue,
            average_payment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::{date, tenant_request, test_store};
    use shared_types::{PaymentMethod, RecordPaymentRequest};

    #[test]
    fn test_statistics_rederives_statuses() {
        let (_dir, store) = test_store();
        let paid = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        store.create_tenant(tenant_request("2", 500.0)).unwrap();

        store
            .record_payment(RecordPaymentRequest {
                tenant_id: paid.id,
                amount: 500.0,
                date: Utc::now().date_naive(),
                method: PaymentMethod::Cash,
                notes: None,
            })
            .unwrap();

        let stats = store.statistics();
        assert_eq!(stats.total_tenants, 2);
        assert_eq!(stats.paid_tenants, 1);
        assert_eq!(stats.pending_tenants, 1);
        assert_eq!(stats.monthly_revenue, 500.0);
    }

    #[test]
    fn test_statistics_idempotent() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        store
            .record_payment(RecordPaymentRequest {
                tenant_id: tenant.id,
                amount: 500.0,
                date: Utc::now().date_naive(),
                method: PaymentMethod::Cash,
                notes: None,
            })
            .unwrap();

        let first = store.statistics();
        let second = store.statistics();
        assert_eq!(first.paid_tenants, second.paid_tenants);
        assert_eq!(first.monthly_revenue, second.monthly_revenue);
    }

    #[test]
    fn test_payment_summary_debt_never_negative() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();

        store
            .record_payment(RecordPaymentRequest {
                tenant_id: tenant.id,
                amount: 800.0,
                date: Utc::now().date_naive(),
                method: PaymentMethod::Cash,
                notes: None,
            })
            .unwrap();

        let summary = store.payment_summary();
        assert_eq!(summary.expected_total, 500.0);
        assert_eq!(summary.received_total, 800.0);
        assert_eq!(summary.debt_total, 0.0);
    }

    #[test]
    fn test_monthly_revenue_covers_six_months() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        store
            .record_payment(RecordPaymentRequest {
                tenant_id: tenant.id,
                amount: 500.0,
                date: Utc::now().date_naive(),
                method: PaymentMethod::Cash,
                notes: None,
            })
            .unwrap();

        let points = store.monthly_revenue();
        assert_eq!(points.len(), 6);

        let today = Utc::now().date_naive();
        let last = points.last().unwrap();
        assert_eq!((last.year, last.month), (today.year(), today.month()));
        assert_eq!(last.total, 500.0);
        assert_eq!(points[0].total, 0.0);
    }

    #[test]
    fn test_period_report_range_and_validation() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();

        for (month, amount) in [(1, 400.0), (2, 600.0), (5, 999.0)] {
            store
                .record_payment(RecordPaymentRequest {
                    tenant_id: tenant.id,
                    amount,
                    date: date(2025, month, 10),
                    method: PaymentMethod::Cash,
                    notes: None,
                })
                .unwrap();
        }

        let report = store
            .period_report(PeriodReportQuery {
                start_date: date(2025, 1, 1),
                end_date: date(2025, 3, 31),
            })
            .unwrap();
        assert_eq!(report.payment_count, 2);
        assert_eq!(report.total_revenue, 1000.0);
        assert_eq!(report.average_payment, 500.0);

        let err = store
            .period_report(PeriodReportQuery {
                start_date: date(2025, 4, 1),
                end_date: date(2025, 3, 1),
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_debtors_excludes_paid_tenants() {
        let (_dir, store) = test_store();
        let today = Utc::now().date_naive();

        let behind = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        let current = store.create_tenant(tenant_request("2", 500.0)).unwrap();
        store
            .toggle_month(current.id, today.year(), today.month(), true)
            .unwrap();

        let debtors = store.debtors();
        assert_eq!(debtors.len(), 1);
        assert_eq!(debtors[0].id, behind.id);
    }
}

use chrono::{Datelike, NaiveDate, Utc};
use shared_types::{Payment, TenantStatus};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::Store;

/// A dues month covered by the ledger
#[derive(Debug, Clone, Copy)]
pub struct MonthCoverage {
    pub amount: f64,
    pub date: NaiveDate,
}

/// Which months of `year` the ledger covers for one tenant. Annual
/// payments carry no period and never contribute here. When several
/// entries cover the same month the most recently appended wins.
pub fn month_coverage(
    payments: &[Payment],
    tenant_id: Uuid,
    year: i32,
) -> BTreeMap<u32, MonthCoverage> {
    let mut coverage = BTreeMap::new();

    for payment in payments {
        if payment.tenant_id != tenant_id || payment.is_annual {
            continue;
        }
        if let Some(period) = payment.period {
            if period.year == year {
                coverage.insert(
                    period.month,
                    MonthCoverage {
                        amount: payment.amount,
                        date: payment.date,
                    },
                );
            }
        }
    }

    coverage
}

/// Derive a tenant's status from its month coverage and the current date.
///
/// Current month covered: paid, with the covering entry's date as the
/// last payment. Otherwise any uncovered earlier month of the current
/// year means overdue; a clean slate up to now means pending. Prior
/// years are never consulted and never roll forward.
///
/// Returns the date only on the paid branch; the caller leaves the
/// tenant's last payment untouched otherwise.
pub fn derive_status(
    coverage: &BTreeMap<u32, MonthCoverage>,
    today: NaiveDate,
) -> (TenantStatus, Option<NaiveDate>) {
    let current_month = today.month();

    if let Some(entry) = coverage.get(&current_month) {
        return (TenantStatus::Paid, Some(entry.date));
    }

    let has_unpaid_previous = (1..current_month).any(|m| !coverage.contains_key(&m));
    if has_unpaid_previous {
        (TenantStatus::Overdue, None)
    } else {
        (TenantStatus::Pending, None)
    }
}

impl Store {
    /// Re-derive every tenant's status from the ledger. Runs on each
    /// statistics refresh and overrides whatever a mutation set since
    /// the last pass.
    pub fn refresh_statuses(&self) {
        let today = Utc::now().date_naive();
        let mut state = self.write();

        let coverage_per_tenant: Vec<_> = state
            .tenants
            .iter()
            .map(|t| month_coverage(&state.payments, t.id, today.year()))
            .collect();

        for (tenant, coverage) in state.tenants.iter_mut().zip(coverage_per_tenant) {
            let (status, last_payment) = derive_status(&coverage, today);
            tenant.status = status;
            if let Some(date) = last_payment {
                tenant.last_payment = Some(date);
            }
        }

        if let Err(e) = self.persist_data(&state) {
            tracing::warn!("Status refresh persisted with error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::date;
    use chrono::{DateTime, Utc};
    use shared_types::{MonthRef, PaymentMethod};

    fn ledger_entry(tenant_id: Uuid, year: i32, month: u32, amount: f64, day: u32) -> Payment {
        Payment {
            id: Uuid::new_v4(),
            tenant_id,
            amount,
            date: date(year, month, day),
            method: PaymentMethod::Transfer,
            notes: String::new(),
            is_annual: false,
            months_covered: None,
            period: Some(MonthRef::new(year, month)),
            created_at: DateTime::<Utc>::MIN_UTC,
        }
    }

    #[test]
    fn test_no_entries_in_march_is_overdue() {
        // Tenant with monthly dues and an empty ledger: months 1 and 2
        // are unpaid by March
        let coverage = month_coverage(&[], Uuid::new_v4(), 2025);
        let (status, last) = derive_status(&coverage, date(2025, 3, 15));

        assert_eq!(status, TenantStatus::Overdue);
        assert!(last.is_none());
    }

    #[test]
    fn test_no_entries_in_january_is_pending() {
        let coverage = month_coverage(&[], Uuid::new_v4(), 2025);
        let (status, _) = derive_status(&coverage, date(2025, 1, 10));

        assert_eq!(status, TenantStatus::Pending);
    }

    #[test]
    fn test_current_month_paid_wins_over_earlier_gaps() {
        let tenant_id = Uuid::new_v4();
        let payments = vec![ledger_entry(tenant_id, 2025, 3, 500.0, 5)];

        let coverage = month_coverage(&payments, tenant_id, 2025);
        let (status, last) = derive_status(&coverage, date(2025, 3, 20));

        assert_eq!(status, TenantStatus::Paid);
        assert_eq!(last, Some(date(2025, 3, 5)));
    }

    #[test]
    fn test_all_previous_months_paid_is_pending() {
        let tenant_id = Uuid::new_v4();
        let payments = vec![
            ledger_entry(tenant_id, 2025, 1, 500.0, 5),
            ledger_entry(tenant_id, 2025, 2, 500.0, 5),
        ];

        let coverage = month_coverage(&payments, tenant_id, 2025);
        let (status, _) = derive_status(&coverage, date(2025, 3, 20));

        assert_eq!(status, TenantStatus::Pending);
    }

    #[test]
    fn test_gap_in_previous_months_is_overdue() {
        let tenant_id = Uuid::new_v4();
        let payments = vec![
            ledger_entry(tenant_id, 2025, 1, 500.0, 5),
            // February missing
            ledger_entry(tenant_id, 2025, 4, 500.0, 5),
        ];

        let coverage = month_coverage(&payments, tenant_id, 2025);
        let (status, _) = derive_status(&coverage, date(2025, 5, 2));

        assert_eq!(status, TenantStatus::Overdue);
    }

    #[test]
    fn test_prior_year_debt_does_not_roll_forward() {
        let tenant_id = Uuid::new_v4();
        // Nothing paid in 2024 at all, January 2025 paid
        let payments = vec![ledger_entry(tenant_id, 2025, 1, 500.0, 3)];

        let coverage = month_coverage(&payments, tenant_id, 2025);
        let (status, last) = derive_status(&coverage, date(2025, 1, 10));

        assert_eq!(status, TenantStatus::Paid);
        assert_eq!(last, Some(date(2025, 1, 3)));
    }

    #[test]
    fn test_annual_payments_do_not_cover_months() {
        let tenant_id = Uuid::new_v4();
        let mut annual = ledger_entry(tenant_id, 2025, 1, 6000.0, 1);
        annual.is_annual = true;
        annual.months_covered = Some(12);
        annual.period = None;

        let coverage = month_coverage(&[annual], tenant_id, 2025);
        assert!(coverage.is_empty());

        let (status, _) = derive_status(&coverage, date(2025, 3, 1));
        assert_eq!(status, TenantStatus::Overdue);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let tenant_id = Uuid::new_v4();
        let payments = vec![ledger_entry(tenant_id, 2025, 2, 500.0, 5)];
        let today = date(2025, 3, 20);

        let coverage = month_coverage(&payments, tenant_id, 2025);
        let first = derive_status(&coverage, today);
        let second = derive_status(&coverage, today);

        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }
}

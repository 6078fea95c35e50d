use chrono::{Datelike, Utc};
use shared_types::{
    ActivityType, MonthRef, MonthStatus, Payment, PaymentMethod, Tenant, TenantStatus, YearSummary,
};
use uuid::Uuid;

use super::activity::log_activity;
use super::reconciler::month_coverage;
use super::{Store, StoreError, StoreResult};

impl Store {
    /// A tenant's 12-month grid and totals for any year. Years with no
    /// entries come back empty; nothing is ever created or deleted by
    /// viewing.
    pub fn year_summary(&self, tenant_id: Uuid, year: i32) -> StoreResult<YearSummary> {
        let state = self.read();

        let tenant = state
            .tenants
            .iter()
            .find(|t| t.id == tenant_id)
            .ok_or(StoreError::TenantNotFound)?;

        let coverage = month_coverage(&state.payments, tenant_id, year);

        let months: Vec<MonthStatus> = (1..=12)
            .map(|month| match coverage.get(&month) {
                Some(entry) => MonthStatus {
                    month,
                    paid: true,
                    amount: entry.amount,
                    date: Some(entry.date),
                },
                None => MonthStatus {
                    month,
                    paid: false,
                    amount: tenant.monthly_amount,
                    date: None,
                },
            })
            .collect();

        let paid_months = coverage.len() as u32;
        let paid_total: f64 = coverage.values().map(|e| e.amount).sum();
        let expected_total = tenant.monthly_amount * 12.0;
        let balance = paid_total - expected_total;

        Ok(YearSummary {
            year,
            months,
            paid_months,
            paid_total,
            expected_total,
            debt_total: (expected_total - paid_total).max(0.0),
            balance,
        })
    }

    /// Mark or unmark one month of one year as paid. Marking appends a
    /// ledger entry for that dues month (a no-op if already covered);
    /// unmarking removes the covering entries. Tenant status is not
    /// touched here; it refreshes on the next reconciler pass or an
    /// explicit save.
    pub fn toggle_month(
        &self,
        tenant_id: Uuid,
        year: i32,
        month: u32,
        paid: bool,
    ) -> StoreResult<()> {
        if !(1..=12).contains(&month) {
            return Err(StoreError::Validation(vec![format!(
                "month must be 1-12, got {month}"
            )]));
        }

        let mut state = self.write();

        let tenant = state
            .tenants
            .iter()
            .find(|t| t.id == tenant_id)
            .cloned()
            .ok_or(StoreError::TenantNotFound)?;

        let covered = month_coverage(&state.payments, tenant_id, year).contains_key(&month);

        if paid {
            if covered {
                return Ok(());
            }
            state.payments.push(Payment {
                id: Uuid::new_v4(),
                tenant_id,
                amount: tenant.monthly_amount,
                date: Utc::now().date_naive(),
                method: PaymentMethod::Other,
                notes: "Monthly tracking".to_string(),
                is_annual: false,
                months_covered: None,
                period: Some(MonthRef::new(year, month)),
                created_at: Utc::now(),
            });
        } else {
            if !covered {
                return Ok(());
            }
            state.payments.retain(|p| {
                !(p.tenant_id == tenant_id
                    && !p.is_annual
                    && p.period == Some(MonthRef::new(year, month)))
            });
        }

        self.persist_data(&state)?;
        Ok(())
    }

    /// Close out a tracking session: re-derive the tenant's status for
    /// the current real-world month only, whatever year was being
    /// viewed. An uncovered current month means pending here, never
    /// overdue.
    pub fn save_monthly_changes(&self, tenant_id: Uuid) -> StoreResult<Tenant> {
        let mut state = self.write();

        let index = state
            .tenants
            .iter()
            .position(|t| t.id == tenant_id)
            .ok_or(StoreError::TenantNotFound)?;

        let today = Utc::now().date_naive();
        let coverage = month_coverage(&state.payments, tenant_id, today.year());

        {
            let tenant = &mut state.tenants[index];
            match coverage.get(&today.month()) {
                Some(entry) => {
                    tenant.status = TenantStatus::Paid;
                    tenant.last_payment = Some(entry.date);
                }
                None => {
                    tenant.status = TenantStatus::Pending;
                }
            }
        }

        let tenant = state.tenants[index].clone();
        log_activity(
            &mut state,
            format!("Monthly tracking updated: {}", tenant.name),
            ActivityType::Edit,
        );

        self.persist_data(&state)?;
        Ok(tenant)
    }
}

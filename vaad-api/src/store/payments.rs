use chrono::{Datelike, Days, Utc};
use shared_types::{
    ActivityType, AnnualPaymentRequest, MonthRef, Payment, PaymentMethod, RecordPaymentRequest,
    TenantStatus,
};
use uuid::Uuid;

use super::activity::log_activity;
use super::{Store, StoreError, StoreResult};

impl Store {
    /// The ledger, optionally narrowed to one tenant, newest date first
    pub fn list_payments(&self, tenant_id: Option<Uuid>) -> Vec<Payment> {
        let state = self.read();
        let mut payments: Vec<Payment> = state
            .payments
            .iter()
            .filter(|p| tenant_id.map_or(true, |id| p.tenant_id == id))
            .cloned()
            .collect();
        payments.sort_by(|a, b| b.date.cmp(&a.date));
        payments
    }

    /// Append one ledger entry and force the tenant to paid. The tenant
    /// must exist; otherwise nothing changes.
    pub fn record_payment(&self, req: RecordPaymentRequest) -> StoreResult<Payment> {
        let mut state = self.write();

        let index = state
            .tenants
            .iter()
            .position(|t| t.id == req.tenant_id)
            .ok_or(StoreError::TenantNotFound)?;

        let payment = Payment {
            id: Uuid::new_v4(),
            tenant_id: req.tenant_id,
            amount: req.amount,
            date: req.date,
            method: req.method,
            notes: req.notes.unwrap_or_default(),
            is_annual: false,
            months_covered: None,
            period: Some(MonthRef::new(req.date.year(), req.date.month())),
            created_at: Utc::now(),
        };

        state.payments.push(payment.clone());

        let tenant = &mut state.tenants[index];
        tenant.status = TenantStatus::Paid;
        tenant.last_payment = Some(payment.date);
        let tenant_name = tenant.name.clone();

        log_activity(
            &mut state,
            format!("Payment recorded: {tenant_name} - {}", payment.amount),
            ActivityType::Payment,
        );

        self.persist_data(&state)?;
        Ok(payment)
    }

    /// Remove a ledger entry. If the owning tenant is left with no other
    /// payment dated in the current calendar month, its status resets to
    /// pending and its last payment is cleared.
    pub fn delete_payment(&self, id: Uuid) -> StoreResult<()> {
        let mut state = self.write();

        let payment = state
            .payments
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::PaymentNotFound)?;

        state.payments.retain(|p| p.id != id);

        let today = Utc::now().date_naive();
        let has_current_month_payment = state.payments.iter().any(|p| {
            p.tenant_id == payment.tenant_id
                && p.date.year() == today.year()
                && p.date.month() == today.month()
        });

        let mut reset_tenant = None;
        if let Some(tenant) = state
            .tenants
            .iter_mut()
            .find(|t| t.id == payment.tenant_id)
        {
            if !has_current_month_payment {
                tenant.status = TenantStatus::Pending;
                tenant.last_payment = None;
                reset_tenant = Some(tenant.name.clone());
            }
        }

        log_activity(
            &mut state,
            format!("Deleted payment of {}", payment.amount),
            ActivityType::Delete,
        );
        if let Some(name) = reset_tenant {
            log_activity(
                &mut state,
                format!("Status of {name} reset to pending after payment deletion"),
                ActivityType::Edit,
            );
        }

        self.persist_data(&state)?;
        Ok(())
    }

    /// Mark each tenant paid and push one ledger entry at its monthly
    /// amount, dated today. Unknown ids are skipped.
    pub fn bulk_mark_paid(&self, ids: &[Uuid]) -> StoreResult<usize> {
        let mut state = self.write();

        let today = Utc::now().date_naive();
        let mut marked = Vec::new();

        for id in ids {
            let Some(tenant) = state.tenants.iter_mut().find(|t| t.id == *id) else {
                continue;
            };

            tenant.status = TenantStatus::Paid;
            tenant.last_payment = Some(today);
            let (name, amount, tenant_id) =
                (tenant.name.clone(), tenant.monthly_amount, tenant.id);

            state.payments.push(Payment {
                id: Uuid::new_v4(),
                tenant_id,
                amount,
                date: today,
                method: PaymentMethod::Other,
                notes: "Marked paid from tenants view".to_string(),
                is_annual: false,
                months_covered: None,
                period: Some(MonthRef::new(today.year(), today.month())),
                created_at: Utc::now(),
            });

            marked.push((name, amount));
        }

        for (name, amount) in &marked {
            log_activity(
                &mut state,
                format!("Payment recorded for {name} - {amount}"),
                ActivityType::Payment,
            );
        }

        if !marked.is_empty() {
            self.persist_data(&state)?;
        }

        Ok(marked.len())
    }

    /// One transaction covering 12 months of dues. Does not mark the
    /// individual months; coverage is tracked via `annual_payment_until`.
    pub fn record_annual_payment(&self, req: AnnualPaymentRequest) -> StoreResult<Payment> {
        let mut state = self.write();

        let index = state
            .tenants
            .iter()
            .position(|t| t.id == req.tenant_id)
            .ok_or(StoreError::TenantNotFound)?;

        let annual_amount = state.tenants[index].monthly_amount * 12.0;
        let notes = match req.notes.as_deref() {
            Some(n) if !n.is_empty() => format!("Annual payment (12 months) - {n}"),
            _ => "Annual payment (12 months)".to_string(),
        };

        let payment = Payment {
            id: Uuid::new_v4(),
            tenant_id: req.tenant_id,
            amount: annual_amount,
            date: req.date,
            method: req.method,
            notes,
            is_annual: true,
            months_covered: Some(12),
            period: None,
            created_at: Utc::now(),
        };

        state.payments.push(payment.clone());

        let until = req
            .date
            .with_year(req.date.year() + 1)
            .unwrap_or_else(|| req.date + Days::new(365));

        let tenant = &mut state.tenants[index];
        tenant.status = TenantStatus::Paid;
        tenant.last_payment = Some(req.date);
        tenant.annual_payment_until = Some(until);
        let tenant_name = tenant.name.clone();

        log_activity(
            &mut state,
            format!("Annual payment recorded: {tenant_name} - {annual_amount}"),
            ActivityType::Payment,
        );

        self.persist_data(&state)?;
        Ok(payment)
    }

    /// Empties the ledger. Month coverage derives from the ledger, so
    /// tracking grids empty out with it.
    pub fn clear_payments_history(&self) -> StoreResult<()> {
        let mut state = self.write();

        state.payments.clear();
        log_activity(&mut state, "Payments history cleared", ActivityType::Delete);

        self.persist_data(&state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::{tenant_request, test_store};
    use chrono::NaiveDate;

    fn payment_request(tenant_id: Uuid, amount: f64, date: NaiveDate) -> RecordPaymentRequest {
        RecordPaymentRequest {
            tenant_id,
            amount,
            date,
            method: PaymentMethod::Transfer,
            notes: None,
        }
    }

    #[test]
    fn test_record_payment_appends_one_entry_and_sets_paid() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();

        let before = store.list_payments(None).len();
        let date = Utc::now().date_naive();
        let payment = store
            .record_payment(payment_request(tenant.id, 500.0, date))
            .unwrap();

        assert_eq!(store.list_payments(None).len(), before + 1);
        assert_eq!(payment.period, Some(MonthRef::new(date.year(), date.month())));

        let tenant = store.get_tenant(tenant.id).unwrap();
        assert_eq!(tenant.status, TenantStatus::Paid);
        assert_eq!(tenant.last_payment, Some(date));
    }

    #[test]
    fn test_record_payment_unknown_tenant_leaves_state_untouched() {
        let (_dir, store) = test_store();
        store.create_tenant(tenant_request("1", 500.0)).unwrap();

        let err = store
            .record_payment(payment_request(
                Uuid::new_v4(),
                500.0,
                Utc::now().date_naive(),
            ))
            .unwrap_err();

        assert!(matches!(err, StoreError::TenantNotFound));
        assert!(store.list_payments(None).is_empty());
    }

    #[test]
    fn test_delete_sole_current_month_payment_resets_status() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();

        let payment = store
            .record_payment(payment_request(tenant.id, 500.0, Utc::now().date_naive()))
            .unwrap();
        assert_eq!(store.get_tenant(tenant.id).unwrap().status, TenantStatus::Paid);

        store.delete_payment(payment.id).unwrap();

        let tenant = store.get_tenant(tenant.id).unwrap();
        assert_eq!(tenant.status, TenantStatus::Pending);
        assert!(tenant.last_payment.is_none());
        assert!(store.list_payments(None).is_empty());
    }

    #[test]
    fn test_delete_payment_keeps_paid_when_another_current_month_entry_exists() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();

        let today = Utc::now().date_naive();
        let first = store
            .record_payment(payment_request(tenant.id, 250.0, today))
            .unwrap();
        store
            .record_payment(payment_request(tenant.id, 250.0, today))
            .unwrap();

        store.delete_payment(first.id).unwrap();

        let tenant = store.get_tenant(tenant.id).unwrap();
        assert_eq!(tenant.status, TenantStatus::Paid);
        assert!(tenant.last_payment.is_some());
    }

    #[test]
    fn test_bulk_mark_paid_creates_one_entry_per_tenant() {
        let (_dir, store) = test_store();
        let a = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        let b = store.create_tenant(tenant_request("2", 600.0)).unwrap();

        let marked = store
            .bulk_mark_paid(&[a.id, b.id, Uuid::new_v4()])
            .unwrap();

        assert_eq!(marked, 2);
        assert_eq!(store.list_payments(None).len(), 2);
        assert_eq!(store.get_tenant(a.id).unwrap().status, TenantStatus::Paid);
        assert_eq!(store.list_payments(Some(b.id))[0].amount, 600.0);
    }

    #[test]
    fn test_annual_payment_is_twelve_times_monthly() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let payment = store
            .record_annual_payment(AnnualPaymentRequest {
                tenant_id: tenant.id,
                date,
                method: PaymentMethod::Check,
                notes: None,
            })
            .unwrap();

        assert_eq!(payment.amount, 6000.0);
        assert!(payment.is_annual);
        assert_eq!(payment.months_covered, Some(12));
        assert!(payment.period.is_none());
        assert_eq!(store.list_payments(None).len(), 1);

        let tenant = store.get_tenant(tenant.id).unwrap();
        assert_eq!(tenant.status, TenantStatus::Paid);
        assert_eq!(tenant.last_payment, Some(date));
        assert_eq!(
            tenant.annual_payment_until,
            Some(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
        );
    }

    #[test]
    fn test_clear_history_empties_ledger() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        store
            .record_payment(payment_request(tenant.id, 500.0, Utc::now().date_naive()))
            .unwrap();

        store.clear_payments_history().unwrap();
        assert!(store.list_payments(None).is_empty());
    }
}

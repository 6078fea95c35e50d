use chrono::{Datelike, Utc};
use shared_types::{
    ActivityType, CreateTenantRequest, CsvImportReport, CsvRowIssue, MonthRef, Payment,
    PaymentMethod, Tenant, TenantStatus, UpdateTenantRequest,
};
use uuid::Uuid;

use super::activity::log_activity;
use super::{AppState, Store, StoreError, StoreResult};
use crate::helpers::csv_import;
use crate::helpers::validation::{apartment_taken, validate_tenant_fields};

/// Auto-created ledger entry when a tenant is created or edited straight
/// to paid status
fn auto_payment(state: &mut AppState, tenant: &Tenant, notes: &str) {
    let today = Utc::now().date_naive();

    state.payments.push(Payment {
        id: Uuid::new_v4(),
        tenant_id: tenant.id,
        amount: tenant.monthly_amount,
        date: today,
        method: PaymentMethod::Other,
        notes: notes.to_string(),
        is_annual: false,
        months_covered: None,
        period: Some(MonthRef::new(today.year(), today.month())),
        created_at: Utc::now(),
    });

    log_activity(
        state,
        format!(
            "Payment recorded automatically for {} - {}",
            tenant.name, tenant.monthly_amount
        ),
        ActivityType::Payment,
    );
}

impl Store {
    pub fn list_tenants(&self) -> Vec<Tenant> {
        self.read().tenants.clone()
    }

    pub fn get_tenant(&self, id: Uuid) -> StoreResult<Tenant> {
        self.read()
            .tenants
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::TenantNotFound)
    }

    pub fn create_tenant(&self, req: CreateTenantRequest) -> StoreResult<Tenant> {
        let mut state = self.write();

        let mut errors =
            validate_tenant_fields(&req.apartment, &req.name, &req.phone, req.email.as_deref());
        if apartment_taken(&state.tenants, &req.apartment, None) {
            errors.push("apartment already exists".to_string());
        }
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let status = req.status.unwrap_or(TenantStatus::Pending);
        let tenant = Tenant {
            id: Uuid::new_v4(),
            apartment: req.apartment,
            name: req.name,
            phone: req.phone,
            email: req.email,
            monthly_amount: req.monthly_amount,
            status,
            last_payment: if status == TenantStatus::Paid {
                Some(Utc::now().date_naive())
            } else {
                None
            },
            annual_payment_until: None,
            notes: req.notes.unwrap_or_default(),
            created_at: Utc::now(),
            updated_at: None,
        };

        state.tenants.push(tenant.clone());
        log_activity(
            &mut state,
            format!("Added tenant: {} (apartment {})", tenant.name, tenant.apartment),
            ActivityType::Add,
        );

        if status == TenantStatus::Paid {
            auto_payment(&mut state, &tenant, "Initial payment - new tenant marked as paid");
        }

        self.persist_data(&state)?;
        Ok(tenant)
    }

    pub fn update_tenant(&self, id: Uuid, req: UpdateTenantRequest) -> StoreResult<Tenant> {
        let mut state = self.write();

        let index = state
            .tenants
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TenantNotFound)?;

        let apartment = req
            .apartment
            .clone()
            .unwrap_or_else(|| state.tenants[index].apartment.clone());
        let name = req
            .name
            .clone()
            .unwrap_or_else(|| state.tenants[index].name.clone());
        let phone = req
            .phone
            .clone()
            .unwrap_or_else(|| state.tenants[index].phone.clone());
        let email = req
            .email
            .clone()
            .or_else(|| state.tenants[index].email.clone());

        let mut errors = validate_tenant_fields(&apartment, &name, &phone, email.as_deref());
        if apartment_taken(&state.tenants, &apartment, Some(id)) {
            errors.push("apartment already exists".to_string());
        }
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let old_status = state.tenants[index].status;
        let new_status = req.status.unwrap_or(old_status);
        let newly_paid = old_status != TenantStatus::Paid && new_status == TenantStatus::Paid;

        {
            let tenant = &mut state.tenants[index];
            tenant.apartment = apartment;
            tenant.name = name;
            tenant.phone = phone;
            tenant.email = email;
            if let Some(amount) = req.monthly_amount {
                tenant.monthly_amount = amount;
            }
            if let Some(notes) = req.notes {
                tenant.notes = notes;
            }
            tenant.status = new_status;
            if newly_paid {
                tenant.last_payment = Some(Utc::now().date_naive());
            }
            tenant.updated_at = Some(Utc::now());
        }

        let tenant = state.tenants[index].clone();
        log_activity(
            &mut state,
            format!("Updated tenant: {} (apartment {})", tenant.name, tenant.apartment),
            ActivityType::Edit,
        );

        if newly_paid {
            auto_payment(&mut state, &tenant, "Payment from tenant edit - status set to paid");
        }

        self.persist_data(&state)?;
        Ok(tenant)
    }

    /// Deletes the tenant only. Ledger entries referencing it are kept;
    /// there is no cascading integrity.
    pub fn delete_tenant(&self, id: Uuid) -> StoreResult<()> {
        let mut state = self.write();

        let tenant = state
            .tenants
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::TenantNotFound)?;

        state.tenants.retain(|t| t.id != id);
        log_activity(
            &mut state,
            format!("Deleted tenant: {} (apartment {})", tenant.name, tenant.apartment),
            ActivityType::Delete,
        );

        self.persist_data(&state)?;
        Ok(())
    }

    /// Unknown ids are skipped; returns how many tenants were removed
    pub fn bulk_delete_tenants(&self, ids: &[Uuid]) -> StoreResult<usize> {
        let mut state = self.write();

        let before = state.tenants.len();
        state.tenants.retain(|t| !ids.contains(&t.id));
        let removed = before - state.tenants.len();

        if removed > 0 {
            log_activity(
                &mut state,
                format!("Deleted {removed} tenants"),
                ActivityType::Delete,
            );
            self.persist_data(&state)?;
        }

        Ok(removed)
    }

    /// Validate CSV rows and import the valid ones. Invalid rows are
    /// reported with their line numbers and never block the rest.
    pub fn import_tenants_csv(&self, csv: &str, dry_run: bool) -> StoreResult<CsvImportReport> {
        let mut state = self.write();

        let rows = csv_import::parse_tenant_rows(csv, state.settings.default_amount)
            .map_err(|e| StoreError::Validation(vec![format!("unreadable CSV: {e}")]))?;

        let mut report = CsvImportReport {
            imported: 0,
            skipped: 0,
            invalid: Vec::new(),
        };

        for row in rows {
            let mut errors =
                validate_tenant_fields(&row.apartment, &row.name, &row.phone, row.email.as_deref());
            if apartment_taken(&state.tenants, &row.apartment, None) {
                errors.push("apartment already exists".to_string());
            }

            if !errors.is_empty() {
                report.invalid.push(CsvRowIssue {
                    line: row.line,
                    apartment: row.apartment,
                    errors,
                });
                report.skipped += 1;
                continue;
            }

            report.imported += 1;
            if dry_run {
                continue;
            }

            state.tenants.push(Tenant {
                id: Uuid::new_v4(),
                apartment: row.apartment,
                name: row.name,
                phone: row.phone,
                email: row.email,
                monthly_amount: row.monthly_amount,
                status: TenantStatus::Pending,
                last_payment: None,
                annual_payment_until: None,
                notes: String::new(),
                created_at: Utc::now(),
                updated_at: None,
            });
        }

        if !dry_run && report.imported > 0 {
            log_activity(
                &mut state,
                format!("Imported {} tenants from CSV", report.imported),
                ActivityType::Import,
            );
            self.persist_data(&state)?;
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testutil::{tenant_request, test_store};

    #[test]
    fn test_create_and_list() {
        let (_dir, store) = test_store();

        let tenant = store.create_tenant(tenant_request("1", 500.0)).unwrap();
        assert_eq!(tenant.status, TenantStatus::Pending);
        assert!(tenant.last_payment.is_none());
        assert_eq!(store.list_tenants().len(), 1);
    }

    #[test]
    fn test_duplicate_apartment_rejected_without_side_effects() {
        let (_dir, store) = test_store();
        store.create_tenant(tenant_request("1", 500.0)).unwrap();

        let err = store.create_tenant(tenant_request("1", 600.0)).unwrap_err();
        match err {
            StoreError::Validation(errors) => {
                assert!(errors.contains(&"apartment already exists".to_string()))
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        assert_eq!(store.list_tenants().len(), 1);
    }

    #[test]
    fn test_create_as_paid_appends_ledger_entry() {
        let (_dir, store) = test_store();

        let mut req = tenant_request("2", 450.0);
        req.status = Some(TenantStatus::Paid);
        let tenant = store.create_tenant(req).unwrap();

        assert_eq!(tenant.status, TenantStatus::Paid);
        assert!(tenant.last_payment.is_some());

        let payments = store.list_payments(None);
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].tenant_id, tenant.id);
        assert_eq!(payments[0].amount, 450.0);
    }

    #[test]
    fn test_edit_to_paid_appends_ledger_entry() {
        let (_dir, store) = test_store();
        let tenant = store.create_tenant(tenant_request("3", 500.0)).unwrap();
        assert!(store.list_payments(None).is_empty());

        let updated = store
            .update_tenant(
                tenant.id,
                UpdateTenantRequest {
                    apartment: None,
                    name: None,
                    phone: None,
                    email: None,
                    monthly_amount: None,
                    status: Some(TenantStatus::Paid),
                    notes: None,
                },
            )
            .unwrap();

        assert_eq!(updated.status, TenantStatus::Paid);
        assert_eq!(store.list_payments(Some(tenant.id)).len(), 1);
    }

    #[test]
    fn test_delete_tenant_keeps_its_payments() {
        let (_dir, store) = test_store();

        let mut req = tenant_request("4", 500.0);
        req.status = Some(TenantStatus::Paid);
        let tenant = store.create_tenant(req).unwrap();

        store.delete_tenant(tenant.id).unwrap();
        assert!(store.list_tenants().is_empty());
        assert_eq!(store.list_payments(None).len(), 1);
    }

    #[test]
    fn test_csv_import_rejects_duplicates_but_imports_valid_rows() {
        let (_dir, store) = test_store();
        store.create_tenant(tenant_request("5", 500.0)).unwrap();

        let csv = "apartment,name,phone,email,monthly_amount\n\
                   5,Existing Apt,050-1111111,,500\n\
                   6,New Tenant,050-2222222,,600\n";
        let report = store.import_tenants_csv(csv, false).unwrap();

        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].line, 2);
        assert!(report.invalid[0]
            .errors
            .contains(&"apartment already exists".to_string()));

        let tenants = store.list_tenants();
        assert_eq!(tenants.len(), 2);
        let imported = tenants.iter().find(|t| t.apartment == "6").unwrap();
        assert_eq!(imported.status, TenantStatus::Pending);
        assert_eq!(imported.monthly_amount, 600.0);
    }

    #[test]
    fn test_csv_dry_run_reports_without_importing() {
        let (_dir, store) = test_store();

        let csv = "apartment,name,phone\n7,Dry Run,050-3333333\n";
        let report = store.import_tenants_csv(csv, true).unwrap();

        assert_eq!(report.imported, 1);
        assert!(store.list_tenants().is_empty());
    }
}

pub mod activity;
pub mod backup;
pub mod expenses;
pub mod payments;
pub mod reconciler;
pub mod reports;
pub mod settings;
pub mod tenants;
pub mod tracking;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{ActivityEntry, AppSettings, Expense, Payment, Tenant};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::database::{documents, Database};

/// All collections held in memory and mutated through [`Store`] methods
#[derive(Debug, Default)]
pub struct AppState {
    pub tenants: Vec<Tenant>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub activities: Vec<ActivityEntry>,
    pub settings: AppSettings,
}

/// On-disk shape of the main document
#[derive(Debug, Serialize, Deserialize)]
struct TenantDataDocument {
    #[serde(default)]
    tenants: Vec<Tenant>,
    #[serde(default)]
    payments: Vec<Payment>,
    #[serde(default)]
    expenses: Vec<Expense>,
    #[serde(default)]
    activities: Vec<ActivityEntry>,
    last_saved: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("tenant not found")]
    TenantNotFound,
    #[error("payment not found")]
    PaymentNotFound,
    #[error("expense not found")]
    ExpenseNotFound,
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("invalid backup document: {0}")]
    InvalidBackup(String),
    #[error("failed to persist state: {0}")]
    Persistence(#[source] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The state store. Every mutation method takes the write lock, applies
/// its change, re-derives what it owns, persists wholesale and records
/// an activity entry. A failed persist is logged and surfaced but the
/// in-memory change stands; nothing is rolled back or retried.
pub struct Store {
    state: RwLock<AppState>,
    db: Arc<Database>,
}

impl Store {
    /// Load all documents from the database, falling back to empty
    /// collections and default settings when none exist yet.
    pub fn load(db: Arc<Database>) -> anyhow::Result<Self> {
        let mut state = AppState::default();

        {
            let conn = db
                .connection
                .lock()
                .map_err(|_| anyhow::anyhow!("Database mutex poisoned"))?;

            if let Some(raw) = documents::read_document(&conn, documents::TENANT_DATA_KEY)? {
                let doc: TenantDataDocument = serde_json::from_str(&raw)?;
                state.tenants = doc.tenants;
                state.payments = doc.payments;
                state.expenses = doc.expenses;
                state.activities = doc.activities;
            }

            if let Some(raw) = documents::read_document(&conn, documents::SETTINGS_KEY)? {
                state.settings = serde_json::from_str(&raw)?;
            }
        }

        tracing::info!(
            tenants = state.tenants.len(),
            payments = state.payments.len(),
            expenses = state.expenses.len(),
            "Loaded state from storage"
        );

        Ok(Self {
            state: RwLock::new(state),
            db,
        })
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Serialize the main document and overwrite it wholesale
    pub(crate) fn persist_data(&self, state: &AppState) -> StoreResult<()> {
        let doc = TenantDataDocument {
            tenants: state.tenants.clone(),
            payments: state.payments.clone(),
            expenses: state.expenses.clone(),
            activities: state.activities.clone(),
            last_saved: Utc::now(),
        };

        self.write_json(documents::TENANT_DATA_KEY, &doc)
    }

    pub(crate) fn persist_settings(&self, state: &AppState) -> StoreResult<()> {
        self.write_json(documents::SETTINGS_KEY, &state.settings)
    }

    pub(crate) fn write_json<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StoreError::Persistence(anyhow::Error::new(e)))?;

        let conn = self
            .db
            .connection
            .lock()
            .map_err(|_| StoreError::Persistence(anyhow::anyhow!("Database mutex poisoned")))?;

        documents::write_document(&conn, key, &raw).map_err(|e| {
            tracing::error!("Failed to persist document {key}: {e}");
            StoreError::Persistence(e)
        })
    }

    pub(crate) fn read_raw_document(&self, key: &str) -> StoreResult<Option<String>> {
        let conn = self
            .db
            .connection
            .lock()
            .map_err(|_| StoreError::Persistence(anyhow::anyhow!("Database mutex poisoned")))?;

        documents::read_document(&conn, key).map_err(StoreError::Persistence)
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use chrono::NaiveDate;
    use shared_types::{CreateTenantRequest, TenantStatus};
    use tempfile::TempDir;

    pub fn test_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let db = Database::new(&dir.path().join("test.db")).unwrap();
        let store = Store::load(Arc::new(db)).unwrap();
        (dir, store)
    }

    pub fn tenant_request(apartment: &str, amount: f64) -> CreateTenantRequest {
        CreateTenantRequest {
            apartment: apartment.to_string(),
            name: format!("Tenant {apartment}"),
            phone: "050-1234567".to_string(),
            email: None,
            monthly_amount: amount,
            status: Some(TenantStatus::Pending),
            notes: None,
        }
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

use chrono::{DateTime, Duration, Utc};
use shared_types::{ActivityType, BackupData, BackupDocument};

use super::activity::log_activity;
use super::{Store, StoreError, StoreResult};
use crate::database::documents;

const BACKUP_VERSION: &str = "1.0";

impl Store {
    /// Snapshot every collection into a single restorable document,
    /// stored under the backup key. Also records the backup time for
    /// the auto-backup check.
    pub fn create_backup(&self) -> StoreResult<BackupDocument> {
        let mut state = self.write();

        let document = BackupDocument {
            version: BACKUP_VERSION.to_string(),
            timestamp: Utc::now(),
            data: BackupData {
                tenants: state.tenants.clone(),
                payments: state.payments.clone(),
                expenses: state.expenses.clone(),
                activities: state.activities.clone(),
                settings: Some(state.settings.clone()),
            },
        };

        self.write_json(documents::BACKUP_KEY, &document)?;
        self.write_json(documents::LAST_BACKUP_KEY, &document.timestamp)?;

        log_activity(&mut state, "Backup created", ActivityType::Backup);
        self.persist_data(&state)?;

        Ok(document)
    }

    /// The stored backup snapshot, if one was ever created
    pub fn latest_backup(&self) -> StoreResult<Option<BackupDocument>> {
        let raw = self.read_raw_document(documents::BACKUP_KEY)?;
        match raw {
            Some(raw) => {
                let document = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::InvalidBackup(e.to_string()))?;
                Ok(Some(document))
            }
            None => Ok(None),
        }
    }

    /// Replace every collection with the backup's contents. Settings are
    /// only replaced when the backup carries them; older backups did not.
    pub fn restore_backup(&self, document: BackupDocument) -> StoreResult<()> {
        if document.data.tenants.is_empty()
            && document.data.payments.is_empty()
            && document.data.expenses.is_empty()
        {
            return Err(StoreError::InvalidBackup(
                "backup contains no data".to_string(),
            ));
        }

        let mut state = self.write();

        state.tenants = document.data.tenants;
        state.payments = document.data.payments;
        state.expenses = document.data.expenses;
        state.activities = document.data.activities;
        if let Some(settings) = document.data.settings {
            state.settings = settings;
            self.persist_settings(&state)?;
        }

        log_activity(
            &mut state,
            format!("Restored backup from {}", document.timestamp.date_naive()),
            ActivityType::Restore,
        );

        self.persist_data(&state)?;
        Ok(())
    }

    pub fn last_backup_date(&self) -> StoreResult<Option<DateTime<Utc>>> {
        let raw = self.read_raw_document(documents::LAST_BACKUP_KEY)?;
        match raw {
            Some(raw) => {
                let date = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::Persistence(anyhow::Error::new(e)))?;
                Ok(Some(date))
            }
            None => Ok(None),
        }
    }

    /// Called hourly by the background task. Creates a backup when the
    /// setting is enabled and the last one is over a day old (or none
    /// exists yet).
    pub fn auto_backup_if_due(&self) -> StoreResult<bool> {
        if !self.read().settings.auto_backup {
            return Ok(false);
        }

        let due = match self.last_backup_date()? {
            Some(last) => Utc::now() - last >= Duration::hours(24),
            None => true,
        };
        if !due {
            return Ok(false);
        }

        self.create_backup()?;
        tracing::info!("Automatic backup created");
        Ok(true)
    }
}

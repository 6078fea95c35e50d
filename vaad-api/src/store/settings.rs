use shared_types::{ActivityType, AppSettings};

use super::activity::log_activity;
use super::{Store, StoreError, StoreResult};

impl Store {
    pub fn get_settings(&self) -> AppSettings {
        self.read().settings.clone()
    }

    /// Replace the settings document wholesale
    pub fn update_settings(&self, settings: AppSettings) -> StoreResult<AppSettings> {
        let mut errors = Vec::new();
        if settings.default_amount < 0.0 {
            errors.push("default amount must not be negative".to_string());
        }
        if !(1..=28).contains(&settings.payment_day) {
            errors.push("payment day must be 1-28".to_string());
        }
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let mut state = self.write();
        state.settings = settings.clone();

        log_activity(&mut state, "Settings updated", ActivityType::Edit);

        self.persist_settings(&state)?;
        self.persist_data(&state)?;
        Ok(settings)
    }
}

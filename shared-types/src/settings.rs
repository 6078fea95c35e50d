use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Building-committee settings, persisted as their own document
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppSettings {
    pub building_name: String,
    /// Default monthly dues for new tenants and CSV rows without an amount
    pub default_amount: f64,
    /// Day of month dues are considered due
    pub payment_day: u32,
    pub chairperson_name: String,
    pub chairperson_phone: String,
    pub treasurer_name: String,
    pub treasurer_phone: String,
    pub whatsapp_notifications: bool,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub reminder_days: u32,
    pub auto_monthly_billing: bool,
    pub auto_backup: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            building_name: String::new(),
            default_amount: 500.0,
            payment_day: 1,
            chairperson_name: String::new(),
            chairperson_phone: String::new(),
            treasurer_name: String::new(),
            treasurer_phone: String::new(),
            whatsapp_notifications: true,
            email_notifications: true,
            sms_notifications: false,
            reminder_days: 3,
            auto_monthly_billing: true,
            auto_backup: true,
        }
    }
}

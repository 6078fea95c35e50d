use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// CSV text with rows of (apartment, name, phone, email, monthly_amount).
/// With `dry_run` set, the rows are validated and reported but nothing
/// is imported.
#[derive(Debug, Deserialize, TS)]
#[ts(export)]
pub struct CsvImportRequest {
    pub csv: String,
    #[serde(default)]
    pub dry_run: bool,
}

/// A rejected row with its 1-based line number (header is line 1)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CsvRowIssue {
    pub line: usize,
    pub apartment: String,
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CsvImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub invalid: Vec<CsvRowIssue>,
}

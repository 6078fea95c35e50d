use anyhow::Result;

/// A raw CSV row before validation. `line` is 1-based, counting the
/// header as line 1.
#[derive(Debug, Clone)]
pub struct CsvTenantRow {
    pub line: usize,
    pub apartment: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub monthly_amount: f64,
}

/// Parse tenant rows of (apartment, name, phone, email, monthly_amount).
///
/// Rows with fewer than three fields are dropped outright, matching the
/// import preview behavior; a missing or unparseable amount falls back
/// to the configured default.
pub fn parse_tenant_rows(text: &str, default_amount: f64) -> Result<Vec<CsvTenantRow>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < 3 {
            continue;
        }

        let email = record.get(3).filter(|v| !v.is_empty()).map(str::to_string);
        let monthly_amount = record
            .get(4)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(default_amount);

        rows.push(CsvTenantRow {
            line: index + 2,
            apartment: record.get(0).unwrap_or_default().to_string(),
            name: record.get(1).unwrap_or_default().to_string(),
            phone: record.get(2).unwrap_or_default().to_string(),
            email,
            monthly_amount,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "apartment,name,phone,email,monthly_amount\n";

    #[test]
    fn test_parses_full_rows() {
        let csv = format!("{HEADER}1,Dana Peretz,050-1234567,dana@example.com,550\n");
        let rows = parse_tenant_rows(&csv, 500.0).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[0].apartment, "1");
        assert_eq!(rows[0].email.as_deref(), Some("dana@example.com"));
        assert_eq!(rows[0].monthly_amount, 550.0);
    }

    #[test]
    fn test_missing_amount_uses_default() {
        let csv = format!("{HEADER}2,Yossi Mizrahi,052-9876543,,\n");
        let rows = parse_tenant_rows(&csv, 500.0).unwrap();

        assert_eq!(rows[0].monthly_amount, 500.0);
        assert!(rows[0].email.is_none());
    }

    #[test]
    fn test_short_rows_dropped() {
        let csv = format!("{HEADER}3,OnlyName\n4,Full Row,054-5555555\n");
        let rows = parse_tenant_rows(&csv, 500.0).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].apartment, "4");
        assert_eq!(rows[0].line, 3);
    }

    #[test]
    fn test_bom_stripped() {
        let csv = format!("\u{feff}{HEADER}5,With Bom,050-0000000\n");
        let rows = parse_tenant_rows(&csv, 500.0).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].apartment, "5");
    }
}

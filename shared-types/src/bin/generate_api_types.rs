use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Tenant types
    types.push(clean_type(TenantStatus::export_to_string()?));
    types.push(clean_type(Tenant::export_to_string()?));
    types.push(clean_type(CreateTenantRequest::export_to_string()?));
    types.push(clean_type(UpdateTenantRequest::export_to_string()?));
    types.push(clean_type(TenantsResponse::export_to_string()?));
    types.push(clean_type(BulkTenantsRequest::export_to_string()?));
    types.push(clean_type(BulkActionResponse::export_to_string()?));

    // Payment types
    types.push(clean_type(PaymentMethod::export_to_string()?));
    types.push(clean_type(MonthRef::export_to_string()?));
    types.push(clean_type(Payment::export_to_string()?));
    types.push(clean_type(RecordPaymentRequest::export_to_string()?));
    types.push(clean_type(AnnualPaymentRequest::export_to_string()?));
    types.push(clean_type(PaymentsResponse::export_to_string()?));

    // Expense types
    types.push(clean_type(ExpenseCategory::export_to_string()?));
    types.push(clean_type(Expense::export_to_string()?));
    types.push(clean_type(CreateExpenseRequest::export_to_string()?));
    types.push(clean_type(UpdateExpenseRequest::export_to_string()?));
    types.push(clean_type(ExpensesResponse::export_to_string()?));
    types.push(clean_type(CategoryTotal::export_to_string()?));
    types.push(clean_type(ExpenseSummary::export_to_string()?));

    // Activity types
    types.push(clean_type(ActivityType::export_to_string()?));
    types.push(clean_type(ActivityEntry::export_to_string()?));
    types.push(clean_type(ActivitiesResponse::export_to_string()?));

    // Settings types
    types.push(clean_type(AppSettings::export_to_string()?));

    // Tracking types
    types.push(clean_type(MonthStatus::export_to_string()?));
    types.push(clean_type(YearSummary::export_to_string()?));
    types.push(clean_type(ToggleMonthRequest::export_to_string()?));

    // Report types
    types.push(clean_type(Statistics::export_to_string()?));
    types.push(clean_type(PaymentSummary::export_to_string()?));
    types.push(clean_type(MonthlyRevenuePoint::export_to_string()?));
    types.push(clean_type(MonthlyRevenueResponse::export_to_string()?));
    types.push(clean_type(DebtorsResponse::export_to_string()?));
    types.push(clean_type(PeriodReportQuery::export_to_string()?));
    types.push(clean_type(PeriodReport::export_to_string()?));

    // Backup types
    types.push(clean_type(BackupData::export_to_string()?));
    types.push(clean_type(BackupDocument::export_to_string()?));

    // Import types
    types.push(clean_type(CsvImportRequest::export_to_string()?));
    types.push(clean_type(CsvRowIssue::export_to_string()?));
    types.push(clean_type(CsvImportReport::export_to_string()?));

    let output = format!(
        "// Auto-generated API types. Do not edit by hand.\n// Regenerate with: cargo run --bin generate_api_types\n\n{}",
        types.join("\n\n")
    );

    let out_dir = Path::new("gui/src/api_types");
    fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join("index.ts");
    fs::write(&out_path, output)?;

    println!("Wrote {} type definitions to {}", types.len(), out_path.display());

    Ok(())
}

fn clean_type(decl: String) -> String {
    // export_to_string emits bare declarations; prefix for module output
    if decl.starts_with("export") {
        decl
    } else {
        format!("export {decl}")
    }
}

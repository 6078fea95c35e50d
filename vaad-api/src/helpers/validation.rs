use regex::Regex;
use shared_types::Tenant;
use std::sync::OnceLock;
use uuid::Uuid;

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\d\-]{9,}$").expect("static phone pattern"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

/// Field checks shared by the tenant form and CSV import. Returns every
/// problem found rather than stopping at the first, so a form or a CSV
/// preview can show them all at once.
pub fn validate_tenant_fields(
    apartment: &str,
    name: &str,
    phone: &str,
    email: Option<&str>,
) -> Vec<String> {
    let mut errors = Vec::new();

    if apartment.trim().is_empty() {
        errors.push("apartment number is required".to_string());
    }

    if name.trim().chars().count() < 2 {
        errors.push("name must be at least 2 characters".to_string());
    }

    let stripped: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if !phone_pattern().is_match(&stripped) {
        errors.push("invalid phone number".to_string());
    }

    if let Some(email) = email {
        if !email.is_empty() && !email_pattern().is_match(email) {
            errors.push("invalid email address".to_string());
        }
    }

    errors
}

/// Duplicate-apartment check; `exclude_id` skips the tenant being edited
pub fn apartment_taken(tenants: &[Tenant], apartment: &str, exclude_id: Option<Uuid>) -> bool {
    tenants
        .iter()
        .any(|t| t.apartment == apartment && Some(t.id) != exclude_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields_pass() {
        let errors =
            validate_tenant_fields("5", "Dana Peretz", "050-1234567", Some("dana@example.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_phone_allows_spaces_and_dashes() {
        assert!(validate_tenant_fields("5", "Dana", "050 123 4567", None).is_empty());
        assert!(!validate_tenant_fields("5", "Dana", "050*1234567", None).is_empty());
    }

    #[test]
    fn test_short_phone_rejected() {
        let errors = validate_tenant_fields("5", "Dana", "050-111", None);
        assert_eq!(errors, vec!["invalid phone number".to_string()]);
    }

    #[test]
    fn test_short_name_rejected() {
        let errors = validate_tenant_fields("5", "D", "050-1234567", None);
        assert_eq!(errors, vec!["name must be at least 2 characters".to_string()]);
    }

    #[test]
    fn test_missing_apartment_rejected() {
        let errors = validate_tenant_fields("  ", "Dana", "050-1234567", None);
        assert_eq!(errors, vec!["apartment number is required".to_string()]);
    }

    #[test]
    fn test_bad_email_rejected_empty_email_allowed() {
        assert!(!validate_tenant_fields("5", "Dana", "050-1234567", Some("not-an-email")).is_empty());
        assert!(validate_tenant_fields("5", "Dana", "050-1234567", Some("")).is_empty());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let errors = validate_tenant_fields("", "D", "123", Some("bad"));
        assert_eq!(errors.len(), 4);
    }
}

pub mod activities;
pub mod backup;
pub mod expenses;
pub mod payments;
pub mod reports;
pub mod settings;
pub mod tenants;
pub mod tracking;

use crate::store::StoreError;

/// Map store errors onto HTTP status codes. Handlers stay thin; the
/// store decides what went wrong, this decides what the client sees.
pub(crate) fn store_error(e: StoreError) -> actix_web::Error {
    let message = e.to_string();
    match e {
        StoreError::TenantNotFound
        | StoreError::PaymentNotFound
        | StoreError::ExpenseNotFound => actix_web::error::ErrorNotFound(message),
        StoreError::Validation(_) | StoreError::InvalidBackup(_) => {
            actix_web::error::ErrorBadRequest(message)
        }
        StoreError::Persistence(_) => actix_web::error::ErrorInternalServerError(message),
    }
}

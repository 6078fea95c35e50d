use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{
    AnnualPaymentRequest, BulkActionResponse, BulkTenantsRequest, PaymentsResponse,
    RecordPaymentRequest,
};
use std::sync::Arc;
use uuid::Uuid;

use super::store_error;
use crate::store::Store;

#[derive(Debug, Deserialize)]
pub struct PaymentsQuery {
    pub tenant_id: Option<Uuid>,
    pub annual: Option<bool>,
}

pub async fn list_payments(
    store: web::Data<Arc<Store>>,
    query: web::Query<PaymentsQuery>,
) -> ActixResult<HttpResponse> {
    let mut payments = store.list_payments(query.tenant_id);
    if let Some(annual) = query.annual {
        payments.retain(|p| p.is_annual == annual);
    }

    Ok(HttpResponse::Ok().json(PaymentsResponse { payments }))
}

pub async fn record_payment(
    store: web::Data<Arc<Store>>,
    request: web::Json<RecordPaymentRequest>,
) -> ActixResult<HttpResponse> {
    let payment = store
        .record_payment(request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Created().json(payment))
}

pub async fn delete_payment(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    store.delete_payment(path.into_inner()).map_err(store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn bulk_mark_paid(
    store: web::Data<Arc<Store>>,
    request: web::Json<BulkTenantsRequest>,
) -> ActixResult<HttpResponse> {
    let affected = store
        .bulk_mark_paid(&request.tenant_ids)
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(BulkActionResponse { affected }))
}

pub async fn record_annual_payment(
    store: web::Data<Arc<Store>>,
    request: web::Json<AnnualPaymentRequest>,
) -> ActixResult<HttpResponse> {
    let payment = store
        .record_annual_payment(request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Created().json(payment))
}

pub async fn clear_payments_history(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    store.clear_payments_history().map_err(store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::ToggleMonthRequest;
use std::sync::Arc;
use uuid::Uuid;

use super::store_error;
use crate::store::Store;

pub async fn year_summary(
    store: web::Data<Arc<Store>>,
    path: web::Path<(Uuid, i32)>,
) -> ActixResult<HttpResponse> {
    let (tenant_id, year) = path.into_inner();
    let summary = store.year_summary(tenant_id, year).map_err(store_error)?;
    Ok(HttpResponse::Ok().json(summary))
}

pub async fn toggle_month(
    store: web::Data<Arc<Store>>,
    path: web::Path<(Uuid, i32, u32)>,
    request: web::Json<ToggleMonthRequest>,
) -> ActixResult<HttpResponse> {
    let (tenant_id, year, month) = path.into_inner();
    store
        .toggle_month(tenant_id, year, month, request.paid)
        .map_err(store_error)?;

    // Return the updated grid so the client can redraw in one round trip
    let summary = store.year_summary(tenant_id, year).map_err(store_error)?;
    Ok(HttpResponse::Ok().json(summary))
}

pub async fn save_monthly_changes(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let tenant = store
        .save_monthly_changes(path.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(tenant))
}

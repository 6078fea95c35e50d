use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{
    BulkActionResponse, BulkTenantsRequest, CreateTenantRequest, CsvImportRequest, TenantsResponse,
    UpdateTenantRequest,
};
use std::sync::Arc;
use uuid::Uuid;

use super::store_error;
use crate::store::Store;

pub async fn list_tenants(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(TenantsResponse {
        tenants: store.list_tenants(),
    }))
}

pub async fn get_tenant(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let tenant = store.get_tenant(path.into_inner()).map_err(store_error)?;
    Ok(HttpResponse::Ok().json(tenant))
}

pub async fn create_tenant(
    store: web::Data<Arc<Store>>,
    request: web::Json<CreateTenantRequest>,
) -> ActixResult<HttpResponse> {
    let tenant = store
        .create_tenant(request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Created().json(tenant))
}

pub async fn update_tenant(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTenantRequest>,
) -> ActixResult<HttpResponse> {
    let tenant = store
        .update_tenant(path.into_inner(), request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(tenant))
}

pub async fn delete_tenant(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    store.delete_tenant(path.into_inner()).map_err(store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn bulk_delete_tenants(
    store: web::Data<Arc<Store>>,
    request: web::Json<BulkTenantsRequest>,
) -> ActixResult<HttpResponse> {
    let affected = store
        .bulk_delete_tenants(&request.tenant_ids)
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(BulkActionResponse { affected }))
}

pub async fn import_tenants_csv(
    store: web::Data<Arc<Store>>,
    request: web::Json<CsvImportRequest>,
) -> ActixResult<HttpResponse> {
    let report = store
        .import_tenants_csv(&request.csv, request.dry_run)
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(report))
}

use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{BackupDocument, ErrorResponse};
use std::sync::Arc;

use super::store_error;
use crate::store::Store;

pub async fn create_backup(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    let document = store.create_backup().map_err(store_error)?;
    Ok(HttpResponse::Created().json(document))
}

pub async fn download_backup(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    match store.latest_backup().map_err(store_error)? {
        Some(document) => Ok(HttpResponse::Ok().json(document)),
        None => Ok(HttpResponse::NotFound().json(ErrorResponse {
            error: "no backup exists yet".to_string(),
        })),
    }
}

pub async fn restore_backup(
    store: web::Data<Arc<Store>>,
    request: web::Json<BackupDocument>,
) -> ActixResult<HttpResponse> {
    store
        .restore_backup(request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().finish())
}

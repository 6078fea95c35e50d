use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::AppSettings;
use std::sync::Arc;

use super::store_error;
use crate::store::Store;

pub async fn get_settings(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.get_settings()))
}

pub async fn update_settings(
    store: web::Data<Arc<Store>>,
    request: web::Json<AppSettings>,
) -> ActixResult<HttpResponse> {
    let settings = store
        .update_settings(request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(settings))
}

use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::ActivitiesResponse;
use std::sync::Arc;

use crate::store::Store;

pub async fn list_activities(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ActivitiesResponse {
        activities: store.list_activities(),
    }))
}

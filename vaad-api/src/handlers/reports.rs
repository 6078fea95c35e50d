use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{DebtorsResponse, MonthlyRevenueResponse, PeriodReportQuery};
use std::sync::Arc;

use super::store_error;
use crate::store::Store;

pub async fn statistics(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.statistics()))
}

pub async fn payment_summary(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.payment_summary()))
}

pub async fn monthly_revenue(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(MonthlyRevenueResponse {
        points: store.monthly_revenue(),
    }))
}

pub async fn debtors(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(DebtorsResponse {
        debtors: store.debtors(),
    }))
}

pub async fn period_report(
    store: web::Data<Arc<Store>>,
    query: web::Query<PeriodReportQuery>,
) -> ActixResult<HttpResponse> {
    let report = store
        .period_report(query.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(report))
}

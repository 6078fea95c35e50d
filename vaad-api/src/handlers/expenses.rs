use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{CreateExpenseRequest, ExpenseCategory, ExpensesResponse, UpdateExpenseRequest};
use std::sync::Arc;
use uuid::Uuid;

use super::store_error;
use crate::store::Store;

#[derive(Debug, Deserialize)]
pub struct ExpensesQuery {
    pub category: Option<ExpenseCategory>,
}

pub async fn list_expenses(
    store: web::Data<Arc<Store>>,
    query: web::Query<ExpensesQuery>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ExpensesResponse {
        expenses: store.list_expenses(query.category),
    }))
}

pub async fn create_expense(
    store: web::Data<Arc<Store>>,
    request: web::Json<CreateExpenseRequest>,
) -> ActixResult<HttpResponse> {
    let expense = store
        .create_expense(request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Created().json(expense))
}

pub async fn update_expense(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateExpenseRequest>,
) -> ActixResult<HttpResponse> {
    let expense = store
        .update_expense(path.into_inner(), request.into_inner())
        .map_err(store_error)?;
    Ok(HttpResponse::Ok().json(expense))
}

pub async fn delete_expense(
    store: web::Data<Arc<Store>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    store.delete_expense(path.into_inner()).map_err(store_error)?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn expense_summary(store: web::Data<Arc<Store>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(store.expense_summary()))
}

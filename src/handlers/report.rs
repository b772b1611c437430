use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;

use crate::chart::{month_label, SeriesBuilder};
use crate::errors::AppError;
use crate::report::{ComparisonOrder, ReportQueries};
use crate::store::{DepartmentStore, SurveyStore, UNKNOWN_DEPARTMENT};

#[derive(Deserialize)]
pub struct YearQuery {
    year: i32,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderParam {
    Month,
    Department,
}

impl From<OrderParam> for ComparisonOrder {
    fn from(order: OrderParam) -> Self {
        match order {
            OrderParam::Month => ComparisonOrder::MonthThenDepartment,
            OrderParam::Department => ComparisonOrder::DepartmentThenMonth,
        }
    }
}

#[derive(Deserialize)]
pub struct ComparisonQuery {
    year: i32,
    order: Option<OrderParam>,
}

pub async fn available_years(pool: web::Data<PgPool>) -> Result<HttpResponse, actix_web::Error> {
    let years = SurveyStore::available_years(&pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Ok().json(years))
}

pub async fn monthly_report(
    pool: web::Data<PgPool>,
    query: web::Query<YearQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let rows = ReportQueries::mean_by_month(&pool, query.year)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let chart = SeriesBuilder::default().monthly(&rows);

    Ok(HttpResponse::Ok().json(json!({ "year": query.year, "chart": chart })))
}

pub async fn department_monthly_report(
    pool: web::Data<PgPool>,
    department_id: web::Path<i32>,
    query: web::Query<YearQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let department_id = department_id.into_inner();

    let rows = ReportQueries::mean_by_department_month(&pool, department_id, query.year)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let department_name = DepartmentStore::name(&pool, department_id)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let chart = SeriesBuilder::default().monthly(&rows);

    Ok(HttpResponse::Ok().json(json!({
        "department": department_name,
        "year": query.year,
        "chart": chart,
    })))
}

// The balance-wheel view: overall means per metric with no month breakdown.
// `averages` is null when the department has no responses for the year.
pub async fn department_overall_report(
    pool: web::Data<PgPool>,
    department_id: web::Path<i32>,
    query: web::Query<YearQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let department_id = department_id.into_inner();

    let averages = ReportQueries::mean_overall(&pool, department_id, query.year)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let department_name = DepartmentStore::name(&pool, department_id)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "department": department_name,
        "year": query.year,
        "averages": averages,
    })))
}

pub async fn comparison_report(
    pool: web::Data<PgPool>,
    query: web::Query<ComparisonQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let order = query
        .order
        .map(ComparisonOrder::from)
        .unwrap_or(ComparisonOrder::MonthThenDepartment);

    let rows = ReportQueries::mean_by_department_month_all(&pool, query.year, order)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let departments = DepartmentStore::list(&pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let names: HashMap<i32, &str> = departments
        .iter()
        .map(|department| (department.id, department.name.as_str()))
        .collect();

    let chart = SeriesBuilder::default().build(
        &rows,
        |row| {
            let name = names.get(&row.department_id).copied().unwrap_or(UNKNOWN_DEPARTMENT);
            format!("{} ({})", name, month_label(row.month))
        },
        |row| &row.means,
    );

    Ok(HttpResponse::Ok().json(json!({ "year": query.year, "chart": chart })))
}

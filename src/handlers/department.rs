use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;
use crate::models::department::NewDepartment;
use crate::store::{DeleteOutcome, DepartmentStore};

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    actix_web::error::ErrorBadRequest(err.to_string())
}

pub async fn create_department(
    pool: web::Data<PgPool>,
    new_department: web::Json<NewDepartment>,
) -> Result<HttpResponse, actix_web::Error> {
    new_department.validate().map_err(map_validation_error)?;

    if DepartmentStore::name_taken(&pool, &new_department.name)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?
    {
        return Err(AppError::Conflict("Department name already exists".to_string()).into());
    }

    let department = DepartmentStore::add(&pool, &new_department)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Created().json(department))
}

pub async fn get_departments(pool: web::Data<PgPool>) -> Result<HttpResponse, actix_web::Error> {
    let departments = DepartmentStore::list(&pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Ok().json(departments))
}

// Deleting is idempotent: a missing department is reported in the message
// body, not as an error status.
pub async fn delete_department(
    pool: web::Data<PgPool>,
    department_id: web::Path<i32>,
) -> Result<HttpResponse, actix_web::Error> {
    let outcome = DepartmentStore::delete(&pool, department_id.into_inner())
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    let message = match outcome {
        DeleteOutcome::Deleted => "Department deleted successfully",
        DeleteOutcome::NotFound => "Department not found or already deleted",
    };

    Ok(HttpResponse::Ok().json(json!({ "message": message })))
}

use actix_web::{web, HttpResponse};
use chrono::{Datelike, Utc};
use rand::Rng;
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;
use crate::models::survey::NewSurveyResponse;
use crate::store::SurveyStore;

#[derive(Deserialize, Validate)]
pub struct SubmitSurveyRequest {
    #[validate(length(min = 1, max = 100))]
    full_name: String,
    department_id: i32,
    #[validate(range(min = 0, max = 10))]
    health: i32,
    #[validate(range(min = 0, max = 10))]
    love: i32,
    #[validate(range(min = 0, max = 10))]
    sex: i32,
    #[validate(range(min = 0, max = 10))]
    work: i32,
    #[validate(range(min = 0, max = 10))]
    rest: i32,
    #[validate(range(min = 0, max = 10))]
    money: i32,
    #[validate(range(min = 0, max = 10))]
    relationships: i32,
    #[validate(range(min = 0, max = 10))]
    personal_growth: i32,
    #[validate(range(min = 0, max = 10))]
    life_purpose: i32,
    #[validate(range(min = 0, max = 10))]
    anxiety: i32,
}

#[derive(Deserialize, Validate)]
pub struct GenerateRequest {
    department_id: i32,
    year: i32,
    #[validate(range(min = 1, max = 12))]
    month: i32,
    #[validate(range(min = 1, max = 1000))]
    entries: Option<i32>,
}

fn map_validation_error(err: ValidationErrors) -> actix_web::Error {
    actix_web::error::ErrorBadRequest(err.to_string())
}

// Submissions are stamped with the current year and month; respondents only
// ever fill in the form for the running period.
pub async fn submit_survey(
    pool: web::Data<PgPool>,
    request: web::Json<SubmitSurveyRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    request.validate().map_err(map_validation_error)?;

    let now = Utc::now();
    let response = NewSurveyResponse {
        full_name: request.full_name.clone(),
        department_id: request.department_id,
        year: now.year(),
        month: now.month() as i32,
        health: request.health,
        love: request.love,
        sex: request.sex,
        work: request.work,
        rest: request.rest,
        money: request.money,
        relationships: request.relationships,
        personal_growth: request.personal_growth,
        life_purpose: request.life_purpose,
        anxiety: request.anxiety,
    };

    SurveyStore::add(&pool, &response)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;

    Ok(HttpResponse::Created().json(json!({ "message": "Survey response saved successfully" })))
}

// Test-data generator: inserts randomly scored responses for one
// department/year/month.
pub async fn generate_responses(
    pool: web::Data<PgPool>,
    request: web::Json<GenerateRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    request.validate().map_err(map_validation_error)?;

    let entries = request.entries.unwrap_or(1);

    for _ in 0..entries {
        let mut rng = rand::thread_rng();
        let response = NewSurveyResponse {
            full_name: format!("Random User {}", rng.gen_range(1..=1000)),
            department_id: request.department_id,
            year: request.year,
            month: request.month,
            health: rng.gen_range(0..=10),
            love: rng.gen_range(0..=10),
            sex: rng.gen_range(0..=10),
            work: rng.gen_range(0..=10),
            rest: rng.gen_range(0..=10),
            money: rng.gen_range(0..=10),
            relationships: rng.gen_range(0..=10),
            personal_growth: rng.gen_range(0..=10),
            life_purpose: rng.gen_range(0..=10),
            anxiety: rng.gen_range(0..=10),
        };

        SurveyStore::add(&pool, &response)
            .await
            .map_err(|err| AppError::DatabaseError(err.to_string()))?;
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": format!(
            "{} random survey responses added for department {}, year {}, month {}",
            entries, request.department_id, request.year, request.month
        )
    })))
}

use sqlx::PgPool;

use crate::models::survey::NewSurveyResponse;

pub struct SurveyStore;

impl SurveyStore {
    pub async fn add(pool: &PgPool, response: &NewSurveyResponse) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            "INSERT INTO survey_responses \
                 (full_name, department_id, year, month, \
                  health, love, sex, work, rest, money, \
                  relationships, personal_growth, life_purpose, anxiety) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING id",
        )
        .bind(&response.full_name)
        .bind(response.department_id)
        .bind(response.year)
        .bind(response.month)
        .bind(response.health)
        .bind(response.love)
        .bind(response.sex)
        .bind(response.work)
        .bind(response.rest)
        .bind(response.money)
        .bind(response.relationships)
        .bind(response.personal_growth)
        .bind(response.life_purpose)
        .bind(response.anxiety)
        .fetch_one(pool)
        .await
    }

    pub async fn available_years(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT DISTINCT year FROM survey_responses ORDER BY year DESC")
            .fetch_all(pool)
            .await
    }
}

use sqlx::PgPool;

use crate::models::department::{Department, NewDepartment};

const COLUMNS: &str = "id, name, description";

pub const UNKNOWN_DEPARTMENT: &str = "Unknown department";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

pub struct DepartmentStore;

impl DepartmentStore {
    pub async fn add(pool: &PgPool, input: &NewDepartment) -> Result<Department, sqlx::Error> {
        let query = format!(
            "INSERT INTO departments (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn name_taken(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM departments WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY id");
        sqlx::query_as::<_, Department>(&query)
            .fetch_all(pool)
            .await
    }

    // Removes the department's survey responses and then the department inside
    // one transaction. A missing id is an outcome, not an error.
    pub async fn delete(pool: &PgPool, department_id: i32) -> Result<DeleteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM survey_responses WHERE department_id = $1")
            .bind(department_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(department_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }

    pub async fn name(pool: &PgPool, department_id: i32) -> Result<String, sqlx::Error> {
        let name = sqlx::query_scalar::<_, String>("SELECT name FROM departments WHERE id = $1")
            .bind(department_id)
            .fetch_optional(pool)
            .await?;
        Ok(name.unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string()))
    }
}

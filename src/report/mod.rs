use serde::Serialize;
use sqlx::PgPool;

use crate::models::metrics::{Metric, MetricMeans};

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct MonthlyAverages {
    pub month: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub means: MetricMeans,
}

#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
pub struct DepartmentMonthlyAverages {
    pub department_id: i32,
    pub month: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub means: MetricMeans,
}

// Callers must pick an ordering for the (department, month) grouping; the
// comparison view wants months adjacent, the per-department view the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOrder {
    MonthThenDepartment,
    DepartmentThenMonth,
}

impl ComparisonOrder {
    fn order_clause(self) -> &'static str {
        match self {
            ComparisonOrder::MonthThenDepartment => "month, department_id",
            ComparisonOrder::DepartmentThenMonth => "department_id, month",
        }
    }
}

// AVG over integer columns yields NUMERIC; the FLOAT8 cast is the one place
// fixed-point values are converted before anything leaves this module.
fn metric_avg_columns() -> String {
    Metric::ALL
        .iter()
        .map(|metric| format!("AVG({col})::FLOAT8 AS {col}", col = metric.column()))
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct ReportQueries;

impl ReportQueries {
    // One row per month present in the data, across all departments. Months
    // with no responses produce no row; zero-filling is a display concern.
    pub async fn mean_by_month(
        pool: &PgPool,
        year: i32,
    ) -> Result<Vec<MonthlyAverages>, sqlx::Error> {
        let query = format!(
            "SELECT month, {} FROM survey_responses \
             WHERE year = $1 \
             GROUP BY month \
             ORDER BY month",
            metric_avg_columns()
        );
        sqlx::query_as::<_, MonthlyAverages>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    pub async fn mean_by_department_month(
        pool: &PgPool,
        department_id: i32,
        year: i32,
    ) -> Result<Vec<MonthlyAverages>, sqlx::Error> {
        let query = format!(
            "SELECT month, {} FROM survey_responses \
             WHERE department_id = $1 AND year = $2 \
             GROUP BY month \
             ORDER BY month",
            metric_avg_columns()
        );
        sqlx::query_as::<_, MonthlyAverages>(&query)
            .bind(department_id)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    pub async fn mean_by_department_month_all(
        pool: &PgPool,
        year: i32,
        order: ComparisonOrder,
    ) -> Result<Vec<DepartmentMonthlyAverages>, sqlx::Error> {
        let query = format!(
            "SELECT department_id, month, {} FROM survey_responses \
             WHERE year = $1 \
             GROUP BY department_id, month \
             ORDER BY {}",
            metric_avg_columns(),
            order.order_clause()
        );
        sqlx::query_as::<_, DepartmentMonthlyAverages>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    // Single overall mean per metric for one department and year, with no
    // month breakdown. `None` when nothing matches the filter.
    pub async fn mean_overall(
        pool: &PgPool,
        department_id: i32,
        year: i32,
    ) -> Result<Option<MetricMeans>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM survey_responses \
             WHERE department_id = $1 AND year = $2 \
             HAVING COUNT(*) > 0",
            metric_avg_columns()
        );
        sqlx::query_as::<_, MetricMeans>(&query)
            .bind(department_id)
            .bind(year)
            .fetch_optional(pool)
            .await
    }
}

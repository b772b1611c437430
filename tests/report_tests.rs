mod common;

use balance_wheel_backend::report::{ComparisonOrder, ReportQueries};
use balance_wheel_backend::store::{DepartmentStore, SurveyStore};
use common::{new_department, response_with_health};
use sqlx::PgPool;

const TOLERANCE: f64 = 1e-9;

#[sqlx::test(migrations = "./migrations")]
async fn mean_by_month_is_empty_for_year_without_responses(pool: PgPool) {
    let department = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(department.id, 2024, 3, 8))
        .await
        .unwrap();

    let rows = ReportQueries::mean_by_month(&pool, 1999).await.unwrap();
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn mean_by_department_month_averages_within_month(pool: PgPool) {
    let department = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(department.id, 2024, 3, 8))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(department.id, 2024, 3, 4))
        .await
        .unwrap();

    let rows = ReportQueries::mean_by_department_month(&pool, department.id, 2024)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].month, 3);
    assert!((rows[0].means.health - 6.0).abs() < TOLERANCE);
    // The other metrics were 5 on both responses.
    assert!((rows[0].means.love - 5.0).abs() < TOLERANCE);
    assert!((rows[0].means.anxiety - 5.0).abs() < TOLERANCE);
}

#[sqlx::test(migrations = "./migrations")]
async fn mean_by_month_orders_months_ascending(pool: PgPool) {
    let department = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();

    for month in [11, 2, 7] {
        SurveyStore::add(&pool, &response_with_health(department.id, 2024, month, 6))
            .await
            .unwrap();
    }

    let rows = ReportQueries::mean_by_month(&pool, 2024).await.unwrap();
    let months: Vec<i32> = rows.iter().map(|row| row.month).collect();
    assert_eq!(months, vec![2, 7, 11]);
}

#[sqlx::test(migrations = "./migrations")]
async fn mean_by_month_spans_departments(pool: PgPool) {
    let engineering = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    let marketing = DepartmentStore::add(&pool, &new_department("Marketing"))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(engineering.id, 2024, 1, 2))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(marketing.id, 2024, 1, 4))
        .await
        .unwrap();

    let rows = ReportQueries::mean_by_month(&pool, 2024).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].month, 1);
    assert!((rows[0].means.health - 3.0).abs() < TOLERANCE);
}

#[sqlx::test(migrations = "./migrations")]
async fn department_filter_isolates_department(pool: PgPool) {
    let engineering = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    let marketing = DepartmentStore::add(&pool, &new_department("Marketing"))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(engineering.id, 2024, 1, 2))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(marketing.id, 2024, 1, 10))
        .await
        .unwrap();

    let rows = ReportQueries::mean_by_department_month(&pool, engineering.id, 2024)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!((rows[0].means.health - 2.0).abs() < TOLERANCE);
}

#[sqlx::test(migrations = "./migrations")]
async fn comparison_yields_row_per_department_month(pool: PgPool) {
    let engineering = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    let marketing = DepartmentStore::add(&pool, &new_department("Marketing"))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(engineering.id, 2024, 1, 8))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(marketing.id, 2024, 1, 6))
        .await
        .unwrap();

    let rows = ReportQueries::mean_by_department_month_all(
        &pool,
        2024,
        ComparisonOrder::MonthThenDepartment,
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.month == 1));

    let mut department_ids: Vec<i32> = rows.iter().map(|row| row.department_id).collect();
    department_ids.sort();
    let mut expected = vec![engineering.id, marketing.id];
    expected.sort();
    assert_eq!(department_ids, expected);
}

#[sqlx::test(migrations = "./migrations")]
async fn comparison_order_is_caller_controlled(pool: PgPool) {
    let engineering = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    let marketing = DepartmentStore::add(&pool, &new_department("Marketing"))
        .await
        .unwrap();
    // Engineering only has data for month 2, Marketing only for month 1.
    SurveyStore::add(&pool, &response_with_health(engineering.id, 2024, 2, 8))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(marketing.id, 2024, 1, 6))
        .await
        .unwrap();

    let by_month = ReportQueries::mean_by_department_month_all(
        &pool,
        2024,
        ComparisonOrder::MonthThenDepartment,
    )
    .await
    .unwrap();
    let months: Vec<i32> = by_month.iter().map(|row| row.month).collect();
    assert_eq!(months, vec![1, 2]);

    let by_department = ReportQueries::mean_by_department_month_all(
        &pool,
        2024,
        ComparisonOrder::DepartmentThenMonth,
    )
    .await
    .unwrap();
    let department_ids: Vec<i32> = by_department.iter().map(|row| row.department_id).collect();
    assert_eq!(department_ids, vec![engineering.id, marketing.id]);
}

#[sqlx::test(migrations = "./migrations")]
async fn mean_overall_is_none_without_matching_rows(pool: PgPool) {
    let department = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();

    let averages = ReportQueries::mean_overall(&pool, department.id, 2024)
        .await
        .unwrap();
    assert!(averages.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn mean_overall_averages_across_months(pool: PgPool) {
    let department = DepartmentStore::add(&pool, &new_department("Engineering"))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(department.id, 2024, 1, 8))
        .await
        .unwrap();
    SurveyStore::add(&pool, &response_with_health(department.id, 2024, 2, 4))
        .await
        .unwrap();

    let averages = ReportQueries::mean_overall(&pool, department.id, 2024)
        .await
        .unwrap()
        .unwrap();
    assert!((averages.health - 6.0).abs() < TOLERANCE);
    assert!((averages.work - 5.0).abs() < TOLERANCE);
}

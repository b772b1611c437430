use balance_wheel_backend::models::department::NewDepartment;
use balance_wheel_backend::models::survey::NewSurveyResponse;

pub fn new_department(name: &str) -> NewDepartment {
    NewDepartment {
        name: name.to_string(),
        description: None,
    }
}

// A response with every metric at 5 except health, which is the interesting
// value in most scenarios.
pub fn response_with_health(
    department_id: i32,
    year: i32,
    month: i32,
    health: i32,
) -> NewSurveyResponse {
    NewSurveyResponse {
        full_name: "Test Respondent".to_string(),
        department_id,
        year,
        month,
        health,
        love: 5,
        sex: 5,
        work: 5,
        rest: 5,
        money: 5,
        relationships: 5,
        personal_growth: 5,
        life_purpose: 5,
        anxiety: 5,
    }
}

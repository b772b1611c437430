// Insert input for one survey response. Rows are immutable once stored and
// only ever read back through the aggregate queries.
#[derive(Debug, Clone)]
pub struct NewSurveyResponse {
    pub full_name: String,
    pub department_id: i32,
    pub year: i32,
    pub month: i32,
    pub health: i32,
    pub love: i32,
    pub sex: i32,
    pub work: i32,
    pub rest: i32,
    pub money: i32,
    pub relationships: i32,
    pub personal_growth: i32,
    pub life_purpose: i32,
    pub anxiety: i32,
}

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct NewDepartment {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
}

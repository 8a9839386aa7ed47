use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: i64,
    pub email: String,
    pub role: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub avatar: Option<String>,
    pub password: Option<String>,
    pub country: Option<String>,
    pub bib: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub coach: Option<String>,
    pub sport_type: Option<String>,
    pub affiliation: Option<String>,
    pub phone_number: Option<String>,
    pub disability_class: Option<String>,
    pub equipment: Option<String>,
    pub medicine: Option<String>,
    pub remark: Option<String>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Athlete;

/// Response containing a full athlete row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
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

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(required(message = "email is required"), email)]
    pub email: Option<String>,

    #[validate(required(message = "first_name is required"), length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(required(message = "last_name is required"), length(min = 1, max = 255))]
    pub last_name: Option<String>,

    pub role: Option<String>,
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

/// Request payload for updating an athlete. Every column is written back,
/// so omitted fields overwrite the stored value with NULL.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    pub role: Option<String>,
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

impl From<Athlete> for AthleteResponse {
    fn from(athlete: Athlete) -> Self {
        Self {
            id: athlete.id,
            email: athlete.email,
            role: athlete.role,
            first_name: athlete.first_name,
            last_name: athlete.last_name,
            avatar: athlete.avatar,
            password: athlete.password,
            country: athlete.country,
            bib: athlete.bib,
            gender: athlete.gender,
            date_of_birth: athlete.date_of_birth,
            coach: athlete.coach,
            sport_type: athlete.sport_type,
            affiliation: athlete.affiliation,
            phone_number: athlete.phone_number,
            disability_class: athlete.disability_class,
            equipment: athlete.equipment,
            medicine: athlete.medicine,
            remark: athlete.remark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_create() -> CreateAthleteRequest {
        serde_json::from_value(serde_json::json!({
            "email": "a@x.com",
            "first_name": "A",
            "last_name": "B"
        }))
        .unwrap()
    }

    #[test]
    fn create_with_required_fields_is_valid() {
        assert!(minimal_create().validate().is_ok());
    }

    #[test]
    fn create_without_email_is_rejected() {
        let mut req = minimal_create();
        req.email = None;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn create_without_names_is_rejected() {
        let mut req = minimal_create();
        req.first_name = None;
        req.last_name = None;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
        assert!(errors.field_errors().contains_key("last_name"));
    }

    #[test]
    fn create_with_malformed_email_is_rejected() {
        let mut req = minimal_create();
        req.email = Some("not-an-email".into());
        assert!(req.validate().is_err());
    }

    #[test]
    fn update_with_empty_body_is_valid() {
        let req: UpdateAthleteRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.validate().is_ok());
    }
}

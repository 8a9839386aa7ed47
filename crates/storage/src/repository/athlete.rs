use sqlx::MySqlPool;

use crate::dto::athlete::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

const ATHLETE_COLUMNS: &str = "id, email, role, first_name, last_name, avatar, password, \
     country, bib, gender, date_of_birth, coach, sport_type, affiliation, phone_number, \
     disability_class, equipment, medicine, remark";

pub struct AthleteRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List all athletes
    pub async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athlete"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "SELECT {ATHLETE_COLUMNS} FROM athlete WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Create a new athlete and return the stored row
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        let result = sqlx::query(
            "INSERT INTO athlete (email, role, first_name, last_name, avatar, password, \
             country, bib, gender, date_of_birth, coach, sport_type, affiliation, \
             phone_number, disability_class, equipment, medicine, remark) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&req.email)
        .bind(&req.role)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.avatar)
        .bind(&req.password)
        .bind(&req.country)
        .bind(&req.bib)
        .bind(&req.gender)
        .bind(req.date_of_birth)
        .bind(&req.coach)
        .bind(&req.sport_type)
        .bind(&req.affiliation)
        .bind(&req.phone_number)
        .bind(&req.disability_class)
        .bind(&req.equipment)
        .bind(&req.medicine)
        .bind(&req.remark)
        .execute(self.pool)
        .await?;

        self.find_by_id(result.last_insert_id() as i64).await
    }

    /// Replace every column of an existing athlete. Fields absent from the
    /// request are written back as NULL.
    pub async fn update(&self, id: i64, req: &UpdateAthleteRequest) -> Result<Athlete> {
        let result = sqlx::query(
            "UPDATE athlete SET email = ?, role = ?, first_name = ?, last_name = ?, \
             avatar = ?, password = ?, country = ?, bib = ?, gender = ?, \
             date_of_birth = ?, coach = ?, sport_type = ?, affiliation = ?, \
             phone_number = ?, disability_class = ?, equipment = ?, medicine = ?, \
             remark = ? WHERE id = ?",
        )
        .bind(&req.email)
        .bind(&req.role)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.avatar)
        .bind(&req.password)
        .bind(&req.country)
        .bind(&req.bib)
        .bind(&req.gender)
        .bind(req.date_of_birth)
        .bind(&req.coach)
        .bind(&req.sport_type)
        .bind(&req.affiliation)
        .bind(&req.phone_number)
        .bind(&req.disability_class)
        .bind(&req.equipment)
        .bind(&req.medicine)
        .bind(&req.remark)
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM athlete WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Check whether an athlete row exists
    pub async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM athlete WHERE id = ?")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(count > 0)
    }
}

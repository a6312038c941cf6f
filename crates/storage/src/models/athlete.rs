use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `athletes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub created_at: NaiveDateTime,
    pub category_id: i32,
    pub training_center_id: i32,
}

/// Athlete joined with the names of its category and training center.
#[derive(Debug, Clone, FromRow)]
pub struct AthleteWithRelations {
    pub athlete_id: Uuid,
    pub name: String,
    pub cpf: String,
    pub age: i32,
    pub weight: f64,
    pub height: f64,
    pub sex: String,
    pub created_at: NaiveDateTime,
    pub category_name: String,
    pub training_center_name: String,
}

/// Listing projection; relation names are null when they cannot be resolved.
#[derive(Debug, Clone, FromRow)]
pub struct AthleteSummaryRow {
    pub name: String,
    pub category_name: Option<String>,
    pub training_center_name: Option<String>,
}

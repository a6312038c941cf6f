use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{AthleteSummaryRow, AthleteWithRelations};

/// Reference to a lookup entity by its unique name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NameRef {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome is required"))]
    pub name: String,
}

impl NameRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Full athlete representation, including the names of its category and training center
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    pub cpf: String,
    #[serde(rename = "idade")]
    pub age: i32,
    #[serde(rename = "peso")]
    pub weight: f64,
    #[serde(rename = "altura")]
    pub height: f64,
    #[serde(rename = "sexo")]
    pub sex: String,
    pub created_at: NaiveDateTime,
    #[serde(rename = "categoria")]
    pub category: NameRef,
    #[serde(rename = "centro_treinamento")]
    pub training_center: NameRef,
}

/// Reduced athlete representation used in listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteSummary {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "centro_treinamento")]
    pub training_center: Option<String>,
}

/// Request payload for registering a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, max = 50, message = "nome must be between 1 and 50 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: String,

    #[serde(rename = "idade")]
    #[validate(range(min = 0, max = 150, message = "idade must be between 0 and 150"))]
    pub age: i32,

    #[serde(rename = "peso")]
    #[validate(custom(function = "validate_positive"))]
    pub weight: f64,

    #[serde(rename = "altura")]
    #[validate(custom(function = "validate_positive"))]
    pub height: f64,

    #[serde(rename = "sexo")]
    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[serde(rename = "categoria")]
    #[validate(nested)]
    pub category: NameRef,

    #[serde(rename = "centro_treinamento")]
    #[validate(nested)]
    pub training_center: NameRef,
}

/// Request payload for a partial update; absent fields are left untouched.
/// Category and training center cannot be changed through it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "nome must be between 1 and 50 characters"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,

    #[serde(rename = "idade", default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 150, message = "idade must be between 0 and 150"))]
    pub age: Option<i32>,

    #[serde(rename = "peso", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_positive"))]
    pub weight: Option<f64>,

    #[serde(rename = "altura", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_positive"))]
    pub height: Option<f64>,

    #[serde(rename = "sexo", default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

/// Query filters for the athlete listing
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AthleteFilter {
    /// Case-insensitive substring of the athlete name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Exact CPF
    pub cpf: Option<String>,
}

impl AthleteFilter {
    /// Empty query values are treated as absent.
    pub fn normalized(self) -> Self {
        fn non_empty(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            name: non_empty(self.name),
            cpf: non_empty(self.cpf),
        }
    }
}

// Validation helpers
fn validation_error(code: &'static str, message: &'static str) -> validator::ValidationError {
    let mut error = validator::ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_cpf(cpf: &str) -> Result<(), validator::ValidationError> {
    if cpf.len() == 11 && cpf.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(validation_error("invalid_cpf", "cpf must contain exactly 11 digits"))
    }
}

fn validate_positive(value: f64) -> Result<(), validator::ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(validation_error("not_positive", "value must be greater than zero"))
    }
}

fn validate_sex(sex: &str) -> Result<(), validator::ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        Err(validation_error("invalid_sex", "sexo must be 'M' or 'F'"))
    }
}

impl From<AthleteWithRelations> for AthleteResponse {
    fn from(athlete: AthleteWithRelations) -> Self {
        Self {
            id: athlete.athlete_id,
            name: athlete.name,
            cpf: athlete.cpf,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            created_at: athlete.created_at,
            category: NameRef::new(athlete.category_name),
            training_center: NameRef::new(athlete.training_center_name),
        }
    }
}

impl From<AthleteSummaryRow> for AthleteSummary {
    fn from(row: AthleteSummaryRow) -> Self {
        Self {
            name: row.name,
            category: row.category_name,
            training_center: row.training_center_name,
        }
    }
}

use chrono::Utc;
use uuid::Uuid;

use crate::database::{Database, with_pool};
use crate::dto::athlete::{AthleteFilter, CreateAthleteRequest, UpdateAthleteRequest};
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteSummaryRow, AthleteWithRelations, Category, TrainingCenter};

const SELECT_ATHLETE: &str = r#"
    SELECT athlete_id, name, cpf, age, weight, height, sex, created_at,
           category_id, training_center_id
    FROM athletes
    WHERE athlete_id = $1
"#;

const SELECT_WITH_RELATIONS: &str = r#"
    SELECT a.athlete_id, a.name, a.cpf, a.age, a.weight, a.height, a.sex, a.created_at,
           c.name AS category_name,
           t.name AS training_center_name
    FROM athletes a
    JOIN categories c ON c.category_id = a.category_id
    JOIN training_centers t ON t.training_center_id = a.training_center_id
    WHERE a.athlete_id = $1
"#;

// $1 = case-folded name substring, $2 = exact cpf; a NULL parameter disables its filter.
// Folding happens in Rust so both backends agree on non-ASCII names.
const FILTER_CLAUSE: &str = r#"
    WHERE ($1 IS NULL OR a.name_folded LIKE '%' || $1 || '%')
      AND ($2 IS NULL OR a.cpf = $2)
"#;

pub struct AthleteRepository<'a> {
    db: &'a Database,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List athletes matching `filter`, one page at a time.
    /// Returns the page items and the total number of matches.
    pub async fn list(
        &self,
        filter: &AthleteFilter,
        pagination: &PaginationParams,
    ) -> Result<(Vec<AthleteSummaryRow>, i64)> {
        let count_sql = format!("SELECT COUNT(*) FROM athletes a {FILTER_CLAUSE}");
        let page_sql = format!(
            r#"
            SELECT a.name,
                   c.name AS category_name,
                   t.name AS training_center_name
            FROM athletes a
            LEFT JOIN categories c ON c.category_id = a.category_id
            LEFT JOIN training_centers t ON t.training_center_id = a.training_center_id
            {FILTER_CLAUSE}
            ORDER BY a.name, a.created_at
            LIMIT $3 OFFSET $4
            "#
        );

        let name_pattern = filter.name.as_deref().map(fold_case);

        let (rows, total_items) = with_pool!(self.db, pool => {
            let total_items = sqlx::query_scalar::<_, i64>(&count_sql)
                .bind(&name_pattern)
                .bind(&filter.cpf)
                .fetch_one(pool)
                .await?;

            let rows = sqlx::query_as::<_, AthleteSummaryRow>(&page_sql)
                .bind(&name_pattern)
                .bind(&filter.cpf)
                .bind(pagination.limit())
                .bind(pagination.offset())
                .fetch_all(pool)
                .await?;

            (rows, total_items)
        });

        Ok((rows, total_items))
    }

    /// Find athlete by ID, joined with its category and training center names
    pub async fn find_by_id(&self, id: Uuid) -> Result<AthleteWithRelations> {
        let athlete = with_pool!(self.db, pool => {
            sqlx::query_as::<_, AthleteWithRelations>(SELECT_WITH_RELATIONS)
                .bind(id)
                .fetch_optional(pool)
                .await?
        });

        athlete.ok_or_else(|| not_found(id))
    }

    /// Create a new athlete.
    ///
    /// Category and training center are resolved by exact name inside the same
    /// transaction as the insert. CPF uniqueness is left to the table constraint,
    /// so two concurrent inserts with the same CPF cannot both succeed.
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<AthleteWithRelations> {
        let athlete_id = Uuid::new_v4();
        let created_at = Utc::now().naive_utc();

        let athlete = with_pool!(self.db, pool => {
            let mut tx = pool.begin().await?;

            let category = sqlx::query_as::<_, Category>(
                "SELECT category_id, name FROM categories WHERE name = $1",
            )
            .bind(&req.category.name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                tracing::warn!(category = %req.category.name, "Unknown category");
                StorageError::ReferenceNotFound("Categoria não encontrada.".to_string())
            })?;

            let training_center = sqlx::query_as::<_, TrainingCenter>(
                "SELECT training_center_id, name FROM training_centers WHERE name = $1",
            )
            .bind(&req.training_center.name)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    training_center = %req.training_center.name,
                    "Unknown training center"
                );
                StorageError::ReferenceNotFound(
                    "Centro de treinamento não encontrado.".to_string(),
                )
            })?;

            sqlx::query(
                r#"
                INSERT INTO athletes (
                    athlete_id, name, name_folded, cpf, age, weight, height, sex,
                    created_at, category_id, training_center_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                "#,
            )
            .bind(athlete_id)
            .bind(&req.name)
            .bind(fold_case(&req.name))
            .bind(&req.cpf)
            .bind(req.age)
            .bind(req.weight)
            .bind(req.height)
            .bind(&req.sex)
            .bind(created_at)
            .bind(category.category_id)
            .bind(training_center.training_center_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| duplicate_cpf(e, &req.cpf))?;

            let athlete = sqlx::query_as::<_, AthleteWithRelations>(SELECT_WITH_RELATIONS)
                .bind(athlete_id)
                .fetch_one(&mut *tx)
                .await?;

            tx.commit().await?;
            athlete
        });

        tracing::info!(%athlete_id, "Athlete created");

        Ok(athlete)
    }

    /// Apply a partial update and return the stored state afterwards
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateAthleteRequest,
    ) -> Result<AthleteWithRelations> {
        let athlete = with_pool!(self.db, pool => {
            let mut tx = pool.begin().await?;

            let mut existing = sqlx::query_as::<_, Athlete>(SELECT_ATHLETE)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| not_found(id))?;

            apply_update(&mut existing, req);

            sqlx::query(
                r#"
                UPDATE athletes
                SET name = $2,
                    name_folded = $3,
                    cpf = $4,
                    age = $5,
                    weight = $6,
                    height = $7,
                    sex = $8
                WHERE athlete_id = $1
                "#,
            )
            .bind(id)
            .bind(&existing.name)
            .bind(fold_case(&existing.name))
            .bind(&existing.cpf)
            .bind(existing.age)
            .bind(existing.weight)
            .bind(existing.height)
            .bind(&existing.sex)
            .execute(&mut *tx)
            .await
            .map_err(|e| duplicate_cpf(e, &existing.cpf))?;

            let athlete = sqlx::query_as::<_, AthleteWithRelations>(SELECT_WITH_RELATIONS)
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

            tx.commit().await?;
            athlete
        });

        tracing::info!(athlete_id = %id, "Athlete updated");

        Ok(athlete)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let rows_affected = with_pool!(self.db, pool => {
            sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
                .bind(id)
                .execute(pool)
                .await?
                .rows_affected()
        });

        if rows_affected == 0 {
            return Err(not_found(id));
        }

        tracing::info!(athlete_id = %id, "Athlete deleted");

        Ok(())
    }
}

/// Overwrite only the fields present in the update.
fn apply_update(athlete: &mut Athlete, req: &UpdateAthleteRequest) {
    if let Some(name) = &req.name {
        athlete.name = name.clone();
    }
    if let Some(cpf) = &req.cpf {
        athlete.cpf = cpf.clone();
    }
    if let Some(age) = req.age {
        athlete.age = age;
    }
    if let Some(weight) = req.weight {
        athlete.weight = weight;
    }
    if let Some(height) = req.height {
        athlete.height = height;
    }
    if let Some(sex) = &req.sex {
        athlete.sex = sex.clone();
    }
}

/// Lowercased form stored next to `name` and used for substring search.
fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

fn not_found(id: Uuid) -> StorageError {
    StorageError::NotFound(format!("Atleta não encontrado no id: {id}"))
}

fn duplicate_cpf(error: sqlx::Error, cpf: &str) -> StorageError {
    StorageError::from(error).on_unique_violation(|| {
        tracing::warn!(cpf, "Duplicate CPF rejected");
        format!("Já existe um atleta cadastrado com o cpf: {cpf}")
    })
}

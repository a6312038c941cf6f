use crate::database::{Database, with_pool};
use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

/// Repository for TrainingCenter database operations
pub struct TrainingCenterRepository<'a> {
    db: &'a Database,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all training centers
    pub async fn list(&self) -> Result<Vec<TrainingCenter>> {
        let centers = with_pool!(self.db, pool => {
            sqlx::query_as::<_, TrainingCenter>(
                "SELECT training_center_id, name FROM training_centers ORDER BY name",
            )
            .fetch_all(pool)
            .await?
        });

        Ok(centers)
    }

    /// Get a training center by ID
    pub async fn find_by_id(&self, id: i32) -> Result<TrainingCenter> {
        let center = with_pool!(self.db, pool => {
            sqlx::query_as::<_, TrainingCenter>(
                "SELECT training_center_id, name FROM training_centers WHERE training_center_id = $1",
            )
            .bind(id)
            .fetch_optional(pool)
            .await?
        });

        center.ok_or_else(|| {
            StorageError::NotFound(format!("Centro de treinamento não encontrado no id: {id}"))
        })
    }

    /// Create a new training center; names are unique
    pub async fn create(&self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let result = with_pool!(self.db, pool => {
            sqlx::query_as::<_, TrainingCenter>(
                "INSERT INTO training_centers (name) VALUES ($1) RETURNING training_center_id, name",
            )
            .bind(&req.name)
            .fetch_one(pool)
            .await
        });

        let center = result.map_err(|e| {
            StorageError::from(e).on_unique_violation(|| {
                format!(
                    "Já existe um centro de treinamento cadastrado com o nome: {}",
                    req.name
                )
            })
        })?;

        tracing::info!(
            training_center_id = center.training_center_id,
            "Training center created"
        );

        Ok(center)
    }
}

use storage::{
    Database,
    dto::training_center::{CreateTrainingCenterRequest, TrainingCenterResponse},
    error::Result,
    repository::training_center::TrainingCenterRepository,
};

pub async fn list_training_centers(db: &Database) -> Result<Vec<TrainingCenterResponse>> {
    let repo = TrainingCenterRepository::new(db);
    let centers = repo.list().await?;

    Ok(centers.into_iter().map(TrainingCenterResponse::from).collect())
}

pub async fn get_training_center(db: &Database, id: i32) -> Result<TrainingCenterResponse> {
    let repo = TrainingCenterRepository::new(db);
    repo.find_by_id(id).await.map(TrainingCenterResponse::from)
}

pub async fn create_training_center(
    db: &Database,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenterResponse> {
    let repo = TrainingCenterRepository::new(db);
    repo.create(request).await.map(TrainingCenterResponse::from)
}

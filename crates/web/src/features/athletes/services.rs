use storage::{
    Database,
    dto::{
        athlete::{
            AthleteFilter, AthleteResponse, AthleteSummary, CreateAthleteRequest,
            UpdateAthleteRequest,
        },
        common::{Page, PaginationParams},
    },
    error::Result,
    repository::athlete::AthleteRepository,
};
use uuid::Uuid;

/// List athletes matching the filter, one page at a time
pub async fn list_athletes(
    db: &Database,
    filter: &AthleteFilter,
    pagination: &PaginationParams,
) -> Result<Page<AthleteSummary>> {
    let repo = AthleteRepository::new(db);
    let (rows, total_items) = repo.list(filter, pagination).await?;

    Ok(Page::new(rows, pagination, total_items).map(AthleteSummary::from))
}

/// Get athlete by ID
pub async fn get_athlete(db: &Database, id: Uuid) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(db);
    repo.find_by_id(id).await.map(AthleteResponse::from)
}

/// Create a new athlete
pub async fn create_athlete(
    db: &Database,
    request: &CreateAthleteRequest,
) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(db);
    repo.create(request).await.map(AthleteResponse::from)
}

/// Update an athlete
pub async fn update_athlete(
    db: &Database,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteResponse> {
    let repo = AthleteRepository::new(db);
    repo.update(id, request).await.map(AthleteResponse::from)
}

/// Delete an athlete
pub async fn delete_athlete(db: &Database, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(db);
    repo.delete(id).await
}

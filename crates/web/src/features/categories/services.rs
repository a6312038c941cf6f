use storage::{
    Database,
    dto::category::{CategoryResponse, CreateCategoryRequest},
    error::Result,
    repository::category::CategoryRepository,
};

pub async fn list_categories(db: &Database) -> Result<Vec<CategoryResponse>> {
    let repo = CategoryRepository::new(db);
    let categories = repo.list().await?;

    Ok(categories.into_iter().map(CategoryResponse::from).collect())
}

pub async fn get_category(db: &Database, id: i32) -> Result<CategoryResponse> {
    let repo = CategoryRepository::new(db);
    repo.find_by_id(id).await.map(CategoryResponse::from)
}

pub async fn create_category(
    db: &Database,
    request: &CreateCategoryRequest,
) -> Result<CategoryResponse> {
    let repo = CategoryRepository::new(db);
    repo.create(request).await.map(CategoryResponse::from)
}

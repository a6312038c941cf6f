use crate::database::{Database, with_pool};
use crate::dto::category::CreateCategoryRequest;
use crate::error::{Result, StorageError};
use crate::models::Category;

/// Repository for Category database operations
pub struct CategoryRepository<'a> {
    db: &'a Database,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// List all categories
    pub async fn list(&self) -> Result<Vec<Category>> {
        let categories = with_pool!(self.db, pool => {
            sqlx::query_as::<_, Category>(
                "SELECT category_id, name FROM categories ORDER BY name",
            )
            .fetch_all(pool)
            .await?
        });

        Ok(categories)
    }

    /// Get a category by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Category> {
        let category = with_pool!(self.db, pool => {
            sqlx::query_as::<_, Category>(
                "SELECT category_id, name FROM categories WHERE category_id = $1",
            )
            .bind(id)
            .fetch_optional(pool)
            .await?
        });

        category
            .ok_or_else(|| StorageError::NotFound(format!("Categoria não encontrada no id: {id}")))
    }

    /// Create a new category; names are unique
    pub async fn create(&self, req: &CreateCategoryRequest) -> Result<Category> {
        let result = with_pool!(self.db, pool => {
            sqlx::query_as::<_, Category>(
                "INSERT INTO categories (name) VALUES ($1) RETURNING category_id, name",
            )
            .bind(&req.name)
            .fetch_one(pool)
            .await
        });

        let category = result.map_err(|e| {
            StorageError::from(e).on_unique_violation(|| {
                format!("Já existe uma categoria cadastrada com o nome: {}", req.name)
            })
        })?;

        tracing::info!(category_id = category.category_id, "Category created");

        Ok(category)
    }
}

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
}

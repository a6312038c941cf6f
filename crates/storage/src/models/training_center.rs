use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct TrainingCenter {
    pub training_center_id: i32,
    pub name: String,
}

use crate::Database;

pub(crate) async fn test_db() -> Database {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    db.run_migrations().await.expect("Failed to run migrations");
    db
}

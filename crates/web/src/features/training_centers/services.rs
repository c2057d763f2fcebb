use sqlx::PgPool;
use storage::{
    dto::training_center::CreateTrainingCenterRequest, error::Result, models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

/// Create a new training center
pub async fn create_training_center(
    pool: &PgPool,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let mut tx = pool.begin().await?;
    let center = TrainingCenterRepository::new(&mut *tx).create(request).await?;
    tx.commit().await?;

    tracing::info!(training_center_id = %center.id, nome = %center.nome, "Training center created");
    Ok(center)
}

/// List all training centers
pub async fn list_training_centers(pool: &PgPool) -> Result<Vec<TrainingCenter>> {
    let mut tx = pool.begin().await?;
    let centers = TrainingCenterRepository::new(&mut *tx).list().await?;
    tx.commit().await?;
    Ok(centers)
}

/// Get training center by id
pub async fn get_training_center(pool: &PgPool, id: Uuid) -> Result<TrainingCenter> {
    let mut tx = pool.begin().await?;
    let center = TrainingCenterRepository::new(&mut *tx).find_by_id(id).await?;
    tx.commit().await?;
    Ok(center)
}

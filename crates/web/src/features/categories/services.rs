use sqlx::PgPool;
use storage::{
    dto::category::CreateCategoryRequest, error::Result, models::Category,
    repository::category::CategoryRepository,
};

/// Create a new category
pub async fn create_category(pool: &PgPool, request: &CreateCategoryRequest) -> Result<Category> {
    let mut tx = pool.begin().await?;
    let category = CategoryRepository::new(&mut *tx).create(request).await?;
    tx.commit().await?;

    tracing::info!(category_id = %category.id, nome = %category.nome, "Category created");
    Ok(category)
}

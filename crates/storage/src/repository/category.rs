use sqlx::PgConnection;
use uuid::Uuid;

use crate::dto::category::CreateCategoryRequest;
use crate::error::Result;
use crate::models::Category;

pub struct CategoryRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Create a new category with a freshly generated id
    pub async fn create(&mut self, req: &CreateCategoryRequest) -> Result<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categorias (id, nome)
            VALUES ($1, $2)
            RETURNING id, nome
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(category)
    }

    /// Find a category by exact name. Names are not unique; the first match wins.
    pub async fn find_by_name(&mut self, nome: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, nome
            FROM categorias
            WHERE nome = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(nome)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(category)
    }
}

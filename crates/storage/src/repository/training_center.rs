use sqlx::PgConnection;
use uuid::Uuid;

use crate::dto::training_center::CreateTrainingCenterRequest;
use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

pub struct TrainingCenterRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> TrainingCenterRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all training centers
    pub async fn list(&mut self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            ORDER BY nome, id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<TrainingCenter> {
        sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| {
            StorageError::NotFound(format!("Centro de treinamento não encontrado no id: {id}"))
        })
    }

    /// Find a training center by exact name. Names may repeat; the first match wins.
    pub async fn find_by_name(&mut self, nome: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, nome, endereco, proprietario
            FROM centros_treinamento
            WHERE nome = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(nome)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(center)
    }

    /// Create a new training center. Repeated names are allowed.
    pub async fn create(&mut self, req: &CreateTrainingCenterRequest) -> Result<TrainingCenter> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            INSERT INTO centros_treinamento (id, nome, endereco, proprietario)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nome, endereco, proprietario
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.nome)
        .bind(&req.endereco)
        .bind(&req.proprietario)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(center)
    }
}

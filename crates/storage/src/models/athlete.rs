use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `atletas` table. Related records are held by id only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub categoria_id: Uuid,
    pub centro_treinamento_id: Uuid,
}

use chrono::{NaiveDateTime, SubsecRound, Utc};
use sqlx::{FromRow, PgConnection, QueryBuilder};
use uuid::Uuid;

use crate::dto::athlete::{
    AthleteFilter, AthleteListResponse, AthleteResponse, CategoryRef, CreateAthleteRequest,
    TrainingCenterRef, UpdateAthleteRequest,
};
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Athlete joined with the names of its category and training center
#[derive(FromRow)]
struct AthleteRow {
    id: Uuid,
    created_at: NaiveDateTime,
    nome: String,
    cpf: String,
    idade: i32,
    peso: f64,
    altura: f64,
    sexo: String,
    categoria_nome: String,
    centro_treinamento_nome: String,
}

impl From<AthleteRow> for AthleteResponse {
    fn from(row: AthleteRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            nome: row.nome,
            cpf: row.cpf,
            idade: row.idade,
            peso: row.peso,
            altura: row.altura,
            sexo: row.sexo,
            categoria: CategoryRef {
                nome: row.categoria_nome,
            },
            centro_treinamento: TrainingCenterRef {
                nome: row.centro_treinamento_nome,
            },
        }
    }
}

#[derive(FromRow)]
struct AthleteListRow {
    nome: String,
    categoria_nome: String,
    centro_treinamento_nome: String,
}

impl From<AthleteListRow> for AthleteListResponse {
    fn from(row: AthleteListRow) -> Self {
        Self {
            nome: row.nome,
            categoria: CategoryRef {
                nome: row.categoria_nome,
            },
            centro_treinamento: TrainingCenterRef {
                nome: row.centro_treinamento_nome,
            },
        }
    }
}

fn not_found(id: Uuid) -> StorageError {
    StorageError::NotFound(format!("Atleta não encontrado no id: {id}"))
}

fn duplicate_cpf(cpf: &str) -> StorageError {
    StorageError::Duplicate(format!("Já existe um atleta cadastrado com o cpf: {cpf}"))
}

pub struct AthleteRepository<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    pub async fn exists_by_cpf(&mut self, cpf: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM atletas WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(&mut *self.conn)
                .await?;

        Ok(exists)
    }

    /// Fails with a duplicate error when another athlete already holds `cpf`
    pub async fn ensure_cpf_available(&mut self, cpf: &str) -> Result<()> {
        if self.exists_by_cpf(cpf).await? {
            return Err(duplicate_cpf(cpf));
        }
        Ok(())
    }

    /// Insert a new athlete with a generated id and creation timestamp.
    ///
    /// The caller resolves the category and training center beforehand. A
    /// unique violation on `cpf` (a concurrent create that slipped past the
    /// existence check) is reported as a duplicate.
    pub async fn create(
        &mut self,
        req: &CreateAthleteRequest,
        categoria_id: Uuid,
        centro_treinamento_id: Uuid,
    ) -> Result<Athlete> {
        // Postgres keeps microseconds; truncate so the returned value matches what is stored.
        let created_at = Utc::now().naive_utc().trunc_subsecs(6);

        sqlx::query_as::<_, Athlete>(
            r#"
            INSERT INTO atletas (
                id, created_at, nome, cpf, idade, peso, altura, sexo,
                categoria_id, centro_treinamento_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, created_at, nome, cpf, idade, peso, altura, sexo,
                      categoria_id, centro_treinamento_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(created_at)
        .bind(&req.nome)
        .bind(&req.cpf)
        .bind(req.idade)
        .bind(req.peso)
        .bind(req.altura)
        .bind(&req.sexo)
        .bind(categoria_id)
        .bind(centro_treinamento_id)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_unique_violation() {
                duplicate_cpf(&req.cpf)
            } else if err.is_foreign_key_violation() {
                StorageError::InvalidReference(
                    "Categoria ou centro de treinamento inexistente".to_string(),
                )
            } else {
                match err {
                    StorageError::Database(e) => StorageError::Write(e),
                    other => other,
                }
            }
        })
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<Athlete> {
        sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, created_at, nome, cpf, idade, peso, altura, sexo,
                   categoria_id, centro_treinamento_id
            FROM atletas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(id))
    }

    /// Full record including the category and training center names
    pub async fn find_details(&mut self, id: Uuid) -> Result<AthleteResponse> {
        let row = sqlx::query_as::<_, AthleteRow>(
            r#"
            SELECT a.id, a.created_at, a.nome, a.cpf, a.idade, a.peso, a.altura, a.sexo,
                   c.nome AS categoria_nome,
                   ct.nome AS centro_treinamento_nome
            FROM atletas a
            INNER JOIN categorias c ON c.id = a.categoria_id
            INNER JOIN centros_treinamento ct ON ct.id = a.centro_treinamento_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(row.into())
    }

    /// Every athlete matching the filter, oldest first. Pagination is left to the caller.
    pub async fn list(&mut self, filter: &AthleteFilter) -> Result<Vec<AthleteListResponse>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT a.nome,
                   c.nome AS categoria_nome,
                   ct.nome AS centro_treinamento_nome
            FROM atletas a
            INNER JOIN categorias c ON c.id = a.categoria_id
            INNER JOIN centros_treinamento ct ON ct.id = a.centro_treinamento_id
            WHERE 1=1
            "#,
        );

        if let Some(nome) = filter.nome() {
            query.push(" AND a.nome = ");
            query.push_bind(nome);
        }

        if let Some(cpf) = filter.cpf() {
            query.push(" AND a.cpf = ");
            query.push_bind(cpf);
        }

        query.push(" ORDER BY a.created_at, a.id");

        let rows: Vec<AthleteListRow> = query.build_query_as().fetch_all(&mut *self.conn).await?;

        Ok(rows.into_iter().map(AthleteListResponse::from).collect())
    }

    /// Apply the fields present in `req` on top of `existing`
    pub async fn update(
        &mut self,
        existing: &Athlete,
        req: &UpdateAthleteRequest,
    ) -> Result<Athlete> {
        let nome = req.nome.as_ref().unwrap_or(&existing.nome);
        let idade = req.idade.unwrap_or(existing.idade);

        sqlx::query_as::<_, Athlete>(
            r#"
            UPDATE atletas
            SET nome = $2,
                idade = $3
            WHERE id = $1
            RETURNING id, created_at, nome, cpf, idade, peso, altura, sexo,
                      categoria_id, centro_treinamento_id
            "#,
        )
        .bind(existing.id)
        .bind(nome)
        .bind(idade)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| not_found(existing.id))
    }

    /// Delete an athlete by ID
    pub async fn delete(&mut self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!(
                "Não foi possível remover o Atleta ID: {id}"
            )));
        }

        Ok(())
    }
}

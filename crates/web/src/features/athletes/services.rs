use sqlx::PgPool;
use storage::{
    dto::{
        athlete::{AthleteFilter, AthleteListResponse, AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
        common::{Page, paginate},
    },
    error::{Result, StorageError},
    repository::{
        athlete::AthleteRepository, category::CategoryRepository,
        training_center::TrainingCenterRepository,
    },
};
use uuid::Uuid;

/// Create a new athlete.
///
/// Resolves the category and the training center by name, rejects a cpf
/// already on file, then inserts. Every step runs in one transaction; any
/// failure drops it and nothing is written.
pub async fn create_athlete(
    pool: &PgPool,
    request: &CreateAthleteRequest,
) -> Result<AthleteResponse> {
    let mut tx = pool.begin().await?;

    let categoria_nome = &request.categoria.nome;
    let categoria = CategoryRepository::new(&mut *tx)
        .find_by_name(categoria_nome)
        .await?
        .ok_or_else(|| {
            StorageError::InvalidReference(format!(
                "A Categoria: {categoria_nome} não foi encontrada."
            ))
        })?;

    let centro_nome = &request.centro_treinamento.nome;
    let centro_treinamento = TrainingCenterRepository::new(&mut *tx)
        .find_by_name(centro_nome)
        .await?
        .ok_or_else(|| {
            StorageError::InvalidReference(format!(
                "O Centro de Treinamento: {centro_nome} não foi encontrado."
            ))
        })?;

    let mut repo = AthleteRepository::new(&mut *tx);
    repo.ensure_cpf_available(&request.cpf).await?;

    let athlete = repo
        .create(request, categoria.id, centro_treinamento.id)
        .await
        .inspect_err(|e| {
            if !e.is_client_error() {
                tracing::error!("Failed to insert athlete: {:?}", e);
            }
        })?;

    tx.commit().await?;

    tracing::info!(athlete_id = %athlete.id, "Athlete created");

    Ok(AthleteResponse::new(
        athlete,
        request.categoria.clone(),
        request.centro_treinamento.clone(),
    ))
}

/// List athletes matching the filter, one page at a time
pub async fn list_athletes(
    pool: &PgPool,
    filter: &AthleteFilter,
) -> Result<Page<AthleteListResponse>> {
    let mut tx = pool.begin().await?;
    let athletes = AthleteRepository::new(&mut *tx).list(filter).await?;
    tx.commit().await?;

    if athletes.is_empty() {
        return Err(StorageError::NotFound(format!(
            "Nenhum Atleta encontrado com as informações fornecidas: {}",
            filter.describe()
        )));
    }

    Ok(paginate(athletes, filter.page, filter.page_size))
}

/// Get athlete by id
pub async fn get_athlete(pool: &PgPool, id: Uuid) -> Result<AthleteResponse> {
    let mut tx = pool.begin().await?;
    let athlete = AthleteRepository::new(&mut *tx).find_details(id).await?;
    tx.commit().await?;
    Ok(athlete)
}

/// Update the name and/or age of an athlete
pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteResponse> {
    let mut tx = pool.begin().await?;
    let mut repo = AthleteRepository::new(&mut *tx);

    let existing = repo.find_by_id(id).await?;
    repo.update(&existing, request).await?;
    let updated = repo.find_details(id).await?;

    tx.commit().await?;

    tracing::info!(athlete_id = %id, "Athlete updated");
    Ok(updated)
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;
    AthleteRepository::new(&mut *tx).delete(id).await?;
    tx.commit().await?;

    tracing::info!(athlete_id = %id, "Athlete deleted");
    Ok(())
}

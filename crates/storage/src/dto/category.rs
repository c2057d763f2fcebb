use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCategoryRequest {
    #[schema(example = "Scale")]
    #[validate(length(min = 1, max = 10, message = "nome must be between 1 and 10 characters"))]
    pub nome: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub nome: String,
}

impl From<crate::models::Category> for CategoryResponse {
    fn from(category: crate::models::Category) -> Self {
        Self {
            id: category.id,
            nome: category.nome,
        }
    }
}

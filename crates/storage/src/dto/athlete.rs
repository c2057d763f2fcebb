use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PaginationParams};

/// Category as referenced from an athlete, by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CategoryRef {
    #[schema(example = "Scale")]
    #[validate(length(min = 1, max = 10, message = "nome must be between 1 and 10 characters"))]
    pub nome: String,
}

/// Training center as referenced from an athlete, by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct TrainingCenterRef {
    #[schema(example = "CT King")]
    #[validate(length(min = 1, max = 20, message = "nome must be between 1 and 20 characters"))]
    pub nome: String,
}

/// Request payload for creating a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAthleteRequest {
    #[schema(example = "Joao")]
    #[validate(length(min = 1, max = 50, message = "nome must be between 1 and 50 characters"))]
    pub nome: String,

    #[schema(example = "12345678900")]
    #[validate(length(equal = 11, message = "cpf must have exactly 11 characters"))]
    pub cpf: String,

    #[schema(example = 25)]
    pub idade: i32,

    /// Weight in kg
    #[schema(example = 75.5)]
    #[validate(range(exclusive_min = 0.0, message = "peso must be positive"))]
    pub peso: f64,

    /// Height in meters
    #[schema(example = 1.70)]
    #[validate(range(exclusive_min = 0.0, message = "altura must be positive"))]
    pub altura: f64,

    #[schema(example = "M")]
    #[validate(length(equal = 1, message = "sexo must be a single character"))]
    pub sexo: String,

    #[validate(nested)]
    pub categoria: CategoryRef,

    #[validate(nested)]
    pub centro_treinamento: TrainingCenterRef,
}

/// Request payload for a partial athlete update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50, message = "nome must be between 1 and 50 characters"))]
    pub nome: Option<String>,

    pub idade: Option<i32>,
}

/// Full athlete record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub id: Uuid,
    pub created_at: NaiveDateTime,
    pub nome: String,
    pub cpf: String,
    pub idade: i32,
    pub peso: f64,
    pub altura: f64,
    pub sexo: String,
    pub categoria: CategoryRef,
    pub centro_treinamento: TrainingCenterRef,
}

impl AthleteResponse {
    pub fn new(
        athlete: crate::models::Athlete,
        categoria: CategoryRef,
        centro_treinamento: TrainingCenterRef,
    ) -> Self {
        Self {
            id: athlete.id,
            created_at: athlete.created_at,
            nome: athlete.nome,
            cpf: athlete.cpf,
            idade: athlete.idade,
            peso: athlete.peso,
            altura: athlete.altura,
            sexo: athlete.sexo,
            categoria,
            centro_treinamento,
        }
    }
}

/// Reduced projection used by the athlete listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AthleteListResponse {
    pub nome: String,
    pub categoria: CategoryRef,
    pub centro_treinamento: TrainingCenterRef,
}

impl From<AthleteResponse> for AthleteListResponse {
    fn from(athlete: AthleteResponse) -> Self {
        Self {
            nome: athlete.nome,
            categoria: athlete.categoria,
            centro_treinamento: athlete.centro_treinamento,
        }
    }
}

/// Query string accepted by the athlete listing
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AthleteFilter {
    /// Exact athlete name
    pub nome: Option<String>,
    /// Exact cpf
    pub cpf: Option<String>,
    #[serde(default = "super::common::default_page")]
    pub page: u32,
    #[serde(default = "super::common::default_page_size")]
    pub page_size: u32,
}

impl Default for AthleteFilter {
    fn default() -> Self {
        Self {
            nome: None,
            cpf: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AthleteFilter {
    /// Name filter, with an empty value treated as absent.
    pub fn nome(&self) -> Option<&str> {
        self.nome.as_deref().filter(|s| !s.is_empty())
    }

    /// Cpf filter, with an empty value treated as absent.
    pub fn cpf(&self) -> Option<&str> {
        self.cpf.as_deref().filter(|s| !s.is_empty())
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.page_size)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.pagination().validate()
    }

    /// Human readable criteria, used in not-found messages.
    pub fn describe(&self) -> String {
        match (self.nome(), self.cpf()) {
            (Some(nome), Some(cpf)) => format!("nome={nome}, cpf={cpf}"),
            (Some(nome), None) => format!("nome={nome}"),
            (None, Some(cpf)) => format!("cpf={cpf}"),
            (None, None) => "sem filtros".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAthleteRequest {
        CreateAthleteRequest {
            nome: "Joao".into(),
            cpf: "12345678900".into(),
            idade: 25,
            peso: 75.5,
            altura: 1.70,
            sexo: "M".into(),
            categoria: CategoryRef {
                nome: "Scale".into(),
            },
            centro_treinamento: TrainingCenterRef {
                nome: "CT King".into(),
            },
        }
    }

    #[test]
    fn test_valid_athlete() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_cpf_must_have_eleven_characters() {
        let mut req = request();
        req.cpf = "123".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
    }

    #[test]
    fn test_weight_and_height_must_be_positive() {
        let mut req = request();
        req.peso = 0.0;
        req.altura = -1.8;
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("peso"));
        assert!(fields.contains_key("altura"));
    }

    #[test]
    fn test_sexo_single_character() {
        let mut req = request();
        req.sexo = "MF".into();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_nested_category_name_validated() {
        let mut req = request();
        req.categoria.nome = "x".repeat(11);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_deserialize_create_payload() {
        let req: CreateAthleteRequest = serde_json::from_str(
            r#"{
                "nome": "Joao",
                "cpf": "12345678900",
                "idade": 25,
                "peso": 75.5,
                "altura": 1.70,
                "sexo": "M",
                "categoria": {"nome": "Scale"},
                "centro_treinamento": {"nome": "CT King"}
            }"#,
        )
        .unwrap();

        assert_eq!(req.categoria.nome, "Scale");
        assert_eq!(req.centro_treinamento.nome, "CT King");
    }

    #[test]
    fn test_nested_references_reject_unknown_fields() {
        let category: Result<CategoryRef, _> =
            serde_json::from_str(r#"{"nome": "Scale", "id": "abc"}"#);
        assert!(category.is_err());

        let center: Result<TrainingCenterRef, _> =
            serde_json::from_str(r#"{"nome": "CT King", "endereco": "Rua X"}"#);
        assert!(center.is_err());
    }

    #[test]
    fn test_update_accepts_partial_payload() {
        let req: UpdateAthleteRequest = serde_json::from_str(r#"{"idade": 30}"#).unwrap();
        assert_eq!(req.idade, Some(30));
        assert!(req.nome.is_none());
        assert!(req.validate().is_ok());

        let empty_name = UpdateAthleteRequest {
            nome: Some(String::new()),
            idade: None,
        };
        assert!(empty_name.validate().is_err());
    }

    #[test]
    fn test_filter_treats_empty_values_as_absent() {
        let filter = AthleteFilter {
            nome: Some(String::new()),
            cpf: Some("12345678900".into()),
            ..Default::default()
        };
        assert_eq!(filter.nome(), None);
        assert_eq!(filter.cpf(), Some("12345678900"));
        assert_eq!(filter.describe(), "cpf=12345678900");
    }

    #[test]
    fn test_filter_pagination_defaults() {
        let filter: AthleteFilter = serde_json::from_str(r#"{"nome": "Joao"}"#).unwrap();
        assert_eq!(filter.page, DEFAULT_PAGE);
        assert_eq!(filter.page_size, DEFAULT_PAGE_SIZE);
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_list_projection_only_exposes_names() {
        let full = AthleteResponse {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now().naive_utc(),
            nome: "Joao".into(),
            cpf: "12345678900".into(),
            idade: 25,
            peso: 75.5,
            altura: 1.70,
            sexo: "M".into(),
            categoria: CategoryRef {
                nome: "Scale".into(),
            },
            centro_treinamento: TrainingCenterRef {
                nome: "CT King".into(),
            },
        };

        let value = serde_json::to_value(AthleteListResponse::from(full)).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(value["nome"], "Joao");
        assert_eq!(value["categoria"]["nome"], "Scale");
        assert_eq!(value["centro_treinamento"]["nome"], "CT King");
    }
}

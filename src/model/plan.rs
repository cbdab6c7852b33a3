use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDto {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "precoMensal")]
    pub monthly_price: f64,
    #[serde(rename = "beneficios")]
    pub benefits: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePlanDto {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "precoMensal")]
    pub monthly_price: f64,
    #[serde(rename = "beneficios")]
    pub benefits: String,
}

/// Partial plan update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePlanDto {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "precoMensal", default, skip_serializing_if = "Option::is_none")]
    pub monthly_price: Option<f64>,
    #[serde(rename = "beneficios", default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
}

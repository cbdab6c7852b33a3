use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateDto {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Affiliate paired with the number of members it referred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateRankingDto {
    pub affiliate: AffiliateDto,
    #[serde(rename = "indicationCount")]
    pub indication_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAffiliateDto {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    /// Owner override; the backend defaults to the signed-in user.
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAffiliateDto {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "codigo", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDto {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "planoId")]
    pub plan_id: String,
    #[serde(rename = "afiliadoId", default)]
    pub affiliate_id: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberDto {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "planoId")]
    pub plan_id: String,
    #[serde(rename = "afiliadoId", default, skip_serializing_if = "Option::is_none")]
    pub affiliate_id: Option<String>,
}

/// Partial member update.
///
/// `affiliate_id` is tri-state: `None` leaves the referral untouched,
/// `Some(None)` clears it (sent as `null`) and `Some(Some(id))` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberDto {
    #[serde(rename = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "telefone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "planoId", default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(
        rename = "afiliadoId",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_nullable"
    )]
    pub affiliate_id: Option<Option<String>>,
}

impl UpdateMemberDto {
    /// Treats an empty affiliate reference as an explicit removal.
    ///
    /// Forms submit `""` when the affiliate selection is cleared.
    pub fn normalized(mut self) -> Self {
        if let Some(Some(id)) = &self.affiliate_id {
            if id.trim().is_empty() {
                self.affiliate_id = Some(None);
            }
        }
        self
    }
}

/// Keeps an explicit `null` distinct from a missing field.
fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

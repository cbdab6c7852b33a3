use serde_json::json;

use crate::{
    client::{
        api::{
            auth::{get_session, sign_out},
            helper::{normalize_endpoint, ApiClient, Method, AUTH_BASE},
            AffiliateService, MemberService, PlanService,
        },
        model::error::{ClientError, SESSION_EXPIRED_FALLBACK, SESSION_EXPIRED_MESSAGE},
    },
    model::{
        api::PageQuery,
        member::UpdateMemberDto,
        plan::{CreatePlanDto, PlanDto},
    },
};


mod helper;

use mock::MockTransport;

pub(crate) const PLAN_ID: &str = "6f1c2b7a-3d4e-4f5a-9b8c-7d6e5f4a3b2c";

/// Backend JSON for one plan.
pub(crate) fn plan_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "nome": name,
        "precoMensal": 99.9,
        "beneficios": "Acesso completo à academia",
        "createdAt": "2025-01-10T12:00:00Z",
        "updatedAt": "2025-01-10T12:00:00Z"
    })
}

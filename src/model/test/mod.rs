use serde_json::json;

use crate::model::{
    affiliate::{AffiliateRankingDto, CreateAffiliateDto, UpdateAffiliateDto},
    api::{BackendErrorDto, PageQuery, PaginatedDto},
    member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
    validation::Validate,
};

mod api;
mod member;

const PLAN_ID: &str = "6f1c2b7a-3d4e-4f5a-9b8c-7d6e5f4a3b2c";
const AFFILIATE_ID: &str = "0b9e8d7c-6a5b-4c3d-8e2f-1a0b9c8d7e6f";

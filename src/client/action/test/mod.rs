use serde_json::json;

use crate::{
    client::{
        action::{
            affiliate::{create_affiliate, delete_affiliate},
            member::{create_member, delete_member, update_member},
            plan::{create_plan, delete_plan, update_plan},
        },
        api::{
            helper::{ApiClient, Method},
            test::{mock::MockTransport, plan_json, PLAN_ID},
        },
        model::error::ClientError,
    },
    model::{
        affiliate::CreateAffiliateDto,
        member::{CreateMemberDto, UpdateMemberDto},
        plan::{CreatePlanDto, UpdatePlanDto},
    },
};

mod member;

use serde_json::json;

use crate::{
    client::{
        action::plan::create_plan,
        api::{
            helper::ApiClient,
            test::{mock::MockTransport, plan_json, PLAN_ID},
        },
        hook::collection::{collection_key, Collection, DEFAULT_LIMIT},
        model::{cache::Cache, error::ClientError},
    },
    model::{api::PageQuery, plan::{CreatePlanDto, PlanDto}},
};

mod collection;

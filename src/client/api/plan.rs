use crate::{
    client::{
        api::helper::{ApiClient, Transport},
        model::error::ClientError,
    },
    model::{
        api::{MessageDto, PageQuery, PaginatedDto},
        plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
    },
};

pub const PLANS: &str = "/plans";

/// Typed access to the backend's plan endpoints.
#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn create_plan(&self, payload: &CreatePlanDto) -> Result<PlanDto, ClientError>;

    async fn list_plans(&self, query: &PageQuery) -> Result<PaginatedDto<PlanDto>, ClientError>;

    async fn get_plan(&self, id: &str) -> Result<PlanDto, ClientError>;

    async fn update_plan(&self, id: &str, payload: &UpdatePlanDto)
        -> Result<PlanDto, ClientError>;

    async fn delete_plan(&self, id: &str) -> Result<MessageDto, ClientError>;
}

impl<T: Transport> PlanService for ApiClient<T> {
    async fn create_plan(&self, payload: &CreatePlanDto) -> Result<PlanDto, ClientError> {
        self.post(PLANS, payload).await
    }

    async fn list_plans(&self, query: &PageQuery) -> Result<PaginatedDto<PlanDto>, ClientError> {
        self.get(&plans_path(query)).await
    }

    async fn get_plan(&self, id: &str) -> Result<PlanDto, ClientError> {
        self.get(&plan_path(id)).await
    }

    async fn update_plan(
        &self,
        id: &str,
        payload: &UpdatePlanDto,
    ) -> Result<PlanDto, ClientError> {
        self.put(&plan_path(id), payload).await
    }

    async fn delete_plan(&self, id: &str) -> Result<MessageDto, ClientError> {
        self.delete(&plan_path(id)).await
    }
}

pub fn plans_path(query: &PageQuery) -> String {
    query.append_to(PLANS)
}

pub fn plan_path(id: &str) -> String {
    format!("{}/{}", PLANS, id)
}

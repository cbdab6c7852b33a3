use crate::{
    client::{api::PlanService, model::error::ClientError},
    model::{
        plan::{CreatePlanDto, PlanDto, UpdatePlanDto},
        validation::Validate,
    },
};

pub async fn create_plan<S: PlanService>(
    service: &S,
    payload: CreatePlanDto,
) -> Result<PlanDto, ClientError> {
    payload.validate()?;
    service.create_plan(&payload).await
}

pub async fn update_plan<S: PlanService>(
    service: &S,
    id: &str,
    payload: UpdatePlanDto,
) -> Result<PlanDto, ClientError> {
    payload.validate()?;
    service.update_plan(id, &payload).await
}

pub async fn delete_plan<S: PlanService>(service: &S, id: &str) -> Result<(), ClientError> {
    service.delete_plan(id).await?;
    Ok(())
}

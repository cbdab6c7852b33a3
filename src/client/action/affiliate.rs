use crate::{
    client::{api::AffiliateService, model::error::ClientError},
    model::{
        affiliate::{AffiliateDto, CreateAffiliateDto, UpdateAffiliateDto},
        validation::Validate,
    },
};

pub async fn create_affiliate<S: AffiliateService>(
    service: &S,
    payload: CreateAffiliateDto,
) -> Result<AffiliateDto, ClientError> {
    payload.validate()?;
    service.create_affiliate(&payload).await
}

pub async fn update_affiliate<S: AffiliateService>(
    service: &S,
    id: &str,
    payload: UpdateAffiliateDto,
) -> Result<AffiliateDto, ClientError> {
    payload.validate()?;
    service.update_affiliate(id, &payload).await
}

pub async fn delete_affiliate<S: AffiliateService>(
    service: &S,
    id: &str,
) -> Result<(), ClientError> {
    service.delete_affiliate(id).await?;
    Ok(())
}

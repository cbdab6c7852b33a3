use crate::{
    client::{api::MemberService, model::error::ClientError},
    model::{
        member::{CreateMemberDto, MemberDto, UpdateMemberDto},
        validation::Validate,
    },
};

pub async fn create_member<S: MemberService>(
    service: &S,
    mut payload: CreateMemberDto,
) -> Result<MemberDto, ClientError> {
    // Forms submit "" for "no affiliate"; creation simply omits the field
    if payload
        .affiliate_id
        .as_deref()
        .is_some_and(|id| id.trim().is_empty())
    {
        payload.affiliate_id = None;
    }

    payload.validate()?;
    service.create_member(&payload).await
}

/// Updates a member; an empty affiliate id removes the referral.
pub async fn update_member<S: MemberService>(
    service: &S,
    id: &str,
    payload: UpdateMemberDto,
) -> Result<MemberDto, ClientError> {
    let payload = payload.normalized();
    payload.validate()?;
    service.update_member(id, &payload).await
}

pub async fn delete_member<S: MemberService>(service: &S, id: &str) -> Result<(), ClientError> {
    service.delete_member(id).await?;
    Ok(())
}

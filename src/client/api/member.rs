use crate::{
    client::{
        api::helper::{ApiClient, Transport},
        model::error::ClientError,
    },
    model::{
        api::{MessageDto, PageQuery, PaginatedDto},
        member::{CreateMemberDto, MemberDto, UpdateMemberDto},
    },
};

pub const MEMBERS: &str = "/members";

/// Typed access to the backend's member endpoints.
#[allow(async_fn_in_trait)]
pub trait MemberService {
    async fn create_member(&self, payload: &CreateMemberDto) -> Result<MemberDto, ClientError>;

    async fn list_members(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedDto<MemberDto>, ClientError>;

    /// Members referred by one affiliate.
    async fn list_members_by_affiliate(
        &self,
        affiliate_id: &str,
        query: &PageQuery,
    ) -> Result<PaginatedDto<MemberDto>, ClientError>;

    async fn get_member(&self, id: &str) -> Result<MemberDto, ClientError>;

    async fn update_member(
        &self,
        id: &str,
        payload: &UpdateMemberDto,
    ) -> Result<MemberDto, ClientError>;

    async fn delete_member(&self, id: &str) -> Result<MessageDto, ClientError>;
}

impl<T: Transport> MemberService for ApiClient<T> {
    async fn create_member(&self, payload: &CreateMemberDto) -> Result<MemberDto, ClientError> {
        self.post(MEMBERS, payload).await
    }

    async fn list_members(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedDto<MemberDto>, ClientError> {
        self.get(&members_path(query)).await
    }

    async fn list_members_by_affiliate(
        &self,
        affiliate_id: &str,
        query: &PageQuery,
    ) -> Result<PaginatedDto<MemberDto>, ClientError> {
        self.get(&members_by_affiliate_path(affiliate_id, query))
            .await
    }

    async fn get_member(&self, id: &str) -> Result<MemberDto, ClientError> {
        self.get(&member_path(id)).await
    }

    async fn update_member(
        &self,
        id: &str,
        payload: &UpdateMemberDto,
    ) -> Result<MemberDto, ClientError> {
        self.put(&member_path(id), payload).await
    }

    async fn delete_member(&self, id: &str) -> Result<MessageDto, ClientError> {
        self.delete(&member_path(id)).await
    }
}

pub fn members_path(query: &PageQuery) -> String {
    query.append_to(MEMBERS)
}

pub fn members_by_affiliate_path(affiliate_id: &str, query: &PageQuery) -> String {
    query.append_to(&format!("{}/by-affiliate/{}", MEMBERS, affiliate_id))
}

pub fn member_path(id: &str) -> String {
    format!("{}/{}", MEMBERS, id)
}

use crate::{
    client::{
        api::helper::{ApiClient, Transport},
        model::error::ClientError,
    },
    model::{
        affiliate::{AffiliateDto, AffiliateRankingDto, CreateAffiliateDto, UpdateAffiliateDto},
        api::{MessageDto, PageQuery, PaginatedDto},
    },
};

pub const AFFILIATES: &str = "/affiliates";
pub const RANKING: &str = "/affiliates/ranking";

/// Typed access to the backend's affiliate endpoints.
#[allow(async_fn_in_trait)]
pub trait AffiliateService {
    async fn create_affiliate(
        &self,
        payload: &CreateAffiliateDto,
    ) -> Result<AffiliateDto, ClientError>;

    async fn list_affiliates(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedDto<AffiliateDto>, ClientError>;

    /// Affiliates ordered by how many members they referred.
    async fn affiliate_ranking(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedDto<AffiliateRankingDto>, ClientError>;

    async fn get_affiliate(&self, id: &str) -> Result<AffiliateDto, ClientError>;

    async fn update_affiliate(
        &self,
        id: &str,
        payload: &UpdateAffiliateDto,
    ) -> Result<AffiliateDto, ClientError>;

    async fn delete_affiliate(&self, id: &str) -> Result<MessageDto, ClientError>;
}

impl<T: Transport> AffiliateService for ApiClient<T> {
    async fn create_affiliate(
        &self,
        payload: &CreateAffiliateDto,
    ) -> Result<AffiliateDto, ClientError> {
        self.post(AFFILIATES, payload).await
    }

    async fn list_affiliates(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedDto<AffiliateDto>, ClientError> {
        self.get(&affiliates_path(query)).await
    }

    async fn affiliate_ranking(
        &self,
        query: &PageQuery,
    ) -> Result<PaginatedDto<AffiliateRankingDto>, ClientError> {
        self.get(&ranking_path(query)).await
    }

    async fn get_affiliate(&self, id: &str) -> Result<AffiliateDto, ClientError> {
        self.get(&affiliate_path(id)).await
    }

    async fn update_affiliate(
        &self,
        id: &str,
        payload: &UpdateAffiliateDto,
    ) -> Result<AffiliateDto, ClientError> {
        self.put(&affiliate_path(id), payload).await
    }

    async fn delete_affiliate(&self, id: &str) -> Result<MessageDto, ClientError> {
        self.delete(&affiliate_path(id)).await
    }
}

pub fn affiliates_path(query: &PageQuery) -> String {
    query.append_to(AFFILIATES)
}

pub fn ranking_path(query: &PageQuery) -> String {
    query.append_to(RANKING)
}

pub fn affiliate_path(id: &str) -> String {
    format!("{}/{}", AFFILIATES, id)
}

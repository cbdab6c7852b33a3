//! Cursor-paginated collections that re-fetch on demand.
//!
//! Keys are derived from the endpoint, cursor and limit, and are `None`
//! while nobody is signed in so that nothing is fetched before a session
//! exists.

pub mod collection;

#[cfg(test)]
mod test;

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::{
    client::{
        api::{
            affiliate::{AFFILIATES, RANKING},
            browser::api_client,
            member::{members_by_affiliate_path, MEMBERS},
            plan::PLANS,
        },
        model::{auth::AuthContext, cache::Cache, error::ClientError},
    },
    model::{
        affiliate::{AffiliateDto, AffiliateRankingDto},
        api::{PageQuery, PaginatedDto},
        member::MemberDto,
        plan::PlanDto,
    },
};

use collection::collection_key;

type PageResult<T> = Option<Result<PaginatedDto<T>, ClientError>>;

/// Reactive view over one collection page.
pub struct CollectionHandle<T: 'static> {
    resource: Resource<PageResult<T>>,
}

impl<T: 'static> Clone for CollectionHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for CollectionHandle<T> {}

impl<T: Clone + 'static> CollectionHandle<T> {
    pub fn cache(&self) -> Cache<PaginatedDto<T>> {
        match &*self.resource.read() {
            None => Cache::Loading,
            Some(None) => Cache::NotFetched,
            Some(Some(result)) => Cache::from(result.clone()),
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.cache().data().map(|page| page.data.clone()).unwrap_or_default()
    }

    pub fn next_cursor(&self) -> Option<String> {
        self.cache().data().and_then(|page| page.next_cursor.clone())
    }

    pub fn has_more(&self) -> bool {
        self.cache().data().is_some_and(|page| page.has_more)
    }

    pub fn is_loading(&self) -> bool {
        !self.resource.finished()
    }

    pub fn error(&self) -> Option<ClientError> {
        self.cache().error().cloned()
    }

    /// Re-fetches the current key once.
    pub fn mutate(&self) {
        let mut resource = self.resource;
        resource.restart();
    }
}

/// Fetches the page behind `key` whenever the key changes.
pub fn use_collection<T>(key: Memo<Option<String>>) -> CollectionHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let resource = use_resource(move || async move {
        // Reading the key first keeps the resource subscribed to it
        let Some(key) = key() else {
            return None;
        };
        if !cfg!(feature = "web") {
            return None;
        }

        Some(api_client().get::<PaginatedDto<T>>(&key).await)
    });

    CollectionHandle { resource }
}

fn use_collection_at<T>(
    path: impl Fn() -> String + 'static,
    cursor: Signal<Option<String>>,
    limit: u32,
) -> CollectionHandle<T>
where
    T: DeserializeOwned + Clone + 'static,
{
    let auth = use_context::<AuthContext>();

    let key = use_memo(move || {
        let query = PageQuery {
            cursor: cursor(),
            limit: Some(limit),
        };
        collection_key(&path(), &query, auth.is_authenticated())
    });

    use_collection(key)
}

pub fn use_plans(cursor: Signal<Option<String>>, limit: u32) -> CollectionHandle<PlanDto> {
    use_collection_at(|| PLANS.to_string(), cursor, limit)
}

pub fn use_members(cursor: Signal<Option<String>>, limit: u32) -> CollectionHandle<MemberDto> {
    use_collection_at(|| MEMBERS.to_string(), cursor, limit)
}

/// Members referred by the affiliate currently held in `affiliate_id`.
pub fn use_members_by_affiliate(
    affiliate_id: Signal<String>,
    cursor: Signal<Option<String>>,
    limit: u32,
) -> CollectionHandle<MemberDto> {
    use_collection_at(
        move || members_by_affiliate_path(&affiliate_id(), &PageQuery::new()),
        cursor,
        limit,
    )
}

pub fn use_affiliates(
    cursor: Signal<Option<String>>,
    limit: u32,
) -> CollectionHandle<AffiliateDto> {
    use_collection_at(|| AFFILIATES.to_string(), cursor, limit)
}

pub fn use_affiliate_ranking(
    cursor: Signal<Option<String>>,
    limit: u32,
) -> CollectionHandle<AffiliateRankingDto> {
    use_collection_at(|| RANKING.to_string(), cursor, limit)
}

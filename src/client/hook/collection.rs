use serde::de::DeserializeOwned;

use crate::{
    client::{
        api::helper::{ApiClient, Transport},
        model::{cache::Cache, error::ClientError},
    },
    model::api::{PageQuery, PaginatedDto},
};

/// Page size used when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Cache key for a collection page, or `None` while fetching is suspended.
///
/// The key doubles as the endpoint, always carrying a `limit`.
pub fn collection_key(path: &str, query: &PageQuery, authenticated: bool) -> Option<String> {
    if !authenticated {
        return None;
    }

    let query = PageQuery {
        cursor: query.cursor.clone(),
        limit: Some(query.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)),
    };

    Some(query.append_to(path))
}

/// One cached page of a collection, independent of any UI framework.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    key: Option<String>,
    cache: Cache<PaginatedDto<T>>,
}

impl<T: DeserializeOwned> Collection<T> {
    pub fn new(key: Option<String>) -> Self {
        Self {
            key,
            cache: Cache::NotFetched,
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Switches to another key; the cached page is dropped when it changes.
    pub fn set_key(&mut self, key: Option<String>) {
        if self.key != key {
            self.key = key;
            self.cache = Cache::NotFetched;
        }
    }

    /// Fetches the page unless it is already cached for the current key.
    pub async fn revalidate<R: Transport>(&mut self, client: &ApiClient<R>) {
        if self.cache.is_settled() {
            return;
        }
        self.fetch(client).await;
    }

    /// Forces a single re-fetch, e.g. after a create, update or delete.
    pub async fn mutate<R: Transport>(&mut self, client: &ApiClient<R>) {
        self.fetch(client).await;
    }

    async fn fetch<R: Transport>(&mut self, client: &ApiClient<R>) {
        let Some(key) = self.key.clone() else {
            return;
        };

        self.cache = Cache::Loading;
        self.cache = client.get::<PaginatedDto<T>>(&key).await.into();
    }

    pub fn cache(&self) -> &Cache<PaginatedDto<T>> {
        &self.cache
    }

    /// Records of the current page; empty while unresolved or failed.
    pub fn items(&self) -> &[T] {
        self.cache
            .data()
            .map(|page| page.data.as_slice())
            .unwrap_or_default()
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.cache.data()?.next_cursor.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.cache.data().is_some_and(|page| page.has_more)
    }

    pub fn is_loading(&self) -> bool {
        self.cache.is_loading()
    }

    pub fn error(&self) -> Option<&ClientError> {
        self.cache.error()
    }
}

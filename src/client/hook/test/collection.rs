use super::*;

const PLANS_URL: &str = "/api/proxy/plans?limit=10";

fn page(ids: &[&str], next_cursor: Option<&str>) -> String {
    let data: Vec<_> = ids.iter().map(|id| plan_json(id, "Gold")).collect();
    json!({ "data": data, "nextCursor": next_cursor, "hasMore": next_cursor.is_some() })
        .to_string()
}

/// Tests that no key exists without a session.
///
/// Expected: None
#[test]
fn suspends_key_without_session() {
    assert_eq!(collection_key("/plans", &PageQuery::new(), false), None);
}

/// Tests key rendering with the default and explicit limits.
///
/// Expected: `/plans?limit=10` and `/plans?cursor=abc&limit=25`
#[test]
fn renders_key_with_limit() {
    assert_eq!(
        collection_key("/plans", &PageQuery::new(), true).as_deref(),
        Some("/plans?limit=10")
    );
    assert_eq!(
        collection_key("/plans", &PageQuery::new().cursor("abc").limit(25), true).as_deref(),
        Some("/plans?cursor=abc&limit=25")
    );
    assert_eq!(DEFAULT_LIMIT, 10);
}

/// Tests that a suspended collection never fetches.
///
/// Expected: no request, empty items
#[tokio::test]
async fn makes_no_request_without_key() {
    let client = ApiClient::new(MockTransport::new());
    let mut plans = Collection::<PlanDto>::new(collection_key("/plans", &PageQuery::new(), false));

    plans.revalidate(&client).await;
    plans.mutate(&client).await;

    assert!(client.transport().requests().is_empty());
    assert!(plans.items().is_empty());
    assert!(!plans.is_loading());
}

/// Tests the create-then-mutate flow.
///
/// Expected: the list endpoint is fetched exactly once more after mutate
#[tokio::test]
async fn refetches_once_after_create_and_mutate() -> Result<(), ClientError> {
    let transport = MockTransport::new()
        .respond(200, page(&["p-1"], None))
        .respond(201, plan_json(PLAN_ID, "Gold").to_string())
        .respond(200, page(&["p-1", PLAN_ID], None));
    let client = ApiClient::new(transport);
    let mut plans = Collection::<PlanDto>::new(collection_key("/plans", &PageQuery::new(), true));

    plans.revalidate(&client).await;
    plans.revalidate(&client).await;
    assert_eq!(client.transport().fetch_count(PLANS_URL), 1);

    let payload = CreatePlanDto {
        name: "Gold".to_string(),
        monthly_price: 99.9,
        benefits: "Acesso completo à academia".to_string(),
    };
    create_plan(&client, payload).await?;
    plans.mutate(&client).await;

    assert_eq!(client.transport().fetch_count(PLANS_URL), 2);
    assert_eq!(plans.items().len(), 2);
    assert_eq!(plans.items()[1].id, PLAN_ID);

    Ok(())
}

/// Tests cursor accessors of a partial page.
///
/// Expected: next cursor and has_more reported
#[tokio::test]
async fn exposes_next_cursor() {
    let client = ApiClient::new(MockTransport::new().respond(200, page(&["p-1"], Some("p-1"))));
    let mut plans = Collection::<PlanDto>::new(collection_key("/plans", &PageQuery::new(), true));

    plans.revalidate(&client).await;

    assert_eq!(plans.next_cursor(), Some("p-1"));
    assert!(plans.has_more());
    assert!(plans.error().is_none());
}

/// Tests that changing the key drops the cached page.
///
/// Expected: items cleared, next revalidate fetches the new key
#[tokio::test]
async fn drops_cache_on_key_change() {
    let client = ApiClient::new(
        MockTransport::new()
            .respond(200, page(&["p-1"], Some("p-1")))
            .respond(200, page(&["p-2"], None)),
    );
    let mut plans = Collection::<PlanDto>::new(collection_key("/plans", &PageQuery::new(), true));
    plans.revalidate(&client).await;

    plans.set_key(collection_key("/plans", &PageQuery::new().cursor("p-1"), true));
    assert_eq!(plans.cache(), &Cache::NotFetched);
    assert!(plans.items().is_empty());
    plans.revalidate(&client).await;

    assert_eq!(plans.key(), Some("/plans?cursor=p-1&limit=10"));
    assert_eq!(plans.items()[0].id, "p-2");
    assert_eq!(
        client.transport().requests()[1].url,
        "/api/proxy/plans?cursor=p-1&limit=10"
    );
}

/// Tests that a failed fetch is kept as the collection error.
///
/// Expected: error with status 401, no items
#[tokio::test]
async fn keeps_fetch_error() {
    let client = ApiClient::new(MockTransport::new().respond(401, "{}"));
    let mut plans = Collection::<PlanDto>::new(collection_key("/plans", &PageQuery::new(), true));

    plans.revalidate(&client).await;

    assert_eq!(plans.error().and_then(ClientError::status_code), Some(401));
    assert!(plans.items().is_empty());
}

use super::*;

/// Tests forwarding of an entity GET with its query string.
///
/// Expected: backend receives GET /api/plans?cursor=abc&limit=10 with JSON, origin and no-store headers
#[tokio::test]
async fn forwards_entity_get_with_query() -> Result<(), AppError> {
    let backend = BackendBuilder::new()
        .json(r#"{"data":[],"nextCursor":null,"hasMore":false}"#)
        .build()
        .await
        .unwrap();
    let proxy = spawn_proxy(&backend.url).await;

    let response = browser()
        .get(format!("{}/api/proxy/plans?cursor=abc&limit=10", proxy))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.text().await?,
        r#"{"data":[],"nextCursor":null,"hasMore":false}"#
    );

    let recorded = backend.last_request().await.unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.uri.path(), "/api/plans");
    assert_eq!(recorded.uri.query(), Some("cursor=abc&limit=10"));
    assert_eq!(recorded.header(CONTENT_TYPE.as_str()), Some("application/json"));
    assert_eq!(recorded.header(ORIGIN.as_str()), Some(backend.url.as_str()));
    assert_eq!(recorded.header(CACHE_CONTROL.as_str()), Some("no-store"));
    assert!(recorded.body.is_empty());

    Ok(())
}

/// Tests that caller cookies reach the backend as one header.
///
/// Expected: single Cookie header "a=1; better-auth.session_token=xyz; c=3"
#[tokio::test]
async fn forwards_joined_cookies() -> Result<(), AppError> {
    let backend = BackendBuilder::new().json("[]").build().await.unwrap();
    let proxy = spawn_proxy(&backend.url).await;

    browser()
        .get(format!("{}/api/proxy/members", proxy))
        .header(COOKIE, "a=1; better-auth.session_token=xyz")
        .header(COOKIE, " c=3 ")
        .send()
        .await?;

    let recorded = backend.last_request().await.unwrap();
    assert_eq!(recorded.header_count(COOKIE.as_str()), 1);
    assert_eq!(
        recorded.header(COOKIE.as_str()),
        Some("a=1; better-auth.session_token=xyz; c=3")
    );

    Ok(())
}

/// Tests forwarding of a request body.
///
/// Expected: backend receives PATCH /api/members/m-1 with the body unchanged
#[tokio::test]
async fn forwards_request_body() -> Result<(), AppError> {
    let backend = BackendBuilder::new().json("{}").build().await.unwrap();
    let proxy = spawn_proxy(&backend.url).await;
    let body = json!({ "afiliadoId": null }).to_string();

    browser()
        .patch(format!("{}/api/proxy/members/m-1", proxy))
        .body(body.clone())
        .send()
        .await?;

    let recorded = backend.last_request().await.unwrap();
    assert_eq!(recorded.method, "PATCH");
    assert_eq!(recorded.uri.path(), "/api/members/m-1");
    assert_eq!(recorded.body_text(), body);

    Ok(())
}

/// Tests that backend failures pass through untouched.
///
/// Expected: 422 with the backend's JSON body
#[tokio::test]
async fn passes_backend_failure_through() -> Result<(), AppError> {
    let error_body = r#"{"message":"Validation failed","errors":{"nome":["too short"]}}"#;
    let backend = BackendBuilder::new()
        .status(422)
        .json(error_body)
        .build()
        .await
        .unwrap();
    let proxy = spawn_proxy(&backend.url).await;

    let response = browser()
        .post(format!("{}/api/proxy/plans", proxy))
        .body(r#"{"nome":"G"}"#)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.text().await?, error_body);

    Ok(())
}

/// Tests sign-in through the auth proxy.
///
/// Expected: backend hit at /api/auth/sign-in/email, status and every Set-Cookie relayed
#[tokio::test]
async fn relays_auth_cookies() -> Result<(), AppError> {
    let backend = BackendBuilder::new()
        .status(200)
        .header("set-cookie", "better-auth.session_token=abc; Path=/; HttpOnly")
        .header("set-cookie", "better-auth.session_data=xyz; Path=/")
        .json(r#"{"user":{"id":"u-1"}}"#)
        .build()
        .await
        .unwrap();
    let proxy = spawn_proxy(&backend.url).await;

    let response = browser()
        .post(format!("{}/api/auth/sign-in/email", proxy))
        .body(r#"{"email":"a@b.com","password":"secret123"}"#)
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies: Vec<_> = response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect();
    assert_eq!(
        cookies,
        vec![
            "better-auth.session_token=abc; Path=/; HttpOnly",
            "better-auth.session_data=xyz; Path=/"
        ]
    );

    let recorded = backend.last_request().await.unwrap();
    assert_eq!(recorded.uri.path(), "/api/auth/sign-in/email");

    Ok(())
}

/// Tests the auth proxy when the provider is down.
///
/// Expected: 502 with the fixed connection error message
#[tokio::test]
async fn reports_unreachable_auth_server() -> Result<(), AppError> {
    let proxy = spawn_proxy(&unreachable_url().await.unwrap()).await;

    let response = browser()
        .get(format!("{}/api/auth/get-session", proxy))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await?;
    assert_eq!(
        body,
        json!({ "error": "Failed to connect to authentication server" })
    );

    Ok(())
}

/// Tests the entity proxy when the backend is down.
///
/// Expected: generic 500 error body
#[tokio::test]
async fn reports_unreachable_backend_as_internal_error() -> Result<(), AppError> {
    let proxy = spawn_proxy(&unreachable_url().await.unwrap()).await;

    let response = browser()
        .get(format!("{}/api/proxy/plans", proxy))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await?;
    assert_eq!(body, json!({ "error": "Internal server error" }));

    Ok(())
}

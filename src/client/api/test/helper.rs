use super::*;

/// Tests stripping the backend marker from endpoints.
///
/// Expected: `/api/plans` becomes `/plans`
#[test]
fn strips_api_marker() {
    assert_eq!(normalize_endpoint("/api/plans"), "/plans");
    assert_eq!(normalize_endpoint("/api/members/by-affiliate/a1"), "/members/by-affiliate/a1");
}

/// Tests adding the leading separator.
///
/// Expected: `plans` becomes `/plans`, `/plans` is unchanged
#[test]
fn ensures_single_leading_separator() {
    assert_eq!(normalize_endpoint("plans"), "/plans");
    assert_eq!(normalize_endpoint("/plans"), "/plans");
    assert_eq!(normalize_endpoint("//plans"), "/plans");
}

/// Tests that requests are rooted at the proxy prefix.
///
/// Expected: `/api/proxy/plans?limit=10`
#[tokio::test]
async fn dispatches_through_proxy_prefix() -> Result<(), ClientError> {
    let client = ApiClient::new(MockTransport::new().respond(200, "[]"));

    let _: Vec<PlanDto> = client.get("/api/plans?limit=10").await?;

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "/api/proxy/plans?limit=10");
    assert_eq!(requests[0].body, None);

    Ok(())
}

/// Tests decoding of a successful response.
///
/// Expected: typed plan returned
#[tokio::test]
async fn decodes_success_body() -> Result<(), ClientError> {
    let body = plan_json(PLAN_ID, "Gold").to_string();
    let client = ApiClient::new(MockTransport::new().respond(200, body));

    let plan: PlanDto = client.get("plans/1").await?;

    assert_eq!(plan.id, PLAN_ID);
    assert_eq!(plan.name, "Gold");

    Ok(())
}

/// Tests a backend validation failure with field-level messages.
///
/// Expected: Err(ClientError::Api) with status 400, message and `nome` errors
#[tokio::test]
async fn maps_validation_failure_to_api_error() {
    let client = ApiClient::new(MockTransport::new().respond(
        400,
        r#"{"message":"Validation failed","errors":{"nome":["too short"]}}"#,
    ));

    let result: Result<PlanDto, ClientError> = client.get("/plans/1").await;

    let Err(ClientError::Api(err)) = result else {
        panic!("Expected ClientError::Api, got: {:?}", result);
    };
    assert_eq!(err.status_code(), 400);
    assert_eq!(err.message(), "Validation failed");
    assert_eq!(err.field_errors("nome"), Some(&["too short".to_string()][..]));
}

/// Tests a 400 whose `errors` has an unexpected shape.
///
/// Expected: backend message surfaced, no field errors
#[tokio::test]
async fn keeps_message_of_malformed_validation_failure() {
    let client = ApiClient::new(MockTransport::new().respond(
        400,
        r#"{"message":"Dados inválidos","errors":{"nome":"curto"}}"#,
    ));

    let result: Result<PlanDto, ClientError> = client.get("/plans/1").await;

    let Err(ClientError::Api(err)) = result else {
        panic!("Expected ClientError::Api, got: {:?}", result);
    };
    assert_eq!(err.message(), "Dados inválidos");
    assert_eq!(err.errors(), None);
}

/// Tests a 401 whose body is not JSON.
///
/// Expected: status 401 with the session-expired fallback message
#[tokio::test]
async fn maps_unparsable_unauthorized_body_to_fallback() {
    let client = ApiClient::new(MockTransport::new().respond(401, "<html>Unauthorized</html>"));

    let result: Result<PlanDto, ClientError> = client.get("/plans/1").await;

    let Err(ClientError::Api(err)) = result else {
        panic!("Expected ClientError::Api, got: {:?}", result);
    };
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.message(), SESSION_EXPIRED_FALLBACK);
    assert!(err.is_unauthorized());
    assert_eq!(err.errors(), None);
}

/// Tests a 401 whose JSON body has no message.
///
/// Expected: the "log in again" message
#[tokio::test]
async fn maps_unauthorized_without_message() {
    let client = ApiClient::new(MockTransport::new().respond(401, "{}"));

    let result: Result<PlanDto, ClientError> = client.get("/plans/1").await;

    assert_eq!(
        result.unwrap_err().to_string(),
        SESSION_EXPIRED_MESSAGE.to_string()
    );
}

/// Tests fallbacks for other statuses.
///
/// Expected: generic message for empty bodies, `Erro: <status>` for bodies without message
#[tokio::test]
async fn maps_other_failures_to_fallbacks() {
    let client = ApiClient::new(
        MockTransport::new()
            .respond(500, "")
            .respond(404, r#"{"statusCode":404}"#),
    );

    let empty: Result<PlanDto, ClientError> = client.get("/plans/1").await;
    let without_message: Result<PlanDto, ClientError> = client.get("/plans/2").await;

    assert_eq!(empty.unwrap_err().to_string(), "Erro na requisição");
    let err = without_message.unwrap_err();
    assert_eq!(err.to_string(), "Erro: 404");
    assert_eq!(err.status_code(), Some(404));
}

/// Tests a success status with a body of the wrong shape.
///
/// Expected: Err(ClientError::Decode)
#[tokio::test]
async fn reports_undecodable_success_body() {
    let client = ApiClient::new(MockTransport::new().respond(200, r#"{"unexpected":true}"#));

    let result: Result<PlanDto, ClientError> = client.get("/plans/1").await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

/// Tests that a failed exchange surfaces as a network error.
///
/// Expected: Err(ClientError::Network)
#[tokio::test]
async fn reports_network_failure() {
    let client = ApiClient::new(MockTransport::new());

    let result: Result<PlanDto, ClientError> = client.get("/plans/1").await;

    assert!(matches!(result, Err(ClientError::Network(_))));
}

/// Tests session lookup through the auth prefix.
///
/// Expected: `null` body decodes to no session, request hits `/api/auth/get-session`
#[tokio::test]
async fn reads_missing_session_as_none() -> Result<(), ClientError> {
    let client = ApiClient::with_base(MockTransport::new().respond(200, "null"), AUTH_BASE);

    let session = get_session(&client).await?;

    assert_eq!(session, None);
    assert_eq!(client.transport().requests()[0].url, "/api/auth/get-session");

    Ok(())
}

/// Tests sign-out posts without a body.
///
/// Expected: POST `/api/auth/sign-out` with no body
#[tokio::test]
async fn signs_out_without_body() -> Result<(), ClientError> {
    let client = ApiClient::with_base(
        MockTransport::new().respond(200, r#"{"success":true}"#),
        AUTH_BASE,
    );

    sign_out(&client).await?;

    let request = &client.transport().requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "/api/auth/sign-out");
    assert_eq!(request.body, None);

    Ok(())
}

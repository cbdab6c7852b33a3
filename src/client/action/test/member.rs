use super::*;

fn member_json(affiliate_id: Option<&str>) -> String {
    json!({
        "id": "m-1",
        "nome": "Maria Silva",
        "email": "maria@example.com",
        "telefone": "11987654321",
        "planoId": PLAN_ID,
        "afiliadoId": affiliate_id,
        "createdAt": "2025-02-01T10:00:00Z",
        "updatedAt": "2025-02-01T10:00:00Z"
    })
    .to_string()
}

/// Tests that clearing the affiliate on update sends an explicit null.
///
/// Expected: body contains `"afiliadoId":null`
#[tokio::test]
async fn clears_affiliate_with_empty_selection() -> Result<(), ClientError> {
    let client = ApiClient::new(MockTransport::new().respond(200, member_json(None)));
    let payload = UpdateMemberDto {
        affiliate_id: Some(Some(String::new())),
        ..Default::default()
    };

    let member = update_member(&client, "m-1", payload).await?;

    assert_eq!(member.affiliate_id, None);
    assert_eq!(
        client.transport().requests()[0].body.as_deref(),
        Some(r#"{"afiliadoId":null}"#)
    );

    Ok(())
}

/// Tests that an empty affiliate on creation is omitted.
///
/// Expected: body has no `afiliadoId` key
#[tokio::test]
async fn omits_empty_affiliate_on_create() -> Result<(), ClientError> {
    let client = ApiClient::new(MockTransport::new().respond(201, member_json(None)));
    let payload = CreateMemberDto {
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        phone: "11987654321".to_string(),
        plan_id: PLAN_ID.to_string(),
        affiliate_id: Some(String::new()),
    };

    create_member(&client, payload).await?;

    let body = client.transport().requests()[0].body.clone().unwrap_or_default();
    let sent: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(sent.get("afiliadoId").is_none());
    assert_eq!(sent["planoId"], PLAN_ID);

    Ok(())
}

/// Tests member shape checks.
///
/// Expected: Err(ClientError::Validation) on email, telefone and planoId
#[tokio::test]
async fn rejects_malformed_member() {
    let client = ApiClient::new(MockTransport::new());
    let payload = CreateMemberDto {
        name: "Maria Silva".to_string(),
        email: "maria.example.com".to_string(),
        phone: "1198".to_string(),
        plan_id: "gold".to_string(),
        affiliate_id: None,
    };

    let err = create_member(&client, payload).await.unwrap_err();

    assert!(err.first_field_error("email").is_some());
    assert!(err.first_field_error("telefone").is_some());
    assert!(err.first_field_error("planoId").is_some());
    assert!(err.first_field_error("nome").is_none());
    assert!(client.transport().requests().is_empty());
}

/// Tests that a refused member deletion keeps the backend's reason.
///
/// Expected: Err(ClientError::Api) with status 409 and the backend message
#[tokio::test]
async fn surfaces_backend_failure_on_member_delete() {
    let client = ApiClient::new(MockTransport::new().respond(
        409,
        json!({ "message": "Membro possui pendências" }).to_string(),
    ));

    let result = delete_member(&client, "m-1").await;

    let err = result.unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    assert_eq!(err.to_string(), "Membro possui pendências");
    assert_eq!(client.transport().requests()[0].method, Method::Delete);
}

/// Tests that an unreachable proxy during affiliate deletion is reported.
///
/// Expected: Err(ClientError::Network)
#[tokio::test]
async fn surfaces_network_failure_on_affiliate_delete() {
    let client = ApiClient::new(MockTransport::new());

    let result = delete_affiliate(&client, "a-1").await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(client.transport().requests()[0].url, "/api/proxy/affiliates/a-1");
}

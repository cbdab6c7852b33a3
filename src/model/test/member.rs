use super::*;

/// Tests that an untouched affiliate reference is not sent.
///
/// Expected: no `afiliadoId` key
#[test]
fn update_without_affiliate_omits_field() -> Result<(), serde_json::Error> {
    let update = UpdateMemberDto {
        name: Some("Maria Silva".to_string()),
        ..Default::default()
    };

    assert_eq!(serde_json::to_value(&update)?, json!({ "nome": "Maria Silva" }));

    Ok(())
}

/// Tests that clearing the affiliate sends an explicit null.
///
/// Expected: `"afiliadoId": null`
#[test]
fn update_clearing_affiliate_sends_null() -> Result<(), serde_json::Error> {
    let update = UpdateMemberDto {
        affiliate_id: Some(None),
        ..Default::default()
    };

    assert_eq!(serde_json::to_value(&update)?, json!({ "afiliadoId": null }));

    Ok(())
}

/// Tests that an empty affiliate selection is normalized to a removal.
///
/// Expected: `Some(None)`
#[test]
fn normalizes_empty_affiliate_to_removal() {
    let update = UpdateMemberDto {
        affiliate_id: Some(Some(String::new())),
        ..Default::default()
    }
    .normalized();

    assert_eq!(update.affiliate_id, Some(None));
}

/// Tests that an explicit null decodes differently from a missing field.
///
/// Expected: `Some(None)` for null, `None` for missing
#[test]
fn decodes_null_affiliate_distinctly() -> Result<(), serde_json::Error> {
    let cleared: UpdateMemberDto = serde_json::from_value(json!({ "afiliadoId": null }))?;
    let untouched: UpdateMemberDto = serde_json::from_value(json!({}))?;

    assert_eq!(cleared.affiliate_id, Some(None));
    assert_eq!(untouched.affiliate_id, None);

    Ok(())
}

/// Tests decoding a member without a referring affiliate.
///
/// Expected: `affiliate_id` is `None`
#[test]
fn decodes_member_without_affiliate() -> Result<(), serde_json::Error> {
    let member: MemberDto = serde_json::from_value(json!({
        "id": "m-1",
        "nome": "João Souza",
        "email": "joao@example.com",
        "telefone": "11987654321",
        "planoId": PLAN_ID,
        "afiliadoId": null,
        "createdAt": "2025-02-01T10:00:00Z",
        "updatedAt": "2025-02-01T10:00:00Z"
    }))?;

    assert_eq!(member.plan_id, PLAN_ID);
    assert_eq!(member.affiliate_id, None);

    Ok(())
}

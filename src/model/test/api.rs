use super::*;

/// Tests query rendering with both cursor and limit.
///
/// Expected: `cursor` precedes `limit`, values are form-encoded
#[test]
fn renders_cursor_and_limit() {
    let query = PageQuery::new().cursor("abc def").limit(25);

    assert_eq!(query.to_query_string(), "cursor=abc+def&limit=25");
    assert_eq!(query.append_to("/plans"), "/plans?cursor=abc+def&limit=25");
}

/// Tests that missing, empty and zero values are left out.
///
/// Expected: path returned without a trailing `?`
#[test]
fn omits_absent_parameters() {
    assert_eq!(PageQuery::new().append_to("/members"), "/members");
    assert_eq!(
        PageQuery::new().cursor("").limit(0).append_to("/members"),
        "/members"
    );
    assert_eq!(PageQuery::new().limit(10).append_to("/members"), "/members?limit=10");
}

/// Tests decoding a backend page of plans.
///
/// Expected: camelCase pagination fields and renamed plan fields decoded
#[test]
fn decodes_paginated_plans() -> Result<(), serde_json::Error> {
    let body = json!({
        "data": [{
            "id": PLAN_ID,
            "nome": "Gold",
            "precoMensal": 99.9,
            "beneficios": "Acesso completo",
            "createdAt": "2025-01-10T12:00:00.000Z",
            "updatedAt": "2025-01-11T08:30:00.000Z"
        }],
        "nextCursor": "cursor-2",
        "hasMore": true
    });

    let page: PaginatedDto<PlanDto> = serde_json::from_value(body)?;

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].name, "Gold");
    assert_eq!(page.data[0].monthly_price, 99.9);
    assert_eq!(page.next_cursor.as_deref(), Some("cursor-2"));
    assert!(page.has_more);

    Ok(())
}

/// Tests decoding the last page, where the cursor is null.
///
/// Expected: no cursor, no more pages
#[test]
fn decodes_last_page() -> Result<(), serde_json::Error> {
    let page: PaginatedDto<AffiliateRankingDto> =
        serde_json::from_value(json!({ "data": [], "nextCursor": null, "hasMore": false }))?;

    assert!(page.data.is_empty());
    assert_eq!(page.next_cursor, None);
    assert!(!page.has_more);

    Ok(())
}

/// Tests decoding a backend validation error body.
///
/// Expected: message and ordered field messages preserved
#[test]
fn decodes_backend_error_body() -> Result<(), serde_json::Error> {
    let dto: BackendErrorDto = serde_json::from_str(
        r#"{"message":"Validation failed","errors":{"email":["required","invalid"]}}"#,
    )?;

    assert_eq!(dto.message.as_deref(), Some("Validation failed"));
    let errors = dto.errors.unwrap();
    assert_eq!(errors["email"], vec!["required", "invalid"]);

    Ok(())
}

/// Tests an error body whose `errors` is not a list per field.
///
/// Expected: message kept, errors dropped
#[test]
fn keeps_message_when_errors_are_malformed() -> Result<(), serde_json::Error> {
    let dto: BackendErrorDto =
        serde_json::from_str(r#"{"message":"Dados inválidos","errors":{"nome":"curto"}}"#)?;

    assert_eq!(dto.message.as_deref(), Some("Dados inválidos"));
    assert_eq!(dto.errors, None);

    Ok(())
}

/// Tests that partial plan updates only serialize present fields.
///
/// Expected: only `precoMensal` on the wire
#[test]
fn partial_plan_update_skips_absent_fields() -> Result<(), serde_json::Error> {
    let update = UpdatePlanDto {
        monthly_price: Some(49.5),
        ..Default::default()
    };

    assert_eq!(serde_json::to_value(&update)?, json!({ "precoMensal": 49.5 }));

    Ok(())
}

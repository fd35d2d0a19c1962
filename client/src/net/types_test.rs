use super::*;

// =============================================================
// ShortUrl serde
// =============================================================

#[test]
fn short_url_deserializes_camel_case_fields() {
    let raw = serde_json::json!({
        "id": "u-1",
        "shortCode": "abc123",
        "originalUrl": "https://example.com/a/long/path",
        "customName": "launch",
        "expiresAt": "2026-11-18T00:00:00Z",
        "clicks": 42,
        "createdAt": "2026-10-19T00:00:00Z",
        "isActive": true
    });
    let url: ShortUrl = serde_json::from_value(raw).unwrap();
    assert_eq!(url.short_code, "abc123");
    assert_eq!(url.custom_name.as_deref(), Some("launch"));
    assert_eq!(url.clicks, 42);
    assert!(url.is_active);
}

#[test]
fn short_url_custom_name_is_optional() {
    let raw = serde_json::json!({
        "id": "u-1",
        "shortCode": "abc123",
        "originalUrl": "https://example.com",
        "expiresAt": "2026-11-18T00:00:00Z",
        "clicks": 0,
        "createdAt": "2026-10-19T00:00:00Z",
        "isActive": false
    });
    let url: ShortUrl = serde_json::from_value(raw).unwrap();
    assert_eq!(url.custom_name, None);
}

#[test]
fn clicks_accepts_integral_float() {
    let stats: UrlStats = serde_json::from_value(serde_json::json!({
        "totalUrls": 3.0,
        "totalClicks": 17
    }))
    .unwrap();
    assert_eq!(stats, UrlStats { total_urls: 3, total_clicks: 17 });
}

#[test]
fn clicks_rejects_negative_and_fractional_values() {
    let negative = serde_json::from_value::<UrlStats>(serde_json::json!({
        "totalUrls": -1,
        "totalClicks": 0
    }));
    assert!(negative.is_err());

    let fractional = serde_json::from_value::<UrlStats>(serde_json::json!({
        "totalUrls": 1.5,
        "totalClicks": 0
    }));
    assert!(fractional.is_err());
}

// =============================================================
// ExpiresIn
// =============================================================

#[test]
fn expires_in_defaults_to_thirty_days() {
    assert_eq!(ExpiresIn::default().days(), 30);
}

#[test]
fn expires_in_parses_select_values() {
    assert_eq!(ExpiresIn::from_days("7"), Some(ExpiresIn::Week));
    assert_eq!(ExpiresIn::from_days(" 365 "), Some(ExpiresIn::Year));
    assert_eq!(ExpiresIn::from_days("14"), None);
    assert_eq!(ExpiresIn::from_days("soon"), None);
}

// =============================================================
// CreateShortUrlRequest
// =============================================================

#[test]
fn create_request_omits_blank_custom_name() {
    let request = CreateShortUrlRequest::new(" https://example.com/page ", "   ", ExpiresIn::Week);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({ "originalUrl": "https://example.com/page", "expiresIn": "7" })
    );
}

#[test]
fn create_request_keeps_trimmed_custom_name() {
    let request = CreateShortUrlRequest::new("https://example.com", " promo ", ExpiresIn::Quarter);
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({
            "originalUrl": "https://example.com",
            "customName": "promo",
            "expiresIn": "90"
        })
    );
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn envelope_into_data_requires_success() {
    let failed: Envelope<UrlStats> = serde_json::from_value(serde_json::json!({
        "success": false,
        "data": { "totalUrls": 1, "totalClicks": 1 },
        "message": "nope"
    }))
    .unwrap();
    assert_eq!(failed.message.as_deref(), Some("nope"));
    assert_eq!(failed.into_data(), None);
}

#[test]
fn auth_envelope_prefers_user_over_data() {
    let envelope: AuthEnvelope = serde_json::from_value(serde_json::json!({
        "status": "success",
        "message": "ok",
        "user": { "id": "a", "email": "a@example.com" },
        "data": { "id": "b", "email": "b@example.com" }
    }))
    .unwrap();
    assert_eq!(envelope.into_user().map(|u| u.id), Some("a".to_owned()));
}

#[test]
fn auth_envelope_falls_back_to_data() {
    let envelope: AuthEnvelope = serde_json::from_value(serde_json::json!({
        "status": "success",
        "message": "ok",
        "data": { "id": "b", "email": "b@example.com", "lastLogin": "2026-10-01T00:00:00Z" }
    }))
    .unwrap();
    let user = envelope.into_user().unwrap();
    assert_eq!(user.id, "b");
    assert_eq!(user.last_login.as_deref(), Some("2026-10-01T00:00:00Z"));
}

#[test]
fn resolve_response_tolerates_missing_fields() {
    let resolved: ResolveResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resolved, ResolveResponse::default());
}

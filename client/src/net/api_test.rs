use super::*;
use futures::executor::block_on;

fn http() -> HttpApi {
    HttpApi::new(&HostConfig {
        api_url: "https://api.example.test/v1/".to_owned(),
        api_token: Some("group-token".to_owned()),
        auth_url: "https://auth.example.test".to_owned(),
        ..HostConfig::default()
    })
}

// =============================================================
// URL helpers
// =============================================================

#[test]
fn join_url_collapses_duplicate_slashes() {
    assert_eq!(join_url("https://a.test/v1/", "/cards"), "https://a.test/v1/cards");
    assert_eq!(join_url("/api", "users/me"), "/api/users/me");
}

#[test]
fn card_endpoints_format_expected_paths() {
    assert_eq!(card_endpoint("/api", "c1"), "/api/cards/c1");
    assert_eq!(card_likes_endpoint("/api/", "c1"), "/api/cards/c1/likes");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc.def"), "Bearer abc.def");
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn api_requests_carry_static_token() {
    let request = http().api(Method::Get, "users/me");
    assert_eq!(request.url, "https://api.example.test/v1/users/me");
    assert_eq!(request.authorization.as_deref(), Some("group-token"));
    assert!(request.body.is_none());
}

#[test]
fn auth_requests_carry_no_static_token() {
    let request = http().auth(Method::Post, "signin");
    assert_eq!(request.url, "https://auth.example.test/signin");
    assert_eq!(request.authorization, None);
}

#[test]
fn json_body_is_serialized_into_request() {
    let update = UserUpdate { name: "Жак".to_owned(), about: "Моряк".to_owned() };
    let request = http().api(Method::Patch, "users/me").json(&update).unwrap();
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.body, Some(serde_json::json!({ "name": "Жак", "about": "Моряк" })));
}

// =============================================================
// Decoding
// =============================================================

#[test]
fn decode_reports_shape_mismatch() {
    let err = decode::<Card>(r#"{"name":"missing id"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_card_list() {
    let cards: Vec<Card> = decode(r#"[{"_id":"c1","name":"n","link":"l"}]"#).unwrap();
    assert_eq!(cards.len(), 1);
}

// =============================================================
// Outside the browser
// =============================================================

#[test]
fn calls_are_unavailable_without_browser() {
    let api = http();
    assert_eq!(block_on(api.get_user_info()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.remove_card("c1")), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.check_token("t")), Err(ApiError::Unavailable));
}

use super::*;

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
}

#[test]
fn parse_bool_rejects_unknown_values() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}

#[test]
fn api_base_url_is_never_empty() {
    assert!(!api_base_url().is_empty());
}

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
        config,
        HostConfig {
            port: 3000,
            site_root: None,
            compression: true,
        }
    );
}

#[test]
fn reads_port_site_root_and_compression() {
    let config = HostConfig::from_lookup(lookup_from(&[
        ("PORT", " 8080 "),
        ("SITE_ROOT", "/srv/nanocut"),
        ("HTTP_COMPRESSION", "off"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.site_root, Some(PathBuf::from("/srv/nanocut")));
    assert!(!config.compression);
}

#[test]
fn blank_site_root_is_ignored() {
    let config = HostConfig::from_lookup(lookup_from(&[("SITE_ROOT", "  ")])).unwrap();
    assert_eq!(config.site_root, None);
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn invalid_compression_flag_is_an_error() {
    let err = HostConfig::from_lookup(lookup_from(&[("HTTP_COMPRESSION", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBool { key: "HTTP_COMPRESSION", .. }));
}

#[test]
fn compression_flag_accepts_any_boolean_spelling() {
    for (raw, expected) in [("YES", true), (" 1 ", true), ("False", false), ("no", false)] {
        let config = HostConfig::from_lookup(lookup_from(&[("HTTP_COMPRESSION", raw)])).unwrap();
        assert_eq!(config.compression, expected, "HTTP_COMPRESSION={raw:?}");
    }
}

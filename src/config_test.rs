use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = AdminConfig::from_lookup(|_| None).unwrap();
    assert_eq!(config, AdminConfig::default());
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.verify_timeout_ms, 5_000);
    assert!(!config.policy.needs_remote());
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = AdminConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "https://api.example.com/v1/")])).unwrap();
    assert_eq!(config.api_base, "https://api.example.com/v1");
    assert_eq!(config.endpoint("/authenticate/verify"), "https://api.example.com/v1/authenticate/verify");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let config = AdminConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "  ")])).unwrap();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn policy_flags_accept_common_spellings() {
    let config = AdminConfig::from_lookup(lookup_from(&[
        (CHECK_EXPIRY_KEY, "yes"),
        (VERIFY_REMOTE_KEY, "TRUE"),
        (REQUIRE_AUTHORIZATION_KEY, "0"),
    ]))
    .unwrap();
    assert!(config.policy.check_expiry);
    assert!(config.policy.verify_remote);
    assert!(!config.policy.require_authorization);
    assert!(config.policy.needs_remote());
}

#[test]
fn invalid_flag_is_rejected() {
    let err = AdminConfig::from_lookup(lookup_from(&[(VERIFY_REMOTE_KEY, "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: VERIFY_REMOTE_KEY, value: "maybe".to_owned() });
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(AdminConfig::from_lookup(lookup_from(&[(VERIFY_TIMEOUT_KEY, "0")])).is_err());
    assert!(AdminConfig::from_lookup(lookup_from(&[(VERIFY_TIMEOUT_KEY, "soon")])).is_err());
}

#[test]
fn timeout_and_log_level_parse() {
    let config =
        AdminConfig::from_lookup(lookup_from(&[(VERIFY_TIMEOUT_KEY, " 2500 "), (LOG_LEVEL_KEY, "debug")])).unwrap();
    assert_eq!(config.verify_timeout_ms, 2_500);
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn from_env_never_fails() {
    let config = AdminConfig::from_env();
    assert!(config.verify_timeout_ms > 0);
}

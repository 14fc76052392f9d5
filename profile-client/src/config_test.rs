use super::*;

// =============================================================================
// env_parse_u64 — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_parse_u64_reads_valid_value() {
    let key = "__TEST_PC_U64_VALID_17__";
    unsafe { std::env::set_var(key, "42") };
    assert_eq!(env_parse_u64(key, 5), 42);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_invalid_falls_back_to_default() {
    let key = "__TEST_PC_U64_INVALID_18__";
    unsafe { std::env::set_var(key, "soon") };
    assert_eq!(env_parse_u64(key, 5), 5);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_u64_unset_falls_back_to_default() {
    assert_eq!(env_parse_u64("__TEST_PC_U64_SURELY_UNSET_19__", 7), 7);
}

// =============================================================================
// config construction
// =============================================================================

#[test]
fn new_trims_trailing_slash_and_defaults_timeouts() {
    let cfg = ProfileClientConfig::new("http://profile:8082/");
    assert_eq!(cfg.base_url, "http://profile:8082");
    assert_eq!(
        cfg.timeouts,
        ProfileClientTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

// USER_SERVICE_URL is a shared global, so the env round trip runs as a single
// sequential test instead of racing across threads.
#[test]
fn from_env_round_trip() {
    unsafe {
        std::env::remove_var("USER_SERVICE_URL");
        std::env::remove_var("USER_SERVICE_TIMEOUT_SECS");
        std::env::remove_var("USER_SERVICE_CONNECT_TIMEOUT_SECS");
    }

    let err = ProfileClientConfig::from_env().unwrap_err();
    assert!(matches!(err, ProfileClientError::MissingBaseUrl { .. }));
    assert!(err.to_string().contains("USER_SERVICE_URL"));

    unsafe { std::env::set_var("USER_SERVICE_URL", "http://profile:8082/") };
    let cfg = ProfileClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "http://profile:8082");
    assert_eq!(cfg.timeouts, ProfileClientTimeouts::default());

    unsafe {
        std::env::set_var("USER_SERVICE_TIMEOUT_SECS", "9");
        std::env::set_var("USER_SERVICE_CONNECT_TIMEOUT_SECS", "3");
    }
    let cfg = ProfileClientConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts, ProfileClientTimeouts { request_secs: 9, connect_secs: 3 });

    unsafe {
        std::env::remove_var("USER_SERVICE_URL");
        std::env::remove_var("USER_SERVICE_TIMEOUT_SECS");
        std::env::remove_var("USER_SERVICE_CONNECT_TIMEOUT_SECS");
    }
}

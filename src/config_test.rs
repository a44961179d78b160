use super::*;

// =============================================================================
// parse_tenants
// =============================================================================

#[test]
fn parse_tenants_unset_uses_defaults() {
    assert_eq!(parse_tenants(None).unwrap(), vec!["kolder", "jpont"]);
}

#[test]
fn parse_tenants_trims_and_drops_empties() {
    assert_eq!(parse_tenants(Some(" acme, ,globex ,")).unwrap(), vec!["acme", "globex"]);
}

#[test]
fn parse_tenants_blank_uses_defaults() {
    assert_eq!(parse_tenants(Some(" , ,")).unwrap(), vec!["kolder", "jpont"]);
}

#[test]
fn parse_tenants_keeps_case() {
    assert_eq!(parse_tenants(Some("Acme")).unwrap(), vec!["Acme"]);
}

#[test]
fn parse_tenants_rejects_fallback_key() {
    let err = parse_tenants(Some("default,kolder")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "TENANTS", .. }), "{err}");
    assert!(parse_tenants(Some(" default ")).is_err());
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "  TRUE "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "Off"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// AppConfig
// =============================================================================

/// # Safety
/// Only this test touches `PORT`, `TENANTS` and `TRUST_FORWARDED_HOST`.
unsafe fn clear_app_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TENANTS");
        std::env::remove_var("TRUST_FORWARDED_HOST");
    }
}

#[test]
fn from_env_defaults_overrides_and_invalid_values() {
    unsafe { clear_app_env() };
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg, AppConfig::default());

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("TENANTS", "acme,globex");
        std::env::set_var("TRUST_FORWARDED_HOST", "yes");
    }
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.tenants, vec!["acme", "globex"]);
    assert!(cfg.trust_forwarded_host);

    unsafe { std::env::set_var("TRUST_FORWARDED_HOST", "maybe") };
    let err = AppConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("TRUST_FORWARDED_HOST") && err.contains("maybe"), "{err}");

    unsafe {
        std::env::set_var("TRUST_FORWARDED_HOST", "off");
        std::env::set_var("TENANTS", "default,kolder");
    }
    let err = AppConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("TENANTS"), "{err}");

    unsafe {
        std::env::set_var("TENANTS", "kolder");
        std::env::set_var("PORT", "eighty");
    }
    let err = AppConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("PORT"), "{err}");

    unsafe { clear_app_env() };
}

#[test]
fn resolver_uses_configured_tenants() {
    let cfg = AppConfig { tenants: vec!["acme".into()], ..AppConfig::default() };
    let resolver = cfg.resolver();
    assert_eq!(resolver.resolve("acme.okron.com"), "acme");
    assert!(resolver.resolve("kolder.okron.com").is_fallback());
}

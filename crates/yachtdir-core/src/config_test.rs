use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "YACHTDIR_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.directory_path,
        std::path::PathBuf::from("./config/directory.yaml")
    );
    assert!((cfg.default_radius_km - 500.0).abs() < f64::EPSILON);
    assert_eq!(cfg.default_max_results, 10);
    assert_eq!(cfg.max_results_cap, 100);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YACHTDIR_BIND_ADDR"),
        "expected InvalidEnvVar(YACHTDIR_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn default_radius_override() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_DEFAULT_RADIUS_KM", "120.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.default_radius_km - 120.5).abs() < f64::EPSILON);
}

#[test]
fn default_radius_invalid() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_DEFAULT_RADIUS_KM", "far");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YACHTDIR_DEFAULT_RADIUS_KM"),
        "expected InvalidEnvVar(YACHTDIR_DEFAULT_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn default_radius_must_be_positive() {
    for raw in ["0", "-5", "NaN", "inf"] {
        let mut map = HashMap::new();
        map.insert("YACHTDIR_DEFAULT_RADIUS_KM", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YACHTDIR_DEFAULT_RADIUS_KM"),
            "expected rejection for {raw}, got: {result:?}"
        );
    }
}

#[test]
fn default_max_results_override() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_DEFAULT_MAX_RESULTS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_max_results, 25);
}

#[test]
fn default_max_results_invalid() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_DEFAULT_MAX_RESULTS", "ten");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "YACHTDIR_DEFAULT_MAX_RESULTS"),
        "expected InvalidEnvVar(YACHTDIR_DEFAULT_MAX_RESULTS), got: {result:?}"
    );
}

#[test]
fn default_max_results_above_cap_fails() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_DEFAULT_MAX_RESULTS", "50");
    map.insert("YACHTDIR_MAX_RESULTS_CAP", "20");
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_err(), "expected Err, got: {result:?}");
}

#[test]
fn directory_path_override() {
    let mut map = HashMap::new();
    map.insert("YACHTDIR_DIRECTORY_PATH", "/srv/yachtdir/directory.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.directory_path,
        std::path::PathBuf::from("/srv/yachtdir/directory.yaml")
    );
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Production.to_string(), "production");
    assert_eq!(Environment::Development.to_string(), "development");
}

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_radius = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = or_default(var, default)
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(invalid(var, format!("radius must be positive, got {value}")))
        }
    };

    let env = parse_environment(&or_default("YACHTDIR_ENV", "development"))?;
    let bind_addr = parse_addr("YACHTDIR_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("YACHTDIR_LOG_LEVEL", "info");
    let directory_path = PathBuf::from(or_default(
        "YACHTDIR_DIRECTORY_PATH",
        "./config/directory.yaml",
    ));
    let default_radius_km = parse_radius("YACHTDIR_DEFAULT_RADIUS_KM", "500")?;
    let default_max_results = parse_usize("YACHTDIR_DEFAULT_MAX_RESULTS", "10")?;
    let max_results_cap = parse_usize("YACHTDIR_MAX_RESULTS_CAP", "100")?;

    if max_results_cap == 0 || default_max_results > max_results_cap {
        return Err(invalid(
            "YACHTDIR_DEFAULT_MAX_RESULTS",
            format!(
                "default {default_max_results} must not exceed cap {max_results_cap} (cap must be > 0)"
            ),
        ));
    }

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        directory_path,
        default_radius_km,
        default_max_results,
        max_results_cap,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "YACHTDIR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value. Every
/// variable has a default; none is required.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u8 = |var: &str, default: &str| -> Result<u8, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u8>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let geocode_base = or_default("ATLAS_GEOCODE_BASE", "https://geo.malmo.se/api/search");
    let map_base = or_default("ATLAS_MAP_BASE", "https://stadsatlas.malmo.se/stadsatlas/");
    let map_layer = or_default("ATLAS_MAP_LAYER", "miljoparkering_l");
    let map_zoom = parse_u8("ATLAS_MAP_ZOOM", "18")?;
    let request_timeout_secs = parse_u64("ATLAS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ATLAS_USER_AGENT", "atlas-bridge/0.1 (address-search)");
    let log_level = or_default("ATLAS_LOG_LEVEL", "info");

    Ok(AppConfig {
        geocode_base,
        map_base,
        map_layer,
        map_zoom,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

#[cfg(test)]
mod tests {
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
    fn empty_environment_yields_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("all vars default");

        assert_eq!(cfg.geocode_base, "https://geo.malmo.se/api/search");
        assert_eq!(cfg.map_base, "https://stadsatlas.malmo.se/stadsatlas/");
        assert_eq!(cfg.map_layer, "miljoparkering_l");
        assert_eq!(cfg.map_zoom, 18);
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "atlas-bridge/0.1 (address-search)");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn overrides_are_honoured() {
        let mut map = HashMap::new();
        map.insert("ATLAS_GEOCODE_BASE", "http://localhost:9999/search");
        map.insert("ATLAS_MAP_LAYER", "cykelparkering_l");
        map.insert("ATLAS_MAP_ZOOM", "15");
        map.insert("ATLAS_REQUEST_TIMEOUT_SECS", "5");

        let cfg = build_app_config(lookup_from_map(&map)).expect("valid overrides");
        assert_eq!(cfg.geocode_base, "http://localhost:9999/search");
        assert_eq!(cfg.map_layer, "cykelparkering_l");
        assert_eq!(cfg.map_zoom, 15);
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn invalid_zoom_is_rejected() {
        let mut map = HashMap::new();
        map.insert("ATLAS_MAP_ZOOM", "deep");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ATLAS_MAP_ZOOM"),
            "expected InvalidEnvVar(ATLAS_MAP_ZOOM), got: {result:?}"
        );
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("ATLAS_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ATLAS_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(ATLAS_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }
}

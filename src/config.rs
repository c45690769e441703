use chrono::TimeDelta;
use std::{env, fmt, str::FromStr};

/// Runtime settings of the dashboard, read once at startup.
///
/// Every value may be overridden through an environment variable; unset variables
/// fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Root URL of the open-notify API, the endpoint paths are appended to it.
    base_url: String,
    /// `host:port` the page server listens on. The host may be a name, it is
    /// resolved when the listener binds.
    bind_addr: String,
    /// How long a successful upstream body stays valid in the response cache.
    cache_ttl: TimeDelta,
    /// Per-request timeout of the upstream HTTP client.
    request_timeout: std::time::Duration,
}

impl DashboardConfig {
    pub const BASE_URL_VAR: &'static str = "ISS_DASH_BASE_URL";
    pub const BIND_VAR: &'static str = "ISS_DASH_BIND";
    pub const CACHE_TTL_VAR: &'static str = "ISS_DASH_CACHE_TTL_SECS";
    pub const TIMEOUT_VAR: &'static str = "ISS_DASH_TIMEOUT_SECS";

    const DEFAULT_BASE_URL: &'static str = "http://api.open-notify.org";
    const DEFAULT_BIND: &'static str = "127.0.0.1:8501";
    const DEFAULT_CACHE_TTL_SECS: u32 = 60;
    const DEFAULT_TIMEOUT_SECS: u64 = 5;

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns a `ConfigError` naming the first variable whose value cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let base_url = lookup(Self::BASE_URL_VAR)
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(ConfigError::new(Self::BASE_URL_VAR, ""));
        }
        let bind_addr = lookup(Self::BIND_VAR)
            .map_or_else(|| Self::DEFAULT_BIND.to_string(), |raw| raw.trim().to_string());
        if !is_host_port(&bind_addr) {
            return Err(ConfigError::new(Self::BIND_VAR, &bind_addr));
        }
        let ttl_secs: u32 =
            parse_or(&lookup, Self::CACHE_TTL_VAR, || Ok(Self::DEFAULT_CACHE_TTL_SECS))?;
        let timeout_secs: u64 =
            parse_or(&lookup, Self::TIMEOUT_VAR, || Ok(Self::DEFAULT_TIMEOUT_SECS))?;
        if timeout_secs == 0 {
            return Err(ConfigError::new(Self::TIMEOUT_VAR, "0"));
        }

        Ok(Self {
            base_url,
            bind_addr,
            cache_ttl: TimeDelta::seconds(i64::from(ttl_secs)),
            request_timeout: std::time::Duration::from_secs(timeout_secs),
        })
    }

    pub fn base_url(&self) -> &str { self.base_url.as_str() }
    pub fn bind_addr(&self) -> &str { self.bind_addr.as_str() }
    pub fn cache_ttl(&self) -> TimeDelta { self.cache_ttl }
    pub fn request_timeout(&self) -> std::time::Duration { self.request_timeout }
}

/// Accepts `host:port` with a non-empty host (name, IPv4 or bracketed IPv6) and a
/// valid port number.
fn is_host_port(addr: &str) -> bool {
    addr.rsplit_once(':')
        .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok())
}

fn parse_or<T, F, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> Result<T, ConfigError>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::new(key, &raw)),
        None => default(),
    }
}

/// An environment variable carried a value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    variable: &'static str,
    value: String,
}

impl ConfigError {
    fn new(variable: &'static str, value: &str) -> Self {
        Self { variable, value: value.to_string() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.variable)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = DashboardConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url(), "http://api.open-notify.org");
        assert_eq!(config.bind_addr(), "127.0.0.1:8501");
        assert_eq!(config.cache_ttl(), TimeDelta::seconds(60));
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(5));
    }

    #[test]
    fn overrides_are_parsed_and_trailing_slash_dropped() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (DashboardConfig::BASE_URL_VAR, "http://localhost:9000/"),
            (DashboardConfig::BIND_VAR, "0.0.0.0:8080"),
            (DashboardConfig::CACHE_TTL_VAR, "0"),
            (DashboardConfig::TIMEOUT_VAR, " 10 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:9000");
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.cache_ttl(), TimeDelta::zero());
        assert_eq!(config.request_timeout(), std::time::Duration::from_secs(10));
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = DashboardConfig::from_lookup(lookup_from(&[(
            DashboardConfig::CACHE_TTL_VAR,
            "soon",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains(DashboardConfig::CACHE_TTL_VAR));

        let err =
            DashboardConfig::from_lookup(lookup_from(&[(DashboardConfig::TIMEOUT_VAR, "0")]))
                .unwrap_err();
        assert!(err.to_string().contains(DashboardConfig::TIMEOUT_VAR));
    }

    #[test]
    fn bind_accepts_host_names_and_rejects_missing_ports() {
        let config =
            DashboardConfig::from_lookup(lookup_from(&[(DashboardConfig::BIND_VAR, "localhost:8501")]))
                .unwrap();
        assert_eq!(config.bind_addr(), "localhost:8501");

        let config =
            DashboardConfig::from_lookup(lookup_from(&[(DashboardConfig::BIND_VAR, "[::1]:9000")]))
                .unwrap();
        assert_eq!(config.bind_addr(), "[::1]:9000");

        for bad in ["localhost", ":8501", "localhost:http", "localhost:70000"] {
            let err = DashboardConfig::from_lookup(lookup_from(&[(DashboardConfig::BIND_VAR, bad)]))
                .unwrap_err();
            assert!(err.to_string().contains(DashboardConfig::BIND_VAR));
        }
    }
}

//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use banklite_auth::DEFAULT_COST;
use banklite_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `BANKLITE_BIND_ADDR`
    pub bind_addr: SocketAddr,
    /// `BANKLITE_USERS_FILE`
    pub users_file: PathBuf,
    /// `BANKLITE_BCRYPT_COST`
    pub bcrypt_cost: u32,
    /// `BANKLITE_LOG_FORMAT`
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            users_file: PathBuf::from(DEFAULT_USERS_FILE),
            bcrypt_cost: DEFAULT_COST,
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3001))
}

impl Config {
    /// Read the process environment.
    ///
    /// Returns the config plus warnings for values that were ignored; they
    /// are returned rather than logged because logging is configured from
    /// this same config.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(raw) = lookup("BANKLITE_BIND_ADDR") {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warnings.push(format!(
                    "BANKLITE_BIND_ADDR={raw:?} is invalid ({e}); using {DEFAULT_BIND_ADDR}"
                )),
            }
        }

        if let Some(raw) = lookup("BANKLITE_USERS_FILE") {
            if raw.trim().is_empty() {
                warnings.push(format!("BANKLITE_USERS_FILE is empty; using {DEFAULT_USERS_FILE}"));
            } else {
                config.users_file = PathBuf::from(raw);
            }
        }

        if let Some(raw) = lookup("BANKLITE_BCRYPT_COST") {
            match raw.trim().parse::<u32>() {
                Ok(cost) if banklite_auth::PasswordHasher::with_cost(cost).is_ok() => {
                    config.bcrypt_cost = cost
                }
                _ => warnings.push(format!(
                    "BANKLITE_BCRYPT_COST={raw:?} is not a valid bcrypt cost; using {DEFAULT_COST}"
                )),
            }
        }

        if let Some(raw) = lookup("BANKLITE_LOG_FORMAT") {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => warnings.push(format!("BANKLITE_LOG_FORMAT: {e}; using json")),
            }
        }

        (config, warnings)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let (config, warnings) = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr.port(), 3001);
        assert_eq!(config.bcrypt_cost, 10);
        assert!(warnings.is_empty());
    }

    #[test]
    fn reads_every_variable() {
        let (config, warnings) = Config::from_lookup(lookup(&[
            ("BANKLITE_BIND_ADDR", "127.0.0.1:9000"),
            ("BANKLITE_USERS_FILE", "/var/lib/banklite/users.json"),
            ("BANKLITE_BCRYPT_COST", "12"),
            ("BANKLITE_LOG_FORMAT", "pretty"),
        ]));
        assert!(warnings.is_empty());
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.users_file, PathBuf::from("/var/lib/banklite/users.json"));
        assert_eq!(config.bcrypt_cost, 12);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_values_fall_back_with_warnings() {
        let (config, warnings) = Config::from_lookup(lookup(&[
            ("BANKLITE_BIND_ADDR", "not-an-addr"),
            ("BANKLITE_BCRYPT_COST", "99"),
            ("BANKLITE_LOG_FORMAT", "xml"),
        ]));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 3);
    }
}

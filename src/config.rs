// ABOUTME: Database connection settings read from the environment
// ABOUTME: Maps DB_* variables onto a tokio-postgres Config

use std::fmt;

pub const ENV_USERNAME: &str = "DB_USERNAME";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_HOSTNAME: &str = "DB_HOSTNAME";
pub const ENV_NAME: &str = "DB_NAME";

const APPLICATION_NAME: &str = "route-tables";

/// Connection parameters for the database holding `optional_loops`
///
/// Every field is optional. A missing value is left unset on the driver
/// config, so the failure surfaces when connecting rather than here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    pub database: Option<String>,
}

impl DbConfig {
    /// Read `DB_USERNAME`, `DB_PASSWORD`, `DB_HOSTNAME` and `DB_NAME`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            username: get(ENV_USERNAME),
            password: get(ENV_PASSWORD),
            hostname: get(ENV_HOSTNAME),
            database: get(ENV_NAME),
        }
    }

    /// Names of the variables that were not provided
    pub fn missing_variables(&self) -> Vec<&'static str> {
        [
            (ENV_USERNAME, self.username.is_none()),
            (ENV_PASSWORD, self.password.is_none()),
            (ENV_HOSTNAME, self.hostname.is_none()),
            (ENV_NAME, self.database.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Convert into a driver config, setting only the fields that are present
    ///
    /// `DB_HOSTNAME` may carry an explicit port (`db.internal:6543`).
    pub fn to_pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config.application_name(APPLICATION_NAME);

        if let Some(user) = &self.username {
            config.user(user);
        }
        if let Some(password) = &self.password {
            config.password(password);
        }
        if let Some(hostname) = &self.hostname {
            let (host, port) = split_host_port(hostname);
            config.host(host);
            if let Some(port) = port {
                config.port(port);
            }
        }
        if let Some(database) = &self.database {
            config.dbname(database);
        }

        config
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("hostname", &self.hostname)
            .field("database", &self.database)
            .finish()
    }
}

fn split_host_port(hostname: &str) -> (&str, Option<u16>) {
    // Bare IPv6 addresses contain colons without carrying a port
    if hostname.matches(':').count() > 1 && !hostname.starts_with('[') {
        return (hostname, None);
    }

    match hostname.rsplit_once(':') {
        Some((host, port)) => match port.parse::<u16>() {
            Ok(port) => (host.trim_start_matches('[').trim_end_matches(']'), Some(port)),
            Err(_) => (hostname, None),
        },
        None => (hostname, None),
    }
}

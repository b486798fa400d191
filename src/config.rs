use std::env;

use crate::utils::parse_timezone;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub app_timezone: Option<chrono_tz::Tz>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            app_timezone: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {:?}", raw))?,
            None => defaults.port,
        };

        let app_timezone = lookup("APP_TIMEZONE")
            .filter(|tz| !tz.trim().is_empty())
            .map(|tz| parse_timezone(tz.trim()))
            .transpose()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(Config {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            app_timezone,
        })
    }

    /// Host and port for `TcpListener::bind`, which resolves host names itself.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use eyre::{eyre, WrapErr};

use flightquote_export::styles::ThemeName;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(eyre!("unknown log format {other:?}, expected json or pretty")),
        }
    }
}

/// Server settings, read once from the environment at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
    /// Static files, logos and the footer image.
    pub public_dir: PathBuf,
    pub airports_path: PathBuf,
    pub corp_names_path: PathBuf,
    pub theme: ThemeName,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from("public"),
            airports_path: PathBuf::from("airports.csv"),
            corp_names_path: PathBuf::from("corpNames.csv"),
            theme: ThemeName::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; unset or blank keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("PORT") {
            config.port = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("invalid PORT {raw:?}"))?;
        }
        if let Some(raw) = get("FLIGHTQUOTE_BIND") {
            config.bind = raw
                .trim()
                .parse()
                .wrap_err_with(|| format!("invalid FLIGHTQUOTE_BIND {raw:?}"))?;
        }
        if let Some(raw) = get("FLIGHTQUOTE_PUBLIC_DIR") {
            config.public_dir = PathBuf::from(raw);
        }
        if let Some(raw) = get("FLIGHTQUOTE_AIRPORTS") {
            config.airports_path = PathBuf::from(raw);
        }
        if let Some(raw) = get("FLIGHTQUOTE_CORP_NAMES") {
            config.corp_names_path = PathBuf::from(raw);
        }
        if let Some(raw) = get("FLIGHTQUOTE_THEME") {
            config.theme = raw.parse().wrap_err("invalid FLIGHTQUOTE_THEME")?;
        }
        if let Some(raw) = get("FLIGHTQUOTE_LOG_FORMAT") {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

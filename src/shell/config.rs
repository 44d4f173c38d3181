use anyhow::Context;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub activities_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => 8000,
        };
        let activities_file = env::var("ACTIVITIES_FILE").ok().map(PathBuf::from);
        Ok(Self {
            host,
            port,
            activities_file,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.parse()
        .with_context(|| format!("PORT must be a number between 0 and 65535, got {raw:?}"))
}

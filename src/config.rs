use std::{env, path::PathBuf};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Optional JSON file used to populate the store at startup.
    pub seed_path: Option<PathBuf>,
    pub concurrency_limit: usize,
    pub body_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            seed_path: None,
            concurrency_limit: 100,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(defaults.port);
        let seed_path = env::var("STORE_SEED_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let concurrency_limit = parse_or("CONCURRENCY_LIMIT", defaults.concurrency_limit)?;
        let body_limit_bytes = parse_or("BODY_LIMIT_BYTES", defaults.body_limit_bytes)?;

        Ok(Self {
            host,
            port,
            seed_path,
            concurrency_limit,
            body_limit_bytes,
        })
    }
}

fn parse_or(key: &str, default: usize) -> anyhow::Result<usize> {
    match env::var(key) {
        Ok(raw) => parse_positive(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_positive(key: &str, raw: &str) -> anyhow::Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(0) => anyhow::bail!("{key} must be a positive integer, got 0"),
        Ok(value) => Ok(value),
        Err(e) => Err(anyhow::anyhow!("{key} must be a positive integer: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_must_be_positive() {
        assert_eq!(parse_positive("CONCURRENCY_LIMIT", "8").unwrap(), 8);
        assert!(parse_positive("CONCURRENCY_LIMIT", "0").is_err());
        assert!(parse_positive("CONCURRENCY_LIMIT", "abc").is_err());
        assert!(parse_positive("BODY_LIMIT_BYTES", "-1").is_err());
    }
}

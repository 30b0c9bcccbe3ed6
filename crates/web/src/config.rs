use anyhow::{Context, Result};
use chrono::FixedOffset;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Timezone every registration window is expressed in.
    pub host_utc_offset: FixedOffset,
    pub leaderboard_refresh_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            host_utc_offset: parse_offset(
                &std::env::var("HOST_UTC_OFFSET").unwrap_or_else(|_| "+00:00".to_string()),
            )?,
            leaderboard_refresh_secs: match std::env::var("LEADERBOARD_REFRESH_SECS") {
                Ok(secs) => secs
                    .parse()
                    .context("LEADERBOARD_REFRESH_SECS must be a number of seconds")?,
                Err(_) => 30,
            },
        })
    }
}

fn parse_offset(raw: &str) -> Result<FixedOffset> {
    raw.trim()
        .parse::<FixedOffset>()
        .with_context(|| format!("HOST_UTC_OFFSET must look like +02:00, got '{}'", raw))
}

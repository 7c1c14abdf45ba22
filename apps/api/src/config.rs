use anyhow::{bail, Context, Result};

use crate::layout::page::PageSize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Page size for the markdown render paths. The structured resume path
    /// always uses A4.
    pub page_size: PageSize,
    /// Number of leading input lines within which pipe-delimited lines are
    /// centered as contact info on the markdown resume path. 0 disables.
    pub contact_line_threshold: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            page_size: parse_page_size(
                &std::env::var("PAGE_SIZE").unwrap_or_else(|_| "a4".to_string()),
            )?,
            contact_line_threshold: std::env::var("CONTACT_LINE_THRESHOLD")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("CONTACT_LINE_THRESHOLD must be a non-negative integer")?,
        })
    }
}

fn parse_page_size(value: &str) -> Result<PageSize> {
    match value.to_ascii_lowercase().as_str() {
        "a4" => Ok(PageSize::A4),
        "letter" => Ok(PageSize::Letter),
        other => bail!("PAGE_SIZE must be 'a4' or 'letter', got '{other}'"),
    }
}

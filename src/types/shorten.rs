use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target shortening service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShortenService {
    #[serde(rename = "is.gd")]
    IsGd,
    #[serde(rename = "v.gd")]
    VGd,
}

impl ShortenService {
    /// Hostname the create endpoint lives on.
    pub fn domain(&self) -> &'static str {
        match self {
            ShortenService::IsGd => "is.gd",
            ShortenService::VGd => "v.gd",
        }
    }
}

impl fmt::Display for ShortenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.domain())
    }
}

impl FromStr for ShortenService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "is.gd" | "isgd" => Ok(ShortenService::IsGd),
            "v.gd" | "vgd" => Ok(ShortenService::VGd),
            other => Err(format!("unknown service '{}', expected is.gd or v.gd", other)),
        }
    }
}

/// Parameters for one shortening call.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenRequest {
    pub long_url: String,
    pub alias: Option<String>,
    pub log_stats: bool,
}

/// A successfully created short link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShortenedLink {
    pub short_url: String,
    pub long_url: String,
    pub log_stats: bool,
}

impl ShortenedLink {
    /// The service's statistics page for this link: the short URL with `-` appended.
    pub fn stats_url(&self) -> String {
        format!("{}-", self.short_url)
    }
}

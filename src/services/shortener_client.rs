//! Client for the is.gd / v.gd link creation endpoint.
//!
//! Issues one blocking GET to `create.php` per shorten call and maps the
//! JSON reply onto an explicit success-or-failure value. The service
//! reports its own errors in-band via an `errormessage` field, so the body
//! is parsed before the HTTP status is consulted.

use serde::Deserialize;
use tracing::{debug, info};

use crate::types::errors::ShortenError;
use crate::types::shorten::{ShortenRequest, ShortenService, ShortenedLink};

/// Longest response-body excerpt carried inside an error.
const BODY_SNIPPET_MAX: usize = 120;

/// Trait defining the shortening client interface.
pub trait ShortenerClientTrait {
    fn shorten(
        &self,
        service: ShortenService,
        request: &ShortenRequest,
    ) -> Result<ShortenedLink, ShortenError>;
}

/// Wire shape of a `create.php` JSON reply. Exactly one of `shorturl` and
/// `errormessage` is expected to be present.
#[derive(Debug, Deserialize)]
struct CreateReply {
    shorturl: Option<String>,
    errorcode: Option<i64>,
    errormessage: Option<String>,
}

/// Shortening client backed by a blocking `reqwest` client.
pub struct ShortenerClient {
    http: reqwest::blocking::Client,
    endpoint_override: Option<String>,
}

impl ShortenerClient {
    /// Creates a client that talks to the real service endpoints.
    pub fn new() -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint_override: None,
        }
    }

    /// Creates a client pinned to an alternate endpoint, ignoring the
    /// requested service's domain. Used by tests.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint_override: Some(endpoint.into()),
        }
    }

    /// The create endpoint for a service: `https://<domain>/create.php`.
    pub fn endpoint_for(&self, service: ShortenService) -> String {
        match &self.endpoint_override {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://{}/create.php", service.domain()),
        }
    }

    /// Query parameters for one create call. `format=json` is always
    /// present; the alias and stats parameters only when requested.
    pub fn request_params(request: &ShortenRequest) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("format", "json".to_string()),
            ("url", request.long_url.clone()),
        ];
        if let Some(alias) = &request.alias {
            if !alias.is_empty() {
                params.push(("shorturl", alias.clone()));
            }
        }
        if request.log_stats {
            params.push(("logstats", "1".to_string()));
        }
        params
    }

    /// Maps a `create.php` reply body onto a success or failure value.
    pub fn parse_reply(
        request: &ShortenRequest,
        body: &str,
    ) -> Result<ShortenedLink, ShortenError> {
        let reply: CreateReply = serde_json::from_str(body)
            .map_err(|_| ShortenError::UnexpectedResponse(snippet(body)))?;

        if let Some(short_url) = reply.shorturl {
            return Ok(ShortenedLink {
                short_url,
                long_url: request.long_url.clone(),
                log_stats: request.log_stats,
            });
        }
        if let Some(message) = reply.errormessage {
            debug!(code = ?reply.errorcode, "service reported an error");
            return Err(ShortenError::Service(message));
        }
        Err(ShortenError::UnexpectedResponse(snippet(body)))
    }
}

impl Default for ShortenerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortenerClientTrait for ShortenerClient {
    /// Performs one shortening call. Exactly one outcome is produced; there
    /// is no retry, and no timeout beyond the transport's own.
    fn shorten(
        &self,
        service: ShortenService,
        request: &ShortenRequest,
    ) -> Result<ShortenedLink, ShortenError> {
        let endpoint = self.endpoint_for(service);
        debug!(%endpoint, url = %request.long_url, "sending create request");

        let response = self
            .http
            .get(&endpoint)
            .query(&Self::request_params(request))
            .send()
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        match Self::parse_reply(request, &body) {
            Ok(link) => {
                info!(short_url = %link.short_url, %service, "short link created");
                Ok(link)
            }
            // An unusable body on a failed status is better reported as the
            // status itself; a service-worded message is kept verbatim.
            Err(ShortenError::UnexpectedResponse(_)) if !status.is_success() => {
                Err(ShortenError::Service(format!("HTTP {}", status)))
            }
            Err(e) => Err(e),
        }
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_MAX).collect()
}

/// USGS NWIS Site Service reachability check.
///
/// Handles URL construction and a single GET against:
///   https://waterservices.usgs.gov/nwis/site/
///
/// The response is RDB (tab-delimited text). The harness only confirms the
/// service answers and shows the first few lines; see `fixtures.rs` for the
/// response shape.

use std::time::Duration;

use crate::config::ApiConfig;
use crate::console::Console;
use crate::logging;
use crate::model::TransportError;

/// HTTP status the check treats as success.
pub const STATUS_OK: u16 = 200;

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

/// A completed HTTP exchange, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one GET and returns the response or a transport failure.
pub trait Transport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError>;
}

/// Production transport on a blocking `reqwest` client.
pub struct ReqwestTransport;

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let response = client
            .get(url)
            .header("User-Agent", concat!("plateau_probe/", env!("CARGO_PKG_VERSION")))
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(HttpResponse { status, body })
    }
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds the site service URL with the four fixed filters: response
/// format, bounding box, site type, and site status.
///
/// Values are percent-encoded, so the bounding box commas go out as `%2C`.
pub fn build_site_url(api: &ApiConfig) -> String {
    let bbox = api.bbox.to_string();

    format!(
        "{}?format={}&bBox={}&siteType={}&siteStatus={}",
        api.base_url,
        urlencoding::encode(&api.format),
        urlencoding::encode(&bbox),
        urlencoding::encode(&api.site_type),
        urlencoding::encode(&api.site_status),
    )
}

// ---------------------------------------------------------------------------
// Reachability check
// ---------------------------------------------------------------------------

/// First `max_lines` lines of `body` after trimming surrounding whitespace.
pub fn preview_lines(body: &str, max_lines: usize) -> Vec<&str> {
    body.trim().lines().take(max_lines).collect()
}

/// Issues the GET and reports the outcome. Never panics or propagates.
///
/// Returns `true` only for HTTP 200. Transport failures and any other
/// status are printed and logged, then reported as `false`.
pub fn check_reachability(transport: &dyn Transport, api: &ApiConfig, console: &mut Console) -> bool {
    console.line("🌐 Testing USGS API...");

    let url = build_site_url(api);
    logging::debug(logging::Stage::Api, None, &format!("GET {}", url));

    let response = match transport.get(&url, api.timeout()) {
        Ok(r) => r,
        Err(e) => {
            console.line(format!("❌ API test failed: {}", e));
            logging::log_transport_failure(&api.base_url, &e);
            return false;
        }
    };

    console.line(format!("📡 API Status: {}", response.status));

    if response.status != STATUS_OK {
        console.line(format!("❌ API returned status {}", response.status));
        logging::log_status_failure(&api.base_url, response.status);
        return false;
    }

    console.line("📄 Sample response:");
    for line in preview_lines(&response.body, api.preview_lines) {
        console.line(format!("  {}", line));
    }

    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

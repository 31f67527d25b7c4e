//! Environment probe.
//!
//! Each thing the analysis depends on (tabular data handling, an HTTP
//! client, map rendering) is wrapped as a `Capability` that can exercise
//! itself and report a version. `test_capabilities` runs them in order and
//! stops at the first failure.

use std::env;
use std::time::Duration;

use crate::console::Console;
use crate::logging::{self, Stage};
use crate::map;
use crate::model::ProbeError;
use crate::stations::{build_sample_dataset, SAMPLE_STATIONS};
use crate::table::SiteTable;

/// Version of this harness, shown with the runtime info.
pub const HARNESS_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Capability checks
// ============================================================================

/// Something the analysis needs that can be checked before it runs.
pub trait Capability {
    /// Label shown in console output.
    fn name(&self) -> &str;

    /// Exercises the capability. `Ok(Some(v))` reports a version,
    /// `Ok(None)` means available with no version to show.
    fn probe(&self) -> Result<Option<String>, ProbeError>;
}

/// Tabular data: builds the sample table and serializes every row.
/// The table lives in this crate, so there is no separate version to report.
pub struct TabularCapability;

impl Capability for TabularCapability {
    fn name(&self) -> &str {
        "site table"
    }

    fn probe(&self) -> Result<Option<String>, ProbeError> {
        let table = build_sample_dataset();
        let rows = table
            .to_json_rows()
            .map_err(|e| ProbeError::Unavailable(format!("row serialization: {}", e)))?;
        if rows.len() != SAMPLE_STATIONS.len() {
            return Err(ProbeError::SelfTestFailed(format!(
                "expected {} rows, serialized {}",
                SAMPLE_STATIONS.len(),
                rows.len()
            )));
        }
        Ok(None)
    }
}

/// HTTP client: constructs a blocking `reqwest` client, which initialises
/// the rustls TLS backend.
pub struct HttpClientCapability {
    pub timeout: Duration,
}

impl Capability for HttpClientCapability {
    fn name(&self) -> &str {
        "reqwest"
    }

    fn probe(&self) -> Result<Option<String>, ProbeError> {
        reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ProbeError::Unavailable(e.to_string()))?;
        // reqwest does not expose its version at runtime
        Ok(None)
    }
}

/// Mapping: renders a one-station GeoJSON layer. In-crate, so no version.
pub struct MappingCapability;

impl Capability for MappingCapability {
    fn name(&self) -> &str {
        "map layer"
    }

    fn probe(&self) -> Result<Option<String>, ProbeError> {
        let single: SiteTable = SAMPLE_STATIONS.iter().take(1).map(|s| s.to_record()).collect();
        let layer = map::site_layer(&single);
        let count = map::feature_count(&layer);
        if count != 1 {
            return Err(ProbeError::SelfTestFailed(format!(
                "expected 1 feature, rendered {}",
                count
            )));
        }
        Ok(None)
    }
}

/// The three production checks, in probe order: tabular, HTTP, mapping.
pub fn default_capabilities(http_timeout: Duration) -> Vec<Box<dyn Capability>> {
    vec![
        Box::new(TabularCapability),
        Box::new(HttpClientCapability { timeout: http_timeout }),
        Box::new(MappingCapability),
    ]
}

/// Probes each capability in order, printing one line per check.
///
/// Returns `false` at the first failure; later capabilities are not probed.
pub fn test_capabilities(capabilities: &[Box<dyn Capability>], console: &mut Console) -> bool {
    console.line("🔧 Testing capabilities...");

    for capability in capabilities {
        match capability.probe() {
            Ok(Some(version)) => console.line(format!("✅ {} {}", capability.name(), version)),
            Ok(None) => console.line(format!("✅ {} available", capability.name())),
            Err(e) => {
                console.line(format!("❌ {}: {}", capability.name(), e));
                logging::error(Stage::Environment, Some(capability.name()), &e.to_string());
                return false;
            }
        }
    }

    true
}

// ============================================================================
// Runtime information
// ============================================================================

/// Where and what is running, printed before the probe.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub version: String,
    pub executable: String,
    pub working_dir: String,
}

impl RuntimeInfo {
    /// Lookup failures are rendered inline instead of aborting the run.
    pub fn collect() -> Self {
        let executable = env::current_exe()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|e| format!("<unknown: {}>", e));
        let working_dir = env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|e| format!("<unknown: {}>", e));

        Self {
            version: HARNESS_VERSION.to_string(),
            executable,
            working_dir,
        }
    }

    pub fn print(&self, console: &mut Console) {
        console.line(format!("🦀 plateau_probe: {}", self.version));
        console.line(format!("📍 Executable: {}", self.executable));
        console.line(format!("💻 Working directory: {}", self.working_dir));
    }
}

// ============================================================================
// Tests
// ============================================================================

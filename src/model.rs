/// Core data types for the Colorado Plateau diagnostic harness.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O, only types, constants, and their formatting.

// ---------------------------------------------------------------------------
// Parameter codes
// ---------------------------------------------------------------------------

/// USGS parameter code for discharge (streamflow), in cubic feet per second.
pub const PARAM_DISCHARGE: &str = "00060";

/// USGS parameter code for gage height (stage), in feet.
pub const PARAM_STAGE: &str = "00065";

/// USGS parameter code for water temperature, in degrees Celsius.
pub const PARAM_WATER_TEMP: &str = "00010";

/// USGS parameter code for specific conductance at 25 °C.
pub const PARAM_CONDUCTANCE: &str = "00095";

/// USGS parameter code for dissolved oxygen, in milligrams per liter.
pub const PARAM_DISSOLVED_OXYGEN: &str = "00300";

/// USGS parameter code for pH, in standard units.
pub const PARAM_PH: &str = "00400";

/// USGS parameter code for salinity, in parts per thousand.
pub const PARAM_SALINITY: &str = "00480";

// ---------------------------------------------------------------------------
// Station records
// ---------------------------------------------------------------------------

/// The measured quantity attached to a station record.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterAnnotation {
    pub code: String,  // e.g. "00060"
    pub name: String,
    pub unit: String,  // e.g. "cfs"
}

/// One monitoring station in a site table.
///
/// Field names follow the USGS site service columns (`site_no`,
/// `station_nm`, `huc_cd`, ...) so rows read the same as the RDB output.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StationRecord {
    pub site_no: String,
    pub station_nm: String,
    pub lat: f64,
    pub lon: f64,
    pub state: String,
    pub county: String,
    pub huc_cd: String,
    pub parameter_cd: Option<String>,
    pub parameter_name: Option<String>,
    pub unit: Option<String>,
}

impl StationRecord {
    /// Replaces this record's parameter triple.
    pub fn annotate(&mut self, parameter: &ParameterAnnotation) {
        self.parameter_cd = Some(parameter.code.clone());
        self.parameter_name = Some(parameter.name.clone());
        self.unit = Some(parameter.unit.clone());
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Why a capability check failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeError {
    /// The capability could not be initialised at all.
    Unavailable(String),
    /// The capability initialised but its self-test produced wrong output.
    SelfTestFailed(String),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Unavailable(msg) => write!(f, "unavailable: {}", msg),
            ProbeError::SelfTestFailed(msg) => write!(f, "self-test failed: {}", msg),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Network-level failures from the reachability request.
///
/// A completed response with a non-200 status is not a `TransportError`;
/// the caller inspects the status itself.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportError {
    /// No response within the request timeout.
    Timeout(String),
    /// DNS failure, refused connection, TLS handshake error.
    Connect(String),
    /// Anything else raised while sending or reading the body.
    Other(String),
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Timeout(msg) => write!(f, "request timed out: {}", msg),
            TransportError::Connect(msg) => write!(f, "connection failed: {}", msg),
            TransportError::Other(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

/// Errors from loading `probe.toml`.
#[derive(Debug)]
pub enum ConfigError {
    /// The TOML could not be deserialized into `ProbeConfig`.
    Parse(toml::de::Error),
    /// The TOML parsed but holds a value the harness cannot use.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "Failed to parse probe.toml: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid probe.toml: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

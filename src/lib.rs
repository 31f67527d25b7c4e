/// plateau_probe: Colorado Plateau water analysis diagnostic harness.
///
/// # Module structure
///
/// ```text
/// plateau_probe
/// ├── model       — shared data types (StationRecord, parameter codes, error enums)
/// ├── config      — harness settings embedded from probe.toml
/// ├── logging     — stage-tagged console logging with failure classification
/// ├── console     — user-facing output, echoed or captured
/// ├── table       — in-memory site table (annotate, distinct states, filter)
/// ├── map         — GeoJSON layer rendering of a site table
/// ├── stations    — sample San Juan / Animas station registry
/// ├── environment — capability probe and runtime info
/// ├── harness     — ordered four-step diagnostic run
/// ├── ingest
/// │   ├── usgs    — NWIS site service: URL construction + reachability check
/// │   └── fixtures (test only) — representative RDB response payloads
/// └── analysis
///     └── priority — priority parameter mapping, filter, and summary report
/// ```

/// Public modules
pub mod analysis;
pub mod config;
pub mod console;
pub mod environment;
pub mod harness;
pub mod ingest;
pub mod logging;
pub mod map;
pub mod model;
pub mod stations;
pub mod table;

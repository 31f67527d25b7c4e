/// Sample station registry for the Colorado Plateau harness.
///
/// Five USGS gauges on the San Juan and Animas rivers around the Four
/// Corners. The data is hard-coded so the analysis steps can be exercised
/// without a working network connection.

use crate::console::Console;
use crate::model::{ParameterAnnotation, StationRecord, PARAM_DISCHARGE};
use crate::table::SiteTable;

// ---------------------------------------------------------------------------
// Station metadata
// ---------------------------------------------------------------------------

/// Literal metadata for a single sample gauge.
pub struct Station {
    /// 8-digit USGS site code.
    pub site_no: &'static str,
    /// Official USGS station name.
    pub station_nm: &'static str,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lon: f64,
    /// Two-letter state code.
    pub state: &'static str,
    /// Three-digit FIPS county code.
    pub county: &'static str,
    /// Hydrologic unit code.
    pub huc_cd: &'static str,
}

impl Station {
    /// Owned record with no parameter attached yet.
    pub fn to_record(&self) -> StationRecord {
        StationRecord {
            site_no: self.site_no.to_string(),
            station_nm: self.station_nm.to_string(),
            lat: self.lat,
            lon: self.lon,
            state: self.state.to_string(),
            county: self.county.to_string(),
            huc_cd: self.huc_cd.to_string(),
            parameter_cd: None,
            parameter_name: None,
            unit: None,
        }
    }
}

pub static SAMPLE_STATIONS: &[Station] = &[
    Station {
        site_no: "09371010",
        station_nm: "SAN JUAN RIVER AT FOUR CORNERS, CO",
        lat: 36.9989,
        lon: -109.0453,
        state: "CO",
        county: "083",
        huc_cd: "14080201",
    },
    Station {
        site_no: "09379500",
        station_nm: "SAN JUAN RIVER NEAR BLUFF, UT",
        lat: 37.1906,
        lon: -109.5281,
        state: "UT",
        county: "037",
        huc_cd: "14080204",
    },
    Station {
        site_no: "09368000",
        station_nm: "SAN JUAN RIVER AT SHIPROCK, NM",
        lat: 36.7856,
        lon: -108.7267,
        state: "NM",
        county: "045",
        huc_cd: "14080105",
    },
    Station {
        site_no: "09364500",
        station_nm: "ANIMAS RIVER AT FARMINGTON, NM",
        lat: 36.7281,
        lon: -108.1842,
        state: "NM",
        county: "045",
        huc_cd: "14080104",
    },
    Station {
        site_no: "09355500",
        station_nm: "ANIMAS RIVER AT DURANGO, CO",
        lat: 37.2756,
        lon: -107.8803,
        state: "CO",
        county: "067",
        huc_cd: "14080104",
    },
];

/// The parameter every sample station is annotated with.
pub fn sample_parameter() -> ParameterAnnotation {
    ParameterAnnotation {
        code: PARAM_DISCHARGE.to_string(),
        name: "Streamflow, cubic feet per second".to_string(),
        unit: "cfs".to_string(),
    }
}

/// Builds a fresh sample table: every registry station, streamflow-annotated.
pub fn build_sample_dataset() -> SiteTable {
    let mut table: SiteTable = SAMPLE_STATIONS.iter().map(Station::to_record).collect();
    table.annotate(&sample_parameter());
    table
}

/// `build_sample_dataset` plus the console confirmation.
pub fn create_sample_data(console: &mut Console) -> SiteTable {
    let table = build_sample_dataset();
    console.line(format!("📝 Created sample dataset with {} sites", table.len()));
    table
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

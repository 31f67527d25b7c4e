/// GeoJSON map layer for a site table.
///
/// Renders stations as an RFC 7946 `FeatureCollection` of `Point`s, which
/// Leaflet, QGIS, and geojson.io all load directly. Coordinates are written
/// `[longitude, latitude]` as the RFC requires.

use serde_json::{json, Value};

use crate::table::SiteTable;

/// Builds a `FeatureCollection` with one point feature per row.
pub fn site_layer(table: &SiteTable) -> Value {
    let features: Vec<Value> = table
        .rows()
        .iter()
        .map(|r| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [r.lon, r.lat],
                },
                "properties": {
                    "site_no": r.site_no,
                    "station_nm": r.station_nm,
                    "state": r.state,
                    "parameter_cd": r.parameter_cd,
                },
            })
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

/// Number of features in a layer built by `site_layer`.
pub fn feature_count(layer: &Value) -> usize {
    layer
        .get("features")
        .and_then(|f| f.as_array())
        .map(|f| f.len())
        .unwrap_or(0)
}

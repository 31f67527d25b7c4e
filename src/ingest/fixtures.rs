/// Test fixtures: representative RDB payloads from the USGS site service.
///
/// Shaped like the tab-delimited output of
///   https://waterservices.usgs.gov/nwis/site/?format=rdb&...
///
/// RDB layout:
///   `#` comment header (retrieval time, column descriptions)
///   one line of tab-separated column names
///   one line of column format descriptors (e.g. `5s`, `15s`)
///   one line per site
///
/// Only the line structure matters to the harness, which previews the raw
/// text without parsing columns.

/// Exactly 12 lines: 6 comment lines, header, format line, 4 sites.
#[cfg(test)]
pub(crate) fn fixture_site_rdb_12_lines() -> &'static str {
    concat!(
        "#\n",
        "# US Geological Survey\n",
        "# retrieved: 2024-05-01 12:00:00 -04:00\t(caas01)\n",
        "#\n",
        "# The Site File stores location and general information about groundwater,\n",
        "# surface water, and meteorological sites\n",
        "agency_cd\tsite_no\tstation_nm\tsite_tp_cd\tdec_lat_va\tdec_long_va\thuc_cd\n",
        "5s\t15s\t50s\t7s\t16s\t16s\t16s\n",
        "USGS\t09364500\tANIMAS RIVER AT FARMINGTON, NM\tST\t36.7281\t-108.1842\t14080104\n",
        "USGS\t09365000\tSAN JUAN RIVER AT FARMINGTON, NM\tST\t36.7225\t-108.2250\t14080105\n",
        "USGS\t09367500\tLA PLATA RIVER NEAR FARMINGTON, NM\tST\t36.7390\t-108.2440\t14080105\n",
        "USGS\t09368000\tSAN JUAN RIVER AT SHIPROCK, NM\tST\t36.7856\t-108.7267\t14080105\n",
    )
}

/// Three lines padded with blank lines on both ends. The preview trims
/// surrounding whitespace before counting lines.
#[cfg(test)]
pub(crate) fn fixture_site_rdb_padded() -> &'static str {
    concat!(
        "\n\n",
        "agency_cd\tsite_no\tstation_nm\n",
        "5s\t15s\t50s\n",
        "USGS\t09368000\tSAN JUAN RIVER AT SHIPROCK, NM\n",
        "\n\n\n",
    )
}

/// Windows line endings, as some proxies rewrite them.
#[cfg(test)]
pub(crate) fn fixture_site_rdb_crlf() -> &'static str {
    "# US Geological Survey\r\nagency_cd\tsite_no\r\nUSGS\t09355500\r\n"
}

/// Body of a 404 when no sites match the bounding box filters.
#[cfg(test)]
pub(crate) fn fixture_no_sites_found() -> &'static str {
    "No sites found matching all criteria"
}

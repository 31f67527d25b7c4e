/// Priority parameter mapping and the summary report built on it.
///
/// The priority list is the set of USGS parameter codes the downstream
/// water-quality analysis cares about. Filtering a site table against it
/// tells us how many stations will have something useful to plot.

use crate::console::Console;
use crate::model::{
    PARAM_CONDUCTANCE, PARAM_DISCHARGE, PARAM_DISSOLVED_OXYGEN, PARAM_PH, PARAM_SALINITY,
    PARAM_STAGE, PARAM_WATER_TEMP,
};
use crate::table::SiteTable;

// ---------------------------------------------------------------------------
// Priority mapping
// ---------------------------------------------------------------------------

/// Parameter code to description, in report order.
pub static PRIORITY_PARAMETERS: &[(&str, &str)] = &[
    (PARAM_DISCHARGE, "Streamflow (Discharge), cubic feet per second"),
    (PARAM_STAGE, "Gage height, feet"),
    (PARAM_WATER_TEMP, "Water temperature, degrees Celsius"),
    (PARAM_CONDUCTANCE, "Specific conductance, microsiemens per centimeter"),
    (PARAM_DISSOLVED_OXYGEN, "Dissolved oxygen, milligrams per liter"),
    (PARAM_PH, "pH, standard units"),
    (PARAM_SALINITY, "Salinity, parts per thousand"),
];

pub fn is_priority(code: &str) -> bool {
    PRIORITY_PARAMETERS.iter().any(|(c, _)| *c == code)
}

/// Looks up a priority code's description. Returns `None` if not a priority.
pub fn describe(code: &str) -> Option<&'static str> {
    PRIORITY_PARAMETERS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, desc)| *desc)
}

/// Rows whose parameter code is a priority code.
pub fn filter_priority_sites(table: &SiteTable) -> SiteTable {
    table.filter_by_parameter(is_priority)
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Counts printed by `report`, returned so callers can check them.
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritySummary {
    pub total_sites: usize,
    pub states: Vec<String>,
    pub sample_site: Option<String>,
    pub priority_sites: usize,
}

/// Prints the basic analysis, the priority list, and the filtered count.
pub fn report(table: &SiteTable, console: &mut Console) -> PrioritySummary {
    let states: Vec<String> = table.unique_states().into_iter().map(String::from).collect();
    let sample_site = table.first().map(|r| r.station_nm.clone());

    console.blank();
    console.line("📈 Basic Analysis:");
    console.line(format!("  Total sites: {}", table.len()));
    console.line(format!("  States: [{}]", states.join(", ")));
    match &sample_site {
        Some(name) => console.line(format!("  Sample site: {}", name)),
        None => console.line("  Sample site: (none)"),
    }

    console.blank();
    console.line("🎯 Priority Parameters:");
    for (code, desc) in PRIORITY_PARAMETERS {
        console.line(format!("  {}: {}", code, desc));
    }

    let priority = filter_priority_sites(table);
    console.blank();
    console.line(format!("✅ Sites with priority parameters: {}", priority.len()));

    PrioritySummary {
        total_sites: table.len(),
        states,
        sample_site,
        priority_sites: priority.len(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParameterAnnotation;
    use crate::stations::build_sample_dataset;
    use std::collections::HashSet;

    #[test]
    fn test_mapping_has_exactly_the_seven_codes() {
        let codes: HashSet<&str> = PRIORITY_PARAMETERS.iter().map(|(c, _)| *c).collect();
        let expected: HashSet<&str> = ["00060", "00065", "00010", "00095", "00300", "00400", "00480"]
            .into_iter()
            .collect();
        assert_eq!(PRIORITY_PARAMETERS.len(), 7, "no duplicate keys");
        assert_eq!(codes, expected);
    }

    #[test]
    fn test_mapping_descriptions() {
        assert_eq!(describe("00060"), Some("Streamflow (Discharge), cubic feet per second"));
        assert_eq!(describe("00065"), Some("Gage height, feet"));
        assert_eq!(describe("00010"), Some("Water temperature, degrees Celsius"));
        assert_eq!(describe("00095"), Some("Specific conductance, microsiemens per centimeter"));
        assert_eq!(describe("00300"), Some("Dissolved oxygen, milligrams per liter"));
        assert_eq!(describe("00400"), Some("pH, standard units"));
        assert_eq!(describe("00480"), Some("Salinity, parts per thousand"));
        assert_eq!(describe("99999"), None);
    }

    #[test]
    fn test_sample_dataset_fully_survives_filter() {
        let table = build_sample_dataset();
        let filtered = filter_priority_sites(&table);
        assert_eq!(filtered.len(), 5);
        assert_eq!(filtered, table);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let table = build_sample_dataset();
        let once = filter_priority_sites(&table);
        let twice = filter_priority_sites(&once);
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 5);
    }

    #[test]
    fn test_non_priority_parameter_is_filtered_out() {
        let mut table = build_sample_dataset();
        table.annotate(&ParameterAnnotation {
            code: "00045".to_string(),
            name: "Precipitation, total, inches".to_string(),
            unit: "in".to_string(),
        });
        assert!(filter_priority_sites(&table).is_empty());
    }

    #[test]
    fn test_report_prints_counts_and_states() {
        let table = build_sample_dataset();
        let mut console = Console::capture();
        let summary = report(&table, &mut console);

        assert_eq!(summary.total_sites, 5);
        assert_eq!(summary.priority_sites, 5);
        assert_eq!(summary.states, vec!["CO", "UT", "NM"]);
        assert_eq!(
            summary.sample_site.as_deref(),
            Some("SAN JUAN RIVER AT FOUR CORNERS, CO")
        );

        assert!(console.contains("Total sites: 5"));
        assert!(console.contains("States: [CO, UT, NM]"));
        assert!(console.contains("Sample site: SAN JUAN RIVER AT FOUR CORNERS, CO"));
        assert!(console.contains("Sites with priority parameters: 5"));
    }

    #[test]
    fn test_report_lists_mapping_in_order() {
        let mut console = Console::capture();
        report(&build_sample_dataset(), &mut console);

        let listed: Vec<&String> = console
            .lines()
            .iter()
            .skip_while(|l| !l.contains("Priority Parameters:"))
            .skip(1)
            .take_while(|l| l.starts_with("  "))
            .collect();
        assert_eq!(listed.len(), 7);
        assert_eq!(listed[0], "  00060: Streamflow (Discharge), cubic feet per second");
        assert_eq!(listed[6], "  00480: Salinity, parts per thousand");
    }

    #[test]
    fn test_report_on_empty_table() {
        let mut console = Console::capture();
        let summary = report(&SiteTable::default(), &mut console);
        assert_eq!(summary.total_sites, 0);
        assert_eq!(summary.priority_sites, 0);
        assert!(summary.sample_site.is_none());
        assert!(console.contains("Sample site: (none)"));
    }
}

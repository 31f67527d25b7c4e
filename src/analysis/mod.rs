/// Data analysis for the Colorado Plateau harness.
///
/// Submodules:
/// - `priority` — priority parameter mapping, filtering, and the summary report.

pub mod priority;

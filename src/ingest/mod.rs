/// Remote data source clients.
///
/// - `usgs` — NWIS site service: URL construction, transport, reachability check
/// - `fixtures` (test only) — representative RDB response payloads

pub mod usgs;

#[cfg(test)]
pub(crate) mod fixtures;

/// In-memory site table.
///
/// An ordered list of `StationRecord`s with the handful of column
/// operations the harness needs: annotate every row, list distinct states,
/// and filter by parameter code. Row order is always insertion order.

use crate::model::{ParameterAnnotation, StationRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteTable {
    rows: Vec<StationRecord>,
}

impl SiteTable {
    pub fn new(rows: Vec<StationRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[StationRecord] {
        &self.rows
    }

    pub fn first(&self) -> Option<&StationRecord> {
        self.rows.first()
    }

    /// Assigns the same parameter triple to every row.
    pub fn annotate(&mut self, parameter: &ParameterAnnotation) {
        for row in &mut self.rows {
            row.annotate(parameter);
        }
    }

    /// Distinct state codes in order of first appearance.
    pub fn unique_states(&self) -> Vec<&str> {
        let mut states: Vec<&str> = Vec::new();
        for row in &self.rows {
            if !states.contains(&row.state.as_str()) {
                states.push(row.state.as_str());
            }
        }
        states
    }

    /// New table holding copies of the rows whose parameter code satisfies
    /// `keep`. Rows with no parameter are dropped.
    pub fn filter_by_parameter<F>(&self, keep: F) -> SiteTable
    where
        F: Fn(&str) -> bool,
    {
        self.rows
            .iter()
            .filter(|r| r.parameter_cd.as_deref().is_some_and(&keep))
            .cloned()
            .collect()
    }

    /// One JSON object per row, for the tabular capability self-test.
    pub fn to_json_rows(&self) -> Result<Vec<String>, serde_json::Error> {
        self.rows.iter().map(serde_json::to_string).collect()
    }
}

impl FromIterator<StationRecord> for SiteTable {
    fn from_iter<I: IntoIterator<Item = StationRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

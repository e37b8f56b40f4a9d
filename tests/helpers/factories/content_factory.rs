use crate::engine::types::{Content, Row};
use std::collections::HashMap;

/// Builds `Content` values for tests.
///
/// The associated functions wrap literal data; the builder generates a
/// deterministic sensor-style table whose shape is driven by `with`.
pub struct ContentFactory {
    params: HashMap<String, usize>,
}

impl ContentFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("rows".into(), 20);
        params.insert("start".into(), 1_000);
        params.insert("step".into(), 5);
        params.insert("stations".into(), 3);
        Self { params }
    }

    pub fn with(mut self, key: &str, value: usize) -> Self {
        self.params.insert(key.to_string(), value);
        self
    }

    /// Rows of `[station, reading, status]`; readings climb by `step`.
    pub fn create(self) -> Content {
        let rows = self.params["rows"];
        let start = self.params["start"];
        let step = self.params["step"];
        let stations = self.params["stations"].max(1);

        let table = (0..rows)
            .map(|i| {
                vec![
                    format!("station-{:02}", i % stations),
                    (start + i * step).to_string(),
                    if i % 4 == 0 { "calibrating" } else { "ok" }.to_string(),
                ]
            })
            .collect();
        Content::Rows(table)
    }

    pub fn lines(lines: &[&str]) -> Content {
        Content::Lines(lines.iter().map(|l| l.to_string()).collect())
    }

    pub fn rows(rows: &[&[&str]]) -> Content {
        Content::Rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect::<Row>())
                .collect(),
        )
    }

    /// Single-column rows holding the given integers.
    pub fn numeric_series(values: &[i64]) -> Content {
        Content::Rows(values.iter().map(|v| vec![v.to_string()]).collect())
    }
}

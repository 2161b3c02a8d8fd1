//! Post-run statistics over the final vertex labels.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::graph::types::Label;
use crate::{Error, Result};

/// Distance distribution of a labelling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelAnalysis {
    pub vertex_count: usize,
    pub reachable: usize,
    pub unreachable: usize,
    /// Largest finite distance, if any vertex is reachable
    pub max_distance: Option<u32>,
    /// Mean over the reachable vertices
    pub mean_distance: Option<f64>,
    /// Number of vertices at each finite distance
    pub histogram: BTreeMap<u32, usize>,
}

/// Builds the distance distribution of `labels`
pub fn analyze_labels(labels: &[Label]) -> LabelAnalysis {
    let mut histogram = BTreeMap::new();
    let mut total: u64 = 0;

    for label in labels.iter().filter(|label| label.is_reachable()) {
        *histogram.entry(label.get()).or_insert(0) += 1;
        total += label.get() as u64;
    }

    let reachable: usize = histogram.values().sum();
    LabelAnalysis {
        vertex_count: labels.len(),
        reachable,
        unreachable: labels.len() - reachable,
        max_distance: histogram.keys().next_back().copied(),
        mean_distance: if reachable > 0 {
            Some(total as f64 / reachable as f64)
        } else {
            None
        },
        histogram,
    }
}

impl LabelAnalysis {
    /// The `k` most populated distances as `(distance, vertices)`, largest
    /// count first and ties broken by the smaller distance
    pub fn top_distances(&self, k: usize) -> Vec<(u32, usize)> {
        let mut entries: Vec<(u32, usize)> = self.histogram.iter().map(|(&d, &c)| (d, c)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        entries.truncate(k);
        entries
    }

    pub fn summary(&self) -> String {
        match (self.max_distance, self.mean_distance) {
            (Some(max), Some(mean)) => format!(
                "{} of {} vertices reachable, max distance {}, mean distance {:.2}",
                self.reachable, self.vertex_count, max, mean
            ),
            _ => format!("0 of {} vertices reachable", self.vertex_count),
        }
    }

    /// Writes the analysis as pretty-printed JSON
    pub fn write_report<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::io(path, source))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

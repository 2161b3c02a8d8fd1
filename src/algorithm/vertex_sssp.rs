use crate::algorithm::driver::{DriverConfig, PassDriver, RunSummary};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::store::GraphStore;
use crate::graph::types::VertexId;
use crate::metrics::Metrics;
use crate::Result;

/// Shortest paths computed by running relaxation passes to convergence
#[derive(Debug, Clone)]
pub struct VertexCentricSssp {
    /// Pass budget, bootstrap included
    max_passes: u32,
    /// Whether to revisit only vertices with updated edges
    scheduling: bool,
    /// Vertices per execution window
    window_size: usize,
    /// Whether windows run on the rayon pool
    parallel: bool,
}

impl VertexCentricSssp {
    /// Creates an instance with the default driver settings
    pub fn new() -> Self {
        let defaults = DriverConfig::default();
        VertexCentricSssp {
            max_passes: defaults.max_passes,
            scheduling: defaults.scheduling,
            window_size: defaults.window_size,
            parallel: defaults.parallel,
        }
    }

    /// Set the pass budget
    pub fn with_max_passes(mut self, max_passes: u32) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Enable or disable dynamic scheduling
    pub fn with_scheduling(mut self, enabled: bool) -> Self {
        self.scheduling = enabled;
        self
    }

    /// Set the number of vertices per execution window
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Enable or disable parallel execution of windows
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn driver_config(&self, source: VertexId) -> DriverConfig {
        DriverConfig {
            max_passes: self.max_passes,
            scheduling: self.scheduling,
            window_size: self.window_size,
            parallel: self.parallel,
            source,
        }
    }

    /// Resets the store's labels and runs the passes, collecting metrics
    pub fn run(&self, graph: &GraphStore, source: VertexId, metrics: &mut Metrics) -> Result<RunSummary> {
        graph.reset_labels();
        let mut driver = PassDriver::new(graph, self.driver_config(source))?;
        Ok(driver.run(metrics))
    }
}

impl Default for VertexCentricSssp {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortestPathAlgorithm for VertexCentricSssp {
    fn name(&self) -> &'static str {
        "VertexCentricSSSP"
    }

    fn compute_shortest_paths(&self, graph: &GraphStore, source: VertexId) -> Result<ShortestPathResult> {
        let mut metrics = Metrics::new("sssp");
        let summary = self.run(graph, source, &mut metrics)?;
        Ok(ShortestPathResult {
            distances: summary.labels,
            source,
        })
    }
}

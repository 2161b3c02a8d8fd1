use log::{debug, info, trace, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::context::PassContext;
use crate::algorithm::convergence::ConvergenceTracker;
use crate::algorithm::program::{PassSignal, RelaxationProgram};
use crate::data_structures::{BitsetScheduler, Scheduler};
use crate::graph::store::GraphStore;
use crate::graph::traits::Graph;
use crate::graph::types::{Label, VertexId};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Settings for a sequence of relaxation passes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverConfig {
    /// Hard limit on the number of passes, bootstrap included
    pub max_passes: u32,
    /// Only revisit vertices that received an updated edge label
    pub scheduling: bool,
    /// Number of consecutive vertex IDs executed as one window
    pub window_size: usize,
    /// Execute the vertices of a window on the rayon pool
    pub parallel: bool,
    /// Vertex whose distance is 0
    pub source: VertexId,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            max_passes: 1000,
            scheduling: false,
            window_size: 1 << 20,
            parallel: false,
            source: 0,
        }
    }
}

/// Outcome of a single pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub pass: u32,
    /// Vertex updates executed
    pub updates: usize,
    /// Edge labels lowered by those updates
    pub edges_lowered: usize,
    /// Edges whose published label changed at the end of the pass
    pub edges_published: usize,
    pub signal: PassSignal,
}

/// Outcome of a whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub passes_run: u32,
    /// Pass after which convergence was detected
    pub last_pass: Option<u32>,
    pub converged: bool,
    pub updates: u64,
    pub edge_changes: u64,
    /// Final label of every vertex, indexed by vertex ID
    pub labels: Vec<Label>,
}

/// Sequences the passes of a [`RelaxationProgram`] over a [`GraphStore`].
///
/// Each pass walks the vertex IDs in windows of `window_size`, visiting every
/// vertex (or only the scheduled ones), then publishes the edge labels
/// written during the pass and asks the program whether to stop.
#[derive(Debug)]
pub struct PassDriver<'g> {
    config: DriverConfig,
    store: &'g GraphStore,
    program: RelaxationProgram,
    convergence: ConvergenceTracker,
    scheduler: Option<BitsetScheduler>,
    next_pass: u32,
    last_pass: Option<u32>,
    updates: u64,
    edge_changes: u64,
}

impl<'g> PassDriver<'g> {
    pub fn new(store: &'g GraphStore, config: DriverConfig) -> Result<Self> {
        if store.vertex_count() == 0 {
            return Err(Error::EmptyGraph);
        }
        if !store.has_vertex(config.source) {
            return Err(Error::SourceNotFound(config.source));
        }
        if config.window_size == 0 {
            return Err(Error::Config("window size must be positive".to_string()));
        }

        let scheduler = if config.scheduling {
            // Every vertex runs in the bootstrap pass
            let scheduler = BitsetScheduler::new(store.vertex_count());
            scheduler.register_range(0, (store.vertex_count() - 1) as VertexId);
            scheduler.advance();
            Some(scheduler)
        } else {
            None
        };

        Ok(PassDriver {
            config,
            store,
            program: RelaxationProgram::new(),
            convergence: ConvergenceTracker::new(),
            scheduler,
            next_pass: 0,
            last_pass: None,
            updates: 0,
            edge_changes: 0,
        })
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Index of the pass the next call to [`step`](Self::step) runs
    pub fn next_pass(&self) -> u32 {
        self.next_pass
    }

    /// Pass after which convergence was detected, if any
    pub fn last_pass(&self) -> Option<u32> {
        self.last_pass
    }

    pub fn scheduler(&self) -> Option<&BitsetScheduler> {
        self.scheduler.as_ref()
    }

    /// Runs exactly one pass, ignoring the pass budget and earlier convergence
    pub fn step(&mut self) -> PassReport {
        let pass = self.next_pass;
        let scheduler = self.scheduler.as_ref().map(|s| s as &dyn Scheduler);
        let ctx = PassContext::new(pass, self.config.source, &self.convergence, scheduler);

        self.program.before_pass(&ctx);

        let vertex_count = self.store.vertex_count();
        let mut updates = 0;
        let mut edges_lowered = 0;
        let mut lo = 0;
        while lo < vertex_count {
            let hi = (lo + self.config.window_size).min(vertex_count);
            let window: Vec<VertexId> = match &self.scheduler {
                Some(scheduler) => scheduler.scheduled(lo as VertexId, (hi - 1) as VertexId),
                None => (lo as VertexId..hi as VertexId).collect(),
            };
            trace!(
                "Pass {} window [{}, {}): {} active vertices",
                pass,
                lo,
                hi,
                window.len()
            );

            edges_lowered += run_window(
                self.store,
                &self.program,
                &window,
                &ctx,
                self.config.parallel,
            );
            updates += window.len();
            lo = hi;
        }

        let edges_published = self.store.publish_edges();
        let signal = self.program.after_pass(&ctx);
        if let Some(scheduler) = &self.scheduler {
            scheduler.advance();
        }

        debug!(
            "Pass {}: {} updates, {} edge labels lowered, {} published",
            pass, updates, edges_lowered, edges_published
        );

        if let PassSignal::LastPass(last) = signal {
            self.last_pass.get_or_insert(last);
        }
        self.next_pass += 1;
        self.updates += updates as u64;
        self.edge_changes += edges_published as u64;

        PassReport {
            pass,
            updates,
            edges_lowered,
            edges_published,
            signal,
        }
    }

    /// Runs passes until convergence or until the pass budget is spent
    pub fn run(&mut self, metrics: &mut Metrics) -> RunSummary {
        info!(
            "Running SSSP from vertex {} over {} vertices, {} edges (max {} passes, scheduler {})",
            self.config.source,
            self.store.vertex_count(),
            self.store.edge_count(),
            self.config.max_passes,
            self.config.scheduling
        );

        let first_pass = self.next_pass;
        metrics.start_time("execute");
        while self.last_pass.is_none() && self.next_pass < self.config.max_passes {
            metrics.start_time("pass");
            let report = self.step();
            metrics.stop_time("pass");
            metrics.add("updates", report.updates as u64);
            metrics.add("edges_lowered", report.edges_lowered as u64);
        }
        metrics.stop_time("execute");

        let passes_run = self.next_pass - first_pass;
        metrics.add("passes", passes_run as u64);
        if self.last_pass.is_none() {
            warn!(
                "Stopped after {} passes without converging; raise the pass budget for distant vertices",
                self.next_pass
            );
        }

        RunSummary {
            passes_run,
            last_pass: self.last_pass,
            converged: self.last_pass.is_some(),
            updates: self.updates,
            edge_changes: self.edge_changes,
            labels: self.store.labels(),
        }
    }
}

fn run_window(
    store: &GraphStore,
    program: &RelaxationProgram,
    window: &[VertexId],
    ctx: &PassContext<'_>,
    parallel: bool,
) -> usize {
    if parallel {
        window
            .par_iter()
            .map(|&v| program.update(&store.vertex(v), ctx))
            .sum()
    } else {
        window
            .iter()
            .map(|&v| program.update(&store.vertex(v), ctx))
            .sum()
    }
}

use crate::algorithm::convergence::ConvergenceTracker;
use crate::data_structures::Scheduler;
use crate::graph::types::VertexId;

/// Everything a vertex update needs to know about the pass it runs in.
///
/// Built by the pass driver once per pass and shared by every update of
/// that pass.
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'a> {
    /// Index of the pass; 0 is the bootstrap pass
    pub pass: u32,
    /// Vertex whose distance is 0
    pub source: VertexId,
    /// Shared change flag for this pass
    pub convergence: &'a ConvergenceTracker,
    /// Active-set scheduler, present only when dynamic scheduling is enabled
    pub scheduler: Option<&'a dyn Scheduler>,
}

impl<'a> PassContext<'a> {
    pub fn new(
        pass: u32,
        source: VertexId,
        convergence: &'a ConvergenceTracker,
        scheduler: Option<&'a dyn Scheduler>,
    ) -> Self {
        PassContext {
            pass,
            source,
            convergence,
            scheduler,
        }
    }

    pub fn is_bootstrap(&self) -> bool {
        self.pass == 0
    }

    pub fn scheduling_enabled(&self) -> bool {
        self.scheduler.is_some()
    }
}

//! The vertex-centric relaxation rule.
//!
//! Every vertex keeps its best-known hop distance as its label and talks to
//! its neighbours through the labels of the edges it shares with them. Pass 0
//! initializes labels and broadcasts each vertex's offer on its out-edges;
//! every later pass takes the minimum over the incident edge labels and
//! lowers any incident edge that can be improved by one more hop.

use log::{debug, info};

use crate::algorithm::context::PassContext;
use crate::graph::store::VertexView;
use crate::graph::types::Label;

/// What the driver should do once a pass has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassSignal {
    /// Run another pass if the budget allows
    Continue,
    /// The given pass produced no change; no further pass is needed
    LastPass(u32),
}

/// Single-source shortest path as a per-vertex update rule
#[derive(Debug, Default)]
pub struct RelaxationProgram {
    passes_started: u32,
}

impl RelaxationProgram {
    pub fn new() -> Self {
        RelaxationProgram { passes_started: 0 }
    }

    /// Number of passes begun so far
    pub fn passes_started(&self) -> u32 {
        self.passes_started
    }

    /// Called once before any vertex of pass `ctx.pass` is updated
    pub fn before_pass(&mut self, ctx: &PassContext<'_>) {
        self.passes_started += 1;
        ctx.convergence.begin_pass(ctx.pass);
    }

    /// Updates one vertex. Returns the number of incident edges it lowered.
    ///
    /// Safe to call concurrently for different vertices of the same pass.
    pub fn update(&self, vertex: &VertexView<'_>, ctx: &PassContext<'_>) -> usize {
        let id = vertex.id();
        if let Some(scheduler) = ctx.scheduler {
            scheduler.deregister_range(id, id);
        }

        if ctx.is_bootstrap() {
            let initial = if id == ctx.source {
                Label::ZERO
            } else {
                Label::INFINITY
            };
            vertex.set_label(initial);
            // Every vertex runs again in pass 1 so the source broadcast happens
            if let Some(scheduler) = ctx.scheduler {
                scheduler.register(id);
            }
        }

        // Edge labels carry nothing meaningful before the bootstrap broadcast
        let curmin = if ctx.is_bootstrap() {
            vertex.label()
        } else {
            vertex.edges().map(|edge| edge.label()).fold(vertex.label(), Label::min)
        };
        vertex.set_label(curmin);

        let offer = curmin.offer();
        if ctx.is_bootstrap() {
            // Out-edges only: the in-edges belong to neighbours that are
            // writing their own offer on them in this same pass.
            for edge in vertex.outedges() {
                edge.set_label(offer);
            }
            return 0;
        }

        let mut lowered = 0;
        for edge in vertex.edges() {
            if offer < edge.pending() && edge.lower_to(offer) {
                lowered += 1;
                ctx.convergence.mark_changed();
                if let Some(scheduler) = ctx.scheduler {
                    scheduler.register(edge.neighbor());
                }
            }
        }
        lowered
    }

    /// Called once after every vertex of pass `ctx.pass` has been updated
    pub fn after_pass(&self, ctx: &PassContext<'_>) -> PassSignal {
        if ctx.convergence.is_converged() {
            info!("Converged after pass {}", ctx.pass);
            PassSignal::LastPass(ctx.pass)
        } else {
            debug!("Pass {} changed edge labels", ctx.pass);
            PassSignal::Continue
        }
    }
}

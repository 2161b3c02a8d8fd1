use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "nothing changed during this pass" flag.
///
/// The flag is optimistically raised when a relaxation pass begins and
/// cleared by any update that lowers an edge label. Clearing is idempotent,
/// so any number of updates may clear it concurrently without losing the event.
#[derive(Debug, Default)]
pub struct ConvergenceTracker {
    converged: AtomicBool,
}

impl ConvergenceTracker {
    /// Creates a tracker that reports "not converged"
    pub fn new() -> Self {
        ConvergenceTracker {
            converged: AtomicBool::new(false),
        }
    }

    /// Resets the flag for pass `pass`. The bootstrap pass is never converged.
    pub fn begin_pass(&self, pass: u32) {
        self.converged.store(pass > 0, Ordering::SeqCst);
    }

    /// Records that an edge label changed during the current pass
    pub fn mark_changed(&self) {
        self.converged.store(false, Ordering::SeqCst);
    }

    /// True if no change has been recorded since the pass began
    pub fn is_converged(&self) -> bool {
        self.converged.load(Ordering::SeqCst)
    }
}

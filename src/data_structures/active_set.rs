use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::graph::types::VertexId;

/// Work-list of vertices pending a visit.
///
/// Ranges are inclusive on both ends. Implementations must tolerate calls
/// from several updates running at once.
pub trait Scheduler: Debug + Send + Sync {
    /// Requests a visit of `id` in the next pass
    fn register(&self, id: VertexId);

    /// Requests a visit of every vertex in `lo..=hi` in the next pass
    fn register_range(&self, lo: VertexId, hi: VertexId);

    /// Drops any request to visit a vertex in `lo..=hi` during the current pass
    fn deregister_range(&self, lo: VertexId, hi: VertexId);
}

/// Two bitsets, one for the pass being executed and one collecting
/// requests for the pass after it.
#[derive(Debug)]
pub struct BitsetScheduler {
    current: Vec<AtomicBool>,
    next: Vec<AtomicBool>,
}

impl BitsetScheduler {
    /// Creates a scheduler over `vertex_count` vertices with nothing
    /// scheduled; seed it with [`Scheduler::register_range`] and
    /// [`advance`](Self::advance)
    pub fn new(vertex_count: usize) -> Self {
        BitsetScheduler {
            current: (0..vertex_count).map(|_| AtomicBool::new(false)).collect(),
            next: (0..vertex_count).map(|_| AtomicBool::new(false)).collect(),
        }
    }

    /// Number of vertices tracked
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// True if `id` is still waiting for its visit in the current pass
    pub fn is_scheduled(&self, id: VertexId) -> bool {
        self.current
            .get(id as usize)
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// True if `id` has been requested for the next pass
    pub fn is_pending(&self, id: VertexId) -> bool {
        self.next
            .get(id as usize)
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Vertices still waiting in the current pass, in ID order
    pub fn scheduled(&self, lo: VertexId, hi: VertexId) -> Vec<VertexId> {
        let (lo, hi) = match self.clamp(lo, hi) {
            Some(range) => range,
            None => return Vec::new(),
        };
        (lo..=hi)
            .filter(|&v| self.current[v].load(Ordering::Relaxed))
            .map(|v| v as VertexId)
            .collect()
    }

    /// Number of vertices waiting in the current pass
    pub fn scheduled_count(&self) -> usize {
        count(&self.current)
    }

    /// Number of vertices requested for the next pass
    pub fn pending_count(&self) -> usize {
        count(&self.next)
    }

    /// Moves to the next pass: requests collected so far become the active
    /// set and the request list starts empty.
    pub fn advance(&self) {
        for (current, next) in self.current.iter().zip(&self.next) {
            current.store(next.swap(false, Ordering::Relaxed), Ordering::Relaxed);
        }
    }

    fn clamp(&self, lo: VertexId, hi: VertexId) -> Option<(usize, usize)> {
        let len = self.current.len();
        let lo = lo as usize;
        if len == 0 || lo >= len || lo > hi as usize {
            return None;
        }
        Some((lo, (hi as usize).min(len - 1)))
    }
}

impl Scheduler for BitsetScheduler {
    fn register(&self, id: VertexId) {
        if let Some(flag) = self.next.get(id as usize) {
            flag.store(true, Ordering::Relaxed);
        }
    }

    fn register_range(&self, lo: VertexId, hi: VertexId) {
        if let Some((lo, hi)) = self.clamp(lo, hi) {
            for flag in &self.next[lo..=hi] {
                flag.store(true, Ordering::Relaxed);
            }
        }
    }

    fn deregister_range(&self, lo: VertexId, hi: VertexId) {
        if let Some((lo, hi)) = self.clamp(lo, hi) {
            for flag in &self.current[lo..=hi] {
                flag.store(false, Ordering::Relaxed);
            }
        }
    }
}

fn count(bits: &[AtomicBool]) -> usize {
    bits.iter().filter(|flag| flag.load(Ordering::Relaxed)).count()
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense vertex identifier assigned when the graph is built
pub type VertexId = u32;

/// Best-known hop distance of a vertex or an edge from the source.
///
/// `Label::INFINITY` marks "not reached yet". All arithmetic on labels
/// saturates at infinity so a label can never wrap below its previous value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Label(pub u32);

impl Label {
    /// Distance of the source vertex
    pub const ZERO: Label = Label(0);

    /// Sentinel for unreachable vertices and edges nobody has offered a path on
    pub const INFINITY: Label = Label(u32::MAX);

    /// Creates a label from a raw distance
    pub const fn new(distance: u32) -> Self {
        Label(distance)
    }

    /// Returns the raw value
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns true unless this is the infinity sentinel
    pub const fn is_reachable(&self) -> bool {
        self.0 != u32::MAX
    }

    /// The value a vertex with this label offers its neighbours: one more hop,
    /// saturating at infinity.
    pub const fn offer(&self) -> Self {
        Label(self.0.saturating_add(1))
    }
}

impl Default for Label {
    fn default() -> Self {
        Label::INFINITY
    }
}

impl From<u32> for Label {
    fn from(distance: u32) -> Self {
        Label(distance)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            f.pad(&self.0.to_string())
        } else {
            f.pad("inf")
        }
    }
}

/// Which way an incident edge points, seen from the vertex being updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// The edge ends at this vertex
    In,
    /// The edge starts at this vertex
    Out,
}

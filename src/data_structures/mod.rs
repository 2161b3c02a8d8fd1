pub mod active_set;

pub use active_set::{BitsetScheduler, Scheduler};

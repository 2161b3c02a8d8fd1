//! Named timers and counters collected over a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

/// Accumulates wall-clock timers and integer counters under string keys
#[derive(Debug)]
pub struct Metrics {
    name: String,
    started_at: DateTime<Utc>,
    running: HashMap<String, Instant>,
    timings: BTreeMap<String, Duration>,
    counters: BTreeMap<String, u64>,
    values: BTreeMap<String, String>,
}

/// Serializable snapshot of a [`Metrics`] object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsReport {
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub reported_at: DateTime<Utc>,
    /// Accumulated seconds per timer
    pub timings: BTreeMap<String, f64>,
    pub counters: BTreeMap<String, u64>,
    pub values: BTreeMap<String, String>,
}

impl Metrics {
    pub fn new(name: &str) -> Self {
        Metrics {
            name: name.to_string(),
            started_at: Utc::now(),
            running: HashMap::new(),
            timings: BTreeMap::new(),
            counters: BTreeMap::new(),
            values: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Starts (or restarts) the timer `key`
    pub fn start_time(&mut self, key: &str) {
        self.running.insert(key.to_string(), Instant::now());
    }

    /// Stops the timer `key` and adds the elapsed time to its total.
    /// Returns the elapsed time, or `None` if the timer was not running.
    pub fn stop_time(&mut self, key: &str) -> Option<Duration> {
        let started = self.running.remove(key)?;
        let elapsed = started.elapsed();
        *self.timings.entry(key.to_string()).or_default() += elapsed;
        Some(elapsed)
    }

    /// Total time accumulated under `key`
    pub fn time(&self, key: &str) -> Duration {
        self.timings.get(key).copied().unwrap_or_default()
    }

    /// Adds `n` to the counter `key`
    pub fn add(&mut self, key: &str, n: u64) {
        *self.counters.entry(key.to_string()).or_insert(0) += n;
    }

    pub fn counter(&self, key: &str) -> u64 {
        self.counters.get(key).copied().unwrap_or(0)
    }

    /// Records a free-form value, replacing any previous one
    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            name: self.name.clone(),
            started_at: self.started_at,
            reported_at: Utc::now(),
            timings: self
                .timings
                .iter()
                .map(|(key, duration)| (key.clone(), duration.as_secs_f64()))
                .collect(),
            counters: self.counters.clone(),
            values: self.values.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }
}

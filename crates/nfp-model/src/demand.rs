//! Demand volumes per (source, destination) pair.
//!
//! Demand is injected into the generators rather than hardcoded, so the
//! same synthesis code serves both the built-in closed-form volumes and an
//! externally supplied table.

use std::collections::HashMap;

/// Demand volume for each (source, destination) pair, 1-indexed.
///
/// Implementations must be total over positive indices; generation never
/// fails mid-run.
pub trait DemandVolume {
    fn volume(&self, source: u32, dest: u32) -> i64;
}

/// Closed-form demand: a weighted sum of the pair indices.
///
/// The default weights (2, 1) give `2·i + j`, the volume function the
/// planning documents are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearDemand {
    pub source_weight: i64,
    pub dest_weight: i64,
}

impl Default for LinearDemand {
    fn default() -> Self {
        Self {
            source_weight: 2,
            dest_weight: 1,
        }
    }
}

impl DemandVolume for LinearDemand {
    fn volume(&self, source: u32, dest: u32) -> i64 {
        self.source_weight * i64::from(source) + self.dest_weight * i64::from(dest)
    }
}

/// Demand volumes backed by an explicit per-pair table.
///
/// Pairs not present in the table have volume 0.
#[derive(Debug, Clone, Default)]
pub struct TableDemand {
    volumes: HashMap<(u32, u32), i64>,
}

impl TableDemand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `((source, destination), volume)` pairs.
    /// Later entries for the same pair overwrite earlier ones.
    pub fn from_pairs(pairs: impl IntoIterator<Item = ((u32, u32), i64)>) -> Self {
        Self {
            volumes: pairs.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, source: u32, dest: u32, volume: i64) {
        self.volumes.insert((source, dest), volume);
    }

    /// Whether the table carries an explicit volume for this pair.
    pub fn covers(&self, source: u32, dest: u32) -> bool {
        self.volumes.contains_key(&(source, dest))
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

impl DemandVolume for TableDemand {
    fn volume(&self, source: u32, dest: u32) -> i64 {
        self.volumes.get(&(source, dest)).copied().unwrap_or(0)
    }
}

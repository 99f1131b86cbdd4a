//! Node-count inputs and their validation.
//!
//! The whole model is parameterized by three tier cardinalities: X source
//! nodes, Y transit nodes, Z destination nodes. [`NodeCounts`] is the only
//! way those numbers enter the system, and its constructor is the single
//! validation point — everything downstream is a total function.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Which of the three tiers an input value counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    Source,
    Transit,
    Destination,
}

impl NodeRole {
    /// Conventional letter for this tier's count (X, Y, Z).
    pub fn letter(&self) -> &'static str {
        match self {
            NodeRole::Source => "X",
            NodeRole::Transit => "Y",
            NodeRole::Destination => "Z",
        }
    }

    /// Tier name as used in user-facing messages.
    pub fn tier(&self) -> &'static str {
        match self {
            NodeRole::Source => "source",
            NodeRole::Transit => "transit",
            NodeRole::Destination => "destination",
        }
    }
}

impl std::fmt::Display for NodeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tier())
    }
}

/// Node-count validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// The raw value was not usable as a tier cardinality
    #[error("input '{}' ({} nodes) must be a positive integer, got {value}", .role.letter(), .role.tier())]
    InvalidCount { role: NodeRole, value: i64 },
}

/// Immutable (X, Y, Z) triple counting source, transit and destination nodes.
///
/// Counts are validated on construction: each must be a strictly positive
/// integer. Values are checked in input order (X, then Y, then Z) and the
/// first invalid one aborts construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeCounts {
    sources: u32,
    transits: u32,
    destinations: u32,
}

impl NodeCounts {
    /// Validate raw integers into node counts.
    ///
    /// # Example
    ///
    /// ```
    /// use nfp_core::NodeCounts;
    ///
    /// let counts = NodeCounts::new(3, 2, 4)?;
    /// assert_eq!(counts.sources(), 3);
    /// assert_eq!(counts.path_count(), 24);
    /// # Ok::<(), nfp_core::CountError>(())
    /// ```
    pub fn new(sources: i64, transits: i64, destinations: i64) -> Result<Self, CountError> {
        let sources = Self::checked(NodeRole::Source, sources)?;
        let transits = Self::checked(NodeRole::Transit, transits)?;
        let destinations = Self::checked(NodeRole::Destination, destinations)?;
        Ok(Self {
            sources,
            transits,
            destinations,
        })
    }

    fn checked(role: NodeRole, value: i64) -> Result<u32, CountError> {
        if value <= 0 {
            return Err(CountError::InvalidCount { role, value });
        }
        u32::try_from(value).map_err(|_| CountError::InvalidCount { role, value })
    }

    /// Number of source nodes (X).
    pub fn sources(&self) -> u32 {
        self.sources
    }

    /// Number of transit nodes (Y).
    pub fn transits(&self) -> u32 {
        self.transits
    }

    /// Number of destination nodes (Z).
    pub fn destinations(&self) -> u32 {
        self.destinations
    }

    /// 1-based source indices, in enumeration order.
    pub fn source_ids(&self) -> RangeInclusive<u32> {
        1..=self.sources
    }

    /// 1-based transit indices, in enumeration order.
    pub fn transit_ids(&self) -> RangeInclusive<u32> {
        1..=self.transits
    }

    /// 1-based destination indices, in enumeration order.
    pub fn destination_ids(&self) -> RangeInclusive<u32> {
        1..=self.destinations
    }

    /// Number of source→transit→destination paths (X·Y·Z).
    pub fn path_count(&self) -> u64 {
        u64::from(self.sources) * u64::from(self.transits) * u64::from(self.destinations)
    }

    /// Number of (source, destination) demand pairs (X·Z).
    pub fn pair_count(&self) -> u64 {
        u64::from(self.sources) * u64::from(self.destinations)
    }
}

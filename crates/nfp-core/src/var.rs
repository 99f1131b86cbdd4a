//! Variable identifiers for the three-tier flow model.
//!
//! Identifiers are tagged values carrying their 1-based tier indices; the
//! `x_ikj`-style text tokens exist only in the `Display` impl. Indices are
//! concatenated without separators, matching the published naming scheme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable in the three-tier flow model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarId {
    /// Continuous flow on the path source i → transit k → destination j (`x_ikj`).
    Flow { source: u32, transit: u32, dest: u32 },
    /// Binary split indicator for the same path (`u_ikj`).
    Split { source: u32, transit: u32, dest: u32 },
    /// Capacity of the source i → transit k link (`c_ik`).
    SourceLink { source: u32, transit: u32 },
    /// Capacity of the transit k → destination j link (`d_kj`).
    TransitLink { transit: u32, dest: u32 },
    /// Shared objective variable bounding the largest transit-node load (`r`).
    MaxLoad,
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarId::Flow {
                source,
                transit,
                dest,
            } => write!(f, "x_{source}{transit}{dest}"),
            VarId::Split {
                source,
                transit,
                dest,
            } => write!(f, "u_{source}{transit}{dest}"),
            VarId::SourceLink { source, transit } => write!(f, "c_{source}{transit}"),
            VarId::TransitLink { transit, dest } => write!(f, "d_{transit}{dest}"),
            VarId::MaxLoad => write!(f, "r"),
        }
    }
}

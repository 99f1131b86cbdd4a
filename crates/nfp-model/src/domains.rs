//! Bound and binary-domain generators.

use nfp_core::{Bound, NodeCounts, VarId};

/// Non-negativity bounds for every flow variable plus the max-load variable.
/// X·Y·Z + 1 lines.
pub fn flow_bounds(counts: &NodeCounts) -> Vec<Bound> {
    let mut bounds = Vec::with_capacity(counts.path_count() as usize + 1);
    for i in counts.source_ids() {
        for k in counts.transit_ids() {
            for j in counts.destination_ids() {
                bounds.push(Bound(VarId::Flow {
                    source: i,
                    transit: k,
                    dest: j,
                }));
            }
        }
    }
    bounds.push(Bound(VarId::MaxLoad));
    bounds
}

/// Binary-domain declarations for every split indicator. X·Y·Z lines.
pub fn binary_declarations(counts: &NodeCounts) -> Vec<VarId> {
    let mut vars = Vec::with_capacity(counts.path_count() as usize);
    for i in counts.source_ids() {
        for k in counts.transit_ids() {
            for j in counts.destination_ids() {
                vars.push(VarId::Split {
                    source: i,
                    transit: k,
                    dest: j,
                });
            }
        }
    }
    vars
}

//! The six constraint generators.
//!
//! Each generator enumerates its index space in a fixed order and returns an
//! owned row sequence, so sections can be built independently and composed
//! by value.

use crate::demand::DemandVolume;
use nfp_core::{NodeCounts, Relation, Row, Term, VarId};

/// Number of transit paths every demand pair is split over.
///
/// Fixed at 2 regardless of the transit-node count; a model with a single
/// transit node is infeasible by construction.
pub const SPLIT_COUNT: i64 = 2;

fn flow(source: u32, transit: u32, dest: u32) -> VarId {
    VarId::Flow {
        source,
        transit,
        dest,
    }
}

fn split(source: u32, transit: u32, dest: u32) -> VarId {
    VarId::Split {
        source,
        transit,
        dest,
    }
}

/// Demand satisfaction: for every (source, destination) pair, the flows over
/// all transit nodes sum to the pair's demand volume. X·Z rows.
pub fn demand_rows(counts: &NodeCounts, demand: &dyn DemandVolume) -> Vec<Row> {
    let mut rows = Vec::with_capacity(counts.pair_count() as usize);
    for i in counts.source_ids() {
        for j in counts.destination_ids() {
            let terms = counts
                .transit_ids()
                .map(|k| Term::unit(flow(i, k, j)))
                .collect();
            rows.push(Row::new(terms, Relation::Eq, demand.volume(i, j)));
        }
    }
    rows
}

/// Source→transit capacity: the total flow entering transit node k from
/// source i cannot exceed the link's capacity variable `c_ik`. X·Y rows.
pub fn capacity_st_rows(counts: &NodeCounts) -> Vec<Row> {
    let mut rows = Vec::new();
    for i in counts.source_ids() {
        for k in counts.transit_ids() {
            let mut terms: Vec<Term> = counts
                .destination_ids()
                .map(|j| Term::unit(flow(i, k, j)))
                .collect();
            terms.push(Term::new(
                -1,
                VarId::SourceLink {
                    source: i,
                    transit: k,
                },
            ));
            rows.push(Row::new(terms, Relation::Le, 0));
        }
    }
    rows
}

/// Transit→destination capacity, symmetric to [`capacity_st_rows`] and
/// enumerated destination-major. Y·Z rows.
pub fn capacity_td_rows(counts: &NodeCounts) -> Vec<Row> {
    let mut rows = Vec::new();
    for j in counts.destination_ids() {
        for k in counts.transit_ids() {
            let mut terms: Vec<Term> = counts
                .source_ids()
                .map(|i| Term::unit(flow(i, k, j)))
                .collect();
            terms.push(Term::new(
                -1,
                VarId::TransitLink {
                    transit: k,
                    dest: j,
                },
            ));
            rows.push(Row::new(terms, Relation::Le, 0));
        }
    }
    rows
}

/// Split-path count: exactly [`SPLIT_COUNT`] transit paths carry each
/// demand pair. X·Z rows.
pub fn split_path_rows(counts: &NodeCounts) -> Vec<Row> {
    let mut rows = Vec::with_capacity(counts.pair_count() as usize);
    for i in counts.source_ids() {
        for j in counts.destination_ids() {
            let terms = counts
                .transit_ids()
                .map(|k| Term::unit(split(i, k, j)))
                .collect();
            rows.push(Row::new(terms, Relation::Eq, SPLIT_COUNT));
        }
    }
    rows
}

/// Equal-split coupling: `2·x_ikj - demand(i,j)·u_ikj = 0` for every path.
/// A selected path carries exactly half the pair's volume; an unselected
/// one carries zero. X·Y·Z rows.
pub fn equal_split_rows(counts: &NodeCounts, demand: &dyn DemandVolume) -> Vec<Row> {
    let mut rows = Vec::with_capacity(counts.path_count() as usize);
    for i in counts.source_ids() {
        for k in counts.transit_ids() {
            for j in counts.destination_ids() {
                // The flow coefficient is the split count: volume/2 per path.
                let terms = vec![
                    Term::new(SPLIT_COUNT, flow(i, k, j)),
                    Term::new(-demand.volume(i, j), split(i, k, j)),
                ];
                rows.push(Row::new(terms, Relation::Eq, 0));
            }
        }
    }
    rows
}

/// Transit-node balance load: the aggregate flow through each transit node
/// is bounded above by the shared objective variable `r`. Y rows.
pub fn balance_load_rows(counts: &NodeCounts) -> Vec<Row> {
    let mut rows = Vec::with_capacity(counts.transits() as usize);
    for k in counts.transit_ids() {
        let mut terms = Vec::new();
        for i in counts.source_ids() {
            for j in counts.destination_ids() {
                terms.push(Term::unit(flow(i, k, j)));
            }
        }
        terms.push(Term::new(-1, VarId::MaxLoad));
        rows.push(Row::new(terms, Relation::Le, 0));
    }
    rows
}

//! Flow-distribution MILP synthesis
//!
//! This crate builds the complete mixed-integer LP document for flow
//! distribution across a three-tier directed network: X source nodes feed Y
//! transit nodes, which feed Z destination nodes. Every demand pair splits
//! its volume evenly over exactly two transit paths, and the objective
//! minimizes the worst-case transit-node load.
//!
//! ## Formulation
//!
//! ```text
//! minimize    r
//!
//! subject to:
//!   Σ_k x_ikj = demand(i,j)                 Demand satisfaction per (i,j)
//!   Σ_j x_ikj - c_ik ≤ 0                    Source→transit link capacity
//!   Σ_i x_ikj - d_kj ≤ 0                    Transit→destination link capacity
//!   Σ_k u_ikj = 2                           Exactly two split paths per (i,j)
//!   2·x_ikj - demand(i,j)·u_ikj = 0         Selected paths carry equal halves
//!   Σ_ij x_ikj - r ≤ 0                      r bounds every transit-node load
//!   x_ikj ≥ 0, r ≥ 0                        Bounds
//!   u_ikj ∈ {0,1}                           Binary split indicators
//! ```
//!
//! The equal-split coupling is the core modeling trick: with exactly two
//! indicators set per demand pair, each selected path must carry exactly
//! half the pair's volume and every unselected path carries zero. A single
//! transit node (Y = 1) therefore yields a model that is infeasible by
//! construction; that is intended behavior of the formulation, not an input
//! error.
//!
//! Every generator is a pure, total function of validated [`NodeCounts`]
//! (plus a [`demand::DemandVolume`] where demand appears), returning owned
//! row sequences; [`build_document`] composes them by value in the fixed
//! published order.
//!
//! [`NodeCounts`]: nfp_core::NodeCounts

mod assemble;
mod constraints;
pub mod demand;
mod domains;

pub use assemble::{build_document, section_names};
pub use constraints::{
    balance_load_rows, capacity_st_rows, capacity_td_rows, demand_rows, equal_split_rows,
    split_path_rows, SPLIT_COUNT,
};
pub use domains::{binary_declarations, flow_bounds};

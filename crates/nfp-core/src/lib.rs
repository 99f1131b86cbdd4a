//! # nfp-core: Flow Planning Model Core
//!
//! Provides the data structures shared by the network flow planning tools:
//! validated node counts, tagged variable identifiers, linear-expression
//! rows, and the LP document container with its rendering stage.
//!
//! ## Design Philosophy
//!
//! The model is **purely structural**: every type here is an immutable value
//! built once and consumed by rendering. Algebraic content (which variables
//! appear with which coefficients) is kept separate from text formatting —
//! identifiers and rows are tagged values, and the published LP layout is
//! produced by a single set of `Display` impls.
//!
//! ## Core Data Structures
//!
//! - [`NodeCounts`] - validated (X, Y, Z) tier cardinalities
//! - [`VarId`] - tagged variable identifiers (`x_ikj`, `u_ikj`, `c_ik`,
//!   `d_kj`, `r`)
//! - [`Term`], [`Row`], [`Bound`] - linear-expression building blocks
//! - [`Section`], [`Document`] - named constraint groups and the assembled
//!   solver-ready document

pub mod counts;
pub mod document;
pub mod expr;
pub mod var;

pub use counts::{CountError, NodeCounts, NodeRole};
pub use document::{Document, Section};
pub use expr::{Bound, Relation, Row, Term};
pub use var::VarId;

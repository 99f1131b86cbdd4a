//! Linear-expression rows and their LP-format rendering.
//!
//! A [`Row`] is the intermediate representation of one constraint: an
//! ordered list of integer-coefficient [`Term`]s, a relational operator and
//! an integer right-hand side. Rows are built once by a generator and are
//! immutable afterwards; the text layout lives entirely in the `Display`
//! impls here.

use crate::var::VarId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Relational operator of a constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Equality (`=`)
    Eq,
    /// Less-than-or-equal (`<=`)
    Le,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Eq => write!(f, "="),
            Relation::Le => write!(f, "<="),
        }
    }
}

/// One (coefficient, variable) term of a linear expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub coeff: i64,
    pub var: VarId,
}

impl Term {
    pub fn new(coeff: i64, var: VarId) -> Self {
        Self { coeff, var }
    }

    /// Term with coefficient 1.
    pub fn unit(var: VarId) -> Self {
        Self { coeff: 1, var }
    }
}

/// An immutable constraint row: terms, relation, right-hand side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    terms: Vec<Term>,
    relation: Relation,
    rhs: i64,
}

impl Row {
    pub fn new(terms: Vec<Term>, relation: Relation, rhs: i64) -> Self {
        Self {
            terms,
            relation,
            rhs,
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn relation(&self) -> Relation {
        self.relation
    }

    pub fn rhs(&self) -> i64 {
        self.rhs
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, term) in self.terms.iter().enumerate() {
            if idx == 0 {
                match term.coeff {
                    1 => write!(f, "{}", term.var)?,
                    c => write!(f, "{} {}", c, term.var)?,
                }
            } else if term.coeff == -1 && term.var == VarId::MaxLoad {
                // The published layout writes the subtracted load variable
                // flush against its sign: `x_111 -r <= 0`.
                write!(f, " -{}", term.var)?;
            } else if term.coeff < 0 {
                match term.coeff {
                    -1 => write!(f, " - {}", term.var)?,
                    c => write!(f, " - {} {}", -c, term.var)?,
                }
            } else {
                match term.coeff {
                    1 => write!(f, " + {}", term.var)?,
                    c => write!(f, " + {} {}", c, term.var)?,
                }
            }
        }
        write!(f, " {} {}", self.relation, self.rhs)
    }
}

/// Explicit non-negativity declaration for a continuous variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound(pub VarId);

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0 <= {}", self.0)
    }
}

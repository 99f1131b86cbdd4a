//! Solver-ready LP document assembly and rendering.
//!
//! The document layout is fixed: objective header, six named constraint
//! sections under `Subject to`, a `Bounds` block, a `Binary` block, and the
//! `End` terminator. Rendering is deterministic — identical inputs produce
//! byte-identical text.

use crate::counts::NodeCounts;
use crate::expr::{Bound, Row};
use crate::var::VarId;
use serde::Serialize;
use std::fmt;

/// A named group of constraint rows under the `Subject to` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: &'static str,
    rows: Vec<Row>,
    /// The published layout writes one section header at column zero while
    /// the others are indented by a single space.
    flush_header: bool,
}

impl Section {
    pub fn new(name: &'static str, rows: Vec<Row>) -> Self {
        Self {
            name,
            rows,
            flush_header: false,
        }
    }

    /// Write this section's header at column zero instead of indented.
    pub fn flush_left(mut self) -> Self {
        self.flush_header = true;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

/// Complete LP document for a three-tier flow model.
///
/// Produced exactly once per run; holds the node counts it was generated
/// from so the output file name can be derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    counts: NodeCounts,
    sections: Vec<Section>,
    bounds: Vec<Bound>,
    binaries: Vec<VarId>,
}

impl Document {
    pub fn new(
        counts: NodeCounts,
        sections: Vec<Section>,
        bounds: Vec<Bound>,
        binaries: Vec<VarId>,
    ) -> Self {
        Self {
            counts,
            sections,
            bounds,
            binaries,
        }
    }

    pub fn counts(&self) -> &NodeCounts {
        &self.counts
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    pub fn binaries(&self) -> &[VarId] {
        &self.binaries
    }

    /// Total number of constraint rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Output file name derived from the node counts: `X<v>_Y<v>_Z<v>.lp`.
    pub fn file_name(&self) -> String {
        format!(
            "X{}_Y{}_Z{}.lp",
            self.counts.sources(),
            self.counts.transits(),
            self.counts.destinations()
        )
    }

    /// Render the full document text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimize")?;
        writeln!(f, "    {}", VarId::MaxLoad)?;
        writeln!(f, "Subject to")?;
        for section in &self.sections {
            if section.flush_header {
                writeln!(f, "{}:", section.name)?;
            } else {
                writeln!(f, " {}:", section.name)?;
            }
            for row in &section.rows {
                writeln!(f, " {row}")?;
            }
        }
        writeln!(f, "Bounds")?;
        for bound in &self.bounds {
            writeln!(f, " {bound}")?;
        }
        writeln!(f, "Binary")?;
        for var in &self.binaries {
            writeln!(f, " {var}")?;
        }
        writeln!(f, "End")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{Relation, Term};

    fn tiny_document() -> Document {
        let counts = NodeCounts::new(1, 1, 1).unwrap();
        let flow = VarId::Flow {
            source: 1,
            transit: 1,
            dest: 1,
        };
        let split = VarId::Split {
            source: 1,
            transit: 1,
            dest: 1,
        };
        let demand = Section::new(
            "demand_flow",
            vec![Row::new(vec![Term::unit(flow)], Relation::Eq, 3)],
        );
        let balance = Section::new(
            "transit_node_balance_load",
            vec![Row::new(
                vec![Term::unit(flow), Term::new(-1, VarId::MaxLoad)],
                Relation::Le,
                0,
            )],
        )
        .flush_left();
        Document::new(
            counts,
            vec![demand, balance],
            vec![Bound(flow), Bound(VarId::MaxLoad)],
            vec![split],
        )
    }

    #[test]
    fn test_file_name() {
        let counts = NodeCounts::new(3, 2, 14).unwrap();
        let doc = Document::new(counts, Vec::new(), Vec::new(), Vec::new());
        assert_eq!(doc.file_name(), "X3_Y2_Z14.lp");
    }

    #[test]
    fn test_layout() {
        let text = tiny_document().render();
        let expected = "Minimize\n    r\nSubject to\n demand_flow:\n x_111 = 3\n\
                        transit_node_balance_load:\n x_111 -r <= 0\n\
                        Bounds\n 0 <= x_111\n 0 <= r\nBinary\n u_111\nEnd\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc = tiny_document();
        assert_eq!(doc.render(), doc.render());
    }

    #[test]
    fn test_row_count() {
        assert_eq!(tiny_document().row_count(), 2);
    }
}

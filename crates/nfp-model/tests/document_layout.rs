//! End-to-end layout and declaration-coverage checks on assembled documents.

use nfp_core::{NodeCounts, VarId};
use nfp_model::demand::LinearDemand;
use nfp_model::build_document;
use std::collections::HashSet;

#[test]
fn test_unit_model_renders_exactly() {
    let counts = NodeCounts::new(1, 1, 1).unwrap();
    let doc = build_document(&counts, &LinearDemand::default());

    assert_eq!(doc.file_name(), "X1_Y1_Z1.lp");

    let expected = "\
Minimize
    r
Subject to
 demand_flow:
 x_111 = 3
 capacity_st:
 x_111 - c_11 <= 0
 capacity_td:
 x_111 - d_11 <= 0
 split_paths:
 u_111 = 2
 equal_split_flow:
 2 x_111 - 3 u_111 = 0
transit_node_balance_load:
 x_111 -r <= 0
Bounds
 0 <= x_111
 0 <= r
Binary
 u_111
End
";
    assert_eq!(doc.render(), expected);
}

#[test]
fn test_identical_counts_render_identical_bytes() {
    let counts = NodeCounts::new(3, 2, 4).unwrap();
    let first = build_document(&counts, &LinearDemand::default()).render();
    let second = build_document(&counts, &LinearDemand::default()).render();
    assert_eq!(first, second);
}

#[test]
fn test_demand_volume_matches_equal_split_coefficient() {
    let counts = NodeCounts::new(2, 2, 3).unwrap();
    let doc = build_document(&counts, &LinearDemand::default());

    // demand_flow RHS for pair (2,3) is 2·2 + 3 = 7...
    let demand = &doc.sections()[0];
    let pair_row = demand
        .rows()
        .iter()
        .find(|r| {
            r.terms().iter().all(
                |t| matches!(t.var, VarId::Flow { source: 2, dest: 3, .. }),
            )
        })
        .unwrap();
    assert_eq!(pair_row.rhs(), 7);

    // ...and the same volume appears as the indicator coefficient for every
    // (2, k, 3) path in the equal-split section.
    let equal_split = &doc.sections()[4];
    for row in equal_split.rows() {
        let split_term = row.terms()[1];
        if matches!(split_term.var, VarId::Split { source: 2, dest: 3, .. }) {
            assert_eq!(split_term.coeff, -7);
        }
    }
}

#[test]
fn test_every_constraint_variable_is_declared_once() {
    let counts = NodeCounts::new(2, 3, 2).unwrap();
    let doc = build_document(&counts, &LinearDemand::default());

    let bounded: HashSet<VarId> = doc.bounds().iter().map(|b| b.0).collect();
    let binary: HashSet<VarId> = doc.binaries().iter().copied().collect();
    assert!(bounded.is_disjoint(&binary));

    for section in doc.sections() {
        for row in section.rows() {
            for term in row.terms() {
                match term.var {
                    // Continuous flow and the objective variable are bounded;
                    // split indicators are declared binary.
                    VarId::Flow { .. } | VarId::MaxLoad => {
                        assert!(bounded.contains(&term.var), "{} not bounded", term.var);
                        assert!(!binary.contains(&term.var));
                    }
                    VarId::Split { .. } => {
                        assert!(binary.contains(&term.var), "{} not binary", term.var);
                        assert!(!bounded.contains(&term.var));
                    }
                    // Capacity variables are free in the published format.
                    VarId::SourceLink { .. } | VarId::TransitLink { .. } => {}
                }
            }
        }
    }
}

#[test]
fn test_larger_model_header_layout() {
    let counts = NodeCounts::new(2, 2, 2).unwrap();
    let text = build_document(&counts, &LinearDemand::default()).render();

    // Indented headers for the first five sections, flush for balance load.
    for header in [
        " demand_flow:",
        " capacity_st:",
        " capacity_td:",
        " split_paths:",
        " equal_split_flow:",
    ] {
        assert!(text.contains(&format!("\n{header}\n")), "missing {header}");
    }
    assert!(text.contains("\ntransit_node_balance_load:\n"));
    assert!(text.ends_with("End\n"));
}

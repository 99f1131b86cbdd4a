//! Document assembly in the fixed published order.

use crate::constraints::{
    balance_load_rows, capacity_st_rows, capacity_td_rows, demand_rows, equal_split_rows,
    split_path_rows,
};
use crate::demand::DemandVolume;
use crate::domains::{binary_declarations, flow_bounds};
use nfp_core::{Document, NodeCounts, Section};

/// Section names in document order.
pub mod section_names {
    pub const DEMAND: &str = "demand_flow";
    pub const CAPACITY_ST: &str = "capacity_st";
    pub const CAPACITY_TD: &str = "capacity_td";
    pub const SPLIT_PATHS: &str = "split_paths";
    pub const EQUAL_SPLIT: &str = "equal_split_flow";
    pub const BALANCE_LOAD: &str = "transit_node_balance_load";
}

/// Build the complete LP document for the given node counts and demand
/// model.
///
/// Total function: with validated counts the assembly cannot fail, and
/// identical inputs always produce an identical document.
pub fn build_document(counts: &NodeCounts, demand: &dyn DemandVolume) -> Document {
    let sections = vec![
        Section::new(section_names::DEMAND, demand_rows(counts, demand)),
        Section::new(section_names::CAPACITY_ST, capacity_st_rows(counts)),
        Section::new(section_names::CAPACITY_TD, capacity_td_rows(counts)),
        Section::new(section_names::SPLIT_PATHS, split_path_rows(counts)),
        Section::new(section_names::EQUAL_SPLIT, equal_split_rows(counts, demand)),
        // The balance-load header sits at column zero in the published layout.
        Section::new(section_names::BALANCE_LOAD, balance_load_rows(counts)).flush_left(),
    ];

    Document::new(
        *counts,
        sections,
        flow_bounds(counts),
        binary_declarations(counts),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demand::{LinearDemand, TableDemand};

    #[test]
    fn test_section_order() {
        let counts = NodeCounts::new(1, 2, 1).unwrap();
        let doc = build_document(&counts, &LinearDemand::default());
        let names: Vec<&str> = doc.sections().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "demand_flow",
                "capacity_st",
                "capacity_td",
                "split_paths",
                "equal_split_flow",
                "transit_node_balance_load",
            ]
        );
    }

    #[test]
    fn test_section_cardinalities() {
        let (x, y, z) = (3, 2, 4);
        let counts = NodeCounts::new(x, y, z).unwrap();
        let doc = build_document(&counts, &LinearDemand::default());
        let len = |name: &str| {
            doc.sections()
                .iter()
                .find(|s| s.name() == name)
                .map(|s| s.rows().len() as i64)
                .unwrap()
        };
        assert_eq!(len(section_names::DEMAND), x * z);
        assert_eq!(len(section_names::CAPACITY_ST), x * y);
        assert_eq!(len(section_names::CAPACITY_TD), y * z);
        assert_eq!(len(section_names::SPLIT_PATHS), x * z);
        assert_eq!(len(section_names::EQUAL_SPLIT), x * y * z);
        assert_eq!(len(section_names::BALANCE_LOAD), y);
        assert_eq!(doc.bounds().len() as i64, x * y * z + 1);
        assert_eq!(doc.binaries().len() as i64, x * y * z);
    }

    #[test]
    fn test_table_demand_feeds_both_sections() {
        let counts = NodeCounts::new(1, 2, 1).unwrap();
        let table = TableDemand::from_pairs([((1, 1), 10)]);
        let doc = build_document(&counts, &table);

        let demand = &doc.sections()[0];
        assert_eq!(demand.rows()[0].to_string(), "x_111 + x_121 = 10");

        let equal_split = &doc.sections()[4];
        assert_eq!(equal_split.rows()[0].to_string(), "2 x_111 - 10 u_111 = 0");
        assert_eq!(equal_split.rows()[1].to_string(), "2 x_121 - 10 u_121 = 0");
    }
}

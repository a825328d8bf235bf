//! Cross-sheet reference graph and cycle detection

use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;
use rayon::prelude::*;

use super::tables::cross_sheet_pattern;
use crate::core::SheetDependencies;
use crate::snapshot::{SheetSnapshot, WorkbookSnapshot};

/// Collect, per sheet, the set of other sheets its formulas reference
/// through quoted cross-sheet syntax (`'Other Sheet'!A1`). Every sheet in
/// the workbook gets an entry even when it references nothing. Mutually
/// referencing groups of two or more sheets are reported as circular.
pub fn sheet_dependencies(snapshot: &WorkbookSnapshot) -> SheetDependencies {
    let references: BTreeMap<String, BTreeSet<String>> = snapshot
        .sheets()
        .par_iter()
        .map(|sheet| (sheet.name().to_string(), referenced_sheets(sheet)))
        .collect();

    let circular = find_cycles(&references);

    SheetDependencies {
        references,
        circular,
    }
}

fn referenced_sheets(sheet: &SheetSnapshot) -> BTreeSet<String> {
    let mut targets = BTreeSet::new();
    for cell in sheet.cells() {
        let Some(formula) = cell.formula() else { continue };
        for capture in cross_sheet_pattern().captures_iter(formula) {
            targets.insert(capture[1].to_string());
        }
    }
    targets
}

/// Strongly connected components with more than one member are cycles.
/// Each cycle is sorted internally and the list of cycles is sorted by its
/// first member so output order never depends on traversal order.
fn find_cycles(references: &BTreeMap<String, BTreeSet<String>>) -> Vec<Vec<String>> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for (source, targets) in references {
        graph.add_node(source.as_str());
        for target in targets {
            graph.add_edge(source.as_str(), target.as_str(), ());
        }
    }

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut names: Vec<String> =
                component.into_iter().map(str::to_string).collect();
            names.sort();
            names
        })
        .collect();
    cycles.sort();
    cycles
}

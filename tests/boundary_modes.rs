mod common;

use common::AutomatonBuilder;
use elementary_core::RuleTable;
use elementary_data::{BoundaryMode, RuleCode};
use proptest::prelude::*;

#[test]
fn test_rule_90_cyclic_scenario() {
    let mut automaton = AutomatonBuilder::new(90)
        .with_boundary(BoundaryMode::Cyclic)
        .with_row("00100")
        .build();
    automaton.advance();
    assert_row!(automaton, "01010");
}

#[test]
fn test_cyclic_and_periodic_differ_at_left_edge() {
    // Rule 8 fires only on 011. Cell 0 sees (old[N-1], 1, 1) under periodic
    // wrap and (old[N-2], 1, 1) under the cyclic formula.
    let row = "11001";
    let mut cyclic = AutomatonBuilder::new(8)
        .with_boundary(BoundaryMode::Cyclic)
        .with_row(row)
        .build();
    let mut periodic = AutomatonBuilder::new(8)
        .with_boundary(BoundaryMode::Periodic)
        .with_row(row)
        .build();
    cyclic.advance();
    periodic.advance();
    assert!(cyclic.cell_at(0).unwrap());
    assert!(!periodic.cell_at(0).unwrap());
}

#[test]
fn test_fixed_edges_follow_toggles() {
    let mut automaton = AutomatonBuilder::new(255)
        .with_boundary(BoundaryMode::Fixed)
        .with_row("00000")
        .build();
    automaton.advance_by(10);
    assert_row!(automaton, "01110");

    automaton.toggle(0).unwrap();
    automaton.advance();
    assert_row!(automaton, "11110");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fixed_edges_never_change(
        code in any::<u8>(),
        cells in prop::collection::vec(any::<bool>(), 3..48),
        generations in 1u64..32,
    ) {
        let mut automaton = AutomatonBuilder::new(code)
            .with_boundary(BoundaryMode::Fixed)
            .with_cells(&cells)
            .build();
        let last = cells.len() - 1;
        for _ in 0..generations {
            automaton.advance();
            prop_assert_eq!(automaton.cell_at(0).unwrap(), cells[0]);
            prop_assert_eq!(automaton.cell_at(last).unwrap(), cells[last]);
        }
    }

    #[test]
    fn prop_cyclic_edges_share_left_neighbor(
        code in any::<u8>(),
        cells in prop::collection::vec(any::<bool>(), 3..48),
    ) {
        let table = RuleTable::new(RuleCode::new(code));
        let n = cells.len();
        let mut automaton = AutomatonBuilder::new(code)
            .with_boundary(BoundaryMode::Cyclic)
            .with_cells(&cells)
            .build();
        automaton.advance();

        prop_assert_eq!(automaton[0], table.apply(cells[n - 2], cells[0], cells[1]));
        prop_assert_eq!(automaton[n - 1], table.apply(cells[n - 2], cells[n - 1], cells[0]));
        for i in 1..n - 1 {
            prop_assert_eq!(automaton[i], table.apply(cells[i - 1], cells[i], cells[i + 1]));
        }
    }

    #[test]
    fn prop_periodic_commutes_with_rotation(
        code in any::<u8>(),
        cells in prop::collection::vec(any::<bool>(), 3..48),
        shift in 0usize..48,
    ) {
        let shift = shift % cells.len();
        let mut rotated = cells.clone();
        rotated.rotate_left(shift);

        let mut a = AutomatonBuilder::new(code)
            .with_boundary(BoundaryMode::Periodic)
            .with_cells(&cells)
            .build();
        let mut b = AutomatonBuilder::new(code)
            .with_boundary(BoundaryMode::Periodic)
            .with_cells(&rotated)
            .build();
        a.advance();
        b.advance();

        let mut expected = a.cells().to_vec();
        expected.rotate_left(shift);
        prop_assert_eq!(b.cells(), expected.as_slice());
    }
}

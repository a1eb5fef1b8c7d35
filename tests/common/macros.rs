/// Asserts that an automaton's row equals a `0`/`1` string.
#[macro_export]
macro_rules! assert_row {
    ($automaton:expr, $bits:expr) => {
        let actual = elementary_core::RowGlyphs::binary().render($automaton.cells());
        assert_eq!(
            actual,
            $bits,
            "row mismatch at generation {}",
            $automaton.generation()
        );
    };
}

/// Asserts that no cell is alive.
#[macro_export]
macro_rules! assert_all_dead {
    ($automaton:expr) => {
        assert_eq!(
            $automaton.live_count(),
            0,
            "expected an empty row, got {:?}",
            $automaton.to_string()
        );
    };
}

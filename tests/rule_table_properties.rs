use elementary_core::RuleTable;
use elementary_data::{Pattern, RuleCode};
use proptest::prelude::*;

#[test]
fn test_every_rule_matches_its_bits() {
    for code in 0..=255u8 {
        let table = RuleTable::new(RuleCode::new(code));
        let entries = table.entries();
        assert_eq!(entries.len(), 8);
        for (k, (pattern, output)) in entries.iter().enumerate() {
            assert_eq!(pattern.index(), k);
            assert_eq!(*output, (code >> k) & 1 == 1, "rule {code} pattern {k}");
        }
    }
}

#[test]
fn test_rule_table_dump_lists_all_patterns() {
    let dump = RuleTable::new(RuleCode::new(30)).to_string();
    let expected = "Rule 30:\n\
                    000 -> 0\n\
                    001 -> 1\n\
                    010 -> 1\n\
                    011 -> 1\n\
                    100 -> 1\n\
                    101 -> 0\n\
                    110 -> 0\n\
                    111 -> 0\n";
    assert_eq!(dump, expected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_apply_agrees_with_lookup(
        code in any::<u8>(),
        left in any::<bool>(),
        center in any::<bool>(),
        right in any::<bool>(),
    ) {
        let table = RuleTable::new(RuleCode::new(code));
        let pattern = Pattern::from_cells(left, center, right);
        prop_assert_eq!(table.apply(left, center, right), table.lookup(pattern));
        prop_assert_eq!(table.lookup(pattern), RuleCode::new(code).output(pattern));
    }

    #[test]
    fn prop_complement_rule_inverts_outputs(code in any::<u8>()) {
        let table = RuleTable::new(RuleCode::new(code));
        let inverse = RuleTable::new(RuleCode::new(!code));
        for pattern in Pattern::all() {
            prop_assert_ne!(table.lookup(pattern), inverse.lookup(pattern));
        }
    }
}

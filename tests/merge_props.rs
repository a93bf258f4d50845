use std::collections::HashSet;

use indexable_object::{IndexableObject, Key, Value};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,5}".prop_map(Key::Str),
        " [a-z]{0,4}".prop_map(Key::Str),
        any::<i64>().prop_map(Key::Int),
        any::<bool>().prop_map(Key::Bool),
        Just(Key::Null),
    ]
}

fn arb_entries() -> impl Strategy<Value = Vec<(Key, Value)>> {
    prop::collection::vec((arb_key(), any::<i64>().prop_map(Value::Int)), 0..8)
}

fn object(entries: &[(Key, Value)]) -> IndexableObject {
    entries.iter().cloned().collect()
}

proptest! {
    #[test]
    fn union_key_set_is_the_union_of_key_sets(
        a_entries in arb_entries(),
        b_entries in arb_entries(),
    ) {
        let a = object(&a_entries);
        let b = object(&b_entries);
        let merged = a.union(&b);

        let expected: HashSet<Key> = a.keys().chain(b.keys()).collect();
        let merged_keys: HashSet<Key> = merged.keys().collect();
        prop_assert_eq!(merged_keys, expected);
        prop_assert_eq!(merged.len(), merged.keys().count());
    }

    #[test]
    fn right_operand_wins_everywhere(
        a_entries in arb_entries(),
        b_entries in arb_entries(),
    ) {
        let a = object(&a_entries);
        let b = object(&b_entries);
        let merged = a.union(&b);

        for key in merged.keys() {
            let expected = if b.contains(&key) {
                b.get(&key).unwrap()
            } else {
                a.get(&key).unwrap()
            };
            prop_assert_eq!(merged.get(&key).unwrap(), expected);
        }
    }

    #[test]
    fn union_leaves_operands_unchanged(
        a_entries in arb_entries(),
        b_entries in arb_entries(),
    ) {
        let a = object(&a_entries);
        let b = object(&b_entries);
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = a.union(&b);
        prop_assert_eq!(&a, &a_before);
        prop_assert_eq!(&b, &b_before);
    }

    #[test]
    fn in_place_union_agrees_with_union(
        a_entries in arb_entries(),
        b_entries in arb_entries(),
    ) {
        let mut a = object(&a_entries);
        let b = object(&b_entries);
        let merged = a.union(&b);

        a.union_in_place(&b);
        prop_assert_eq!(a, merged);
    }

    #[test]
    fn every_key_round_trips_through_set_get(
        key in arb_key(),
        n in any::<i64>(),
    ) {
        let mut obj = IndexableObject::new();
        obj.set(key.clone(), Value::Int(n));

        prop_assert!(obj.contains(&key));
        prop_assert_eq!(obj.get(&key).unwrap(), &Value::Int(n));
        prop_assert_eq!(obj.len(), 1);

        if let Some(name) = key.as_attribute_name() {
            prop_assert_eq!(obj.attr(name).unwrap(), &Value::Int(n));
        } else if let Some(name) = key.as_str() {
            prop_assert!(obj.attr(name).unwrap_err().is_missing_attribute());
        }
    }
}

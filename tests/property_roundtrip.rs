use indexable_object::{IndexableObject, Key, Value, flatten, materialize};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        "[a-z_][a-z0-9_]{0,5}".prop_map(Key::Str),
        " [a-z]{0,4}".prop_map(Key::Str),
        any::<i64>().prop_map(Key::Int),
        any::<bool>().prop_map(Key::Bool),
    ]
}

// Plain nested data: maps, arrays, and scalars only. Floats are left out
// so structural equality is reflexive.
fn arb_plain_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..4)
                .prop_map(|entries| Value::Map(entries.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn flatten_inverts_materialize(value in arb_plain_value()) {
        prop_assert_eq!(flatten(&materialize(&value)), value);
    }

    #[test]
    fn materialize_leaves_no_plain_maps(value in arb_plain_value()) {
        fn has_map(value: &Value) -> bool {
            match value {
                Value::Map(_) => true,
                Value::Array(items) => items.iter().any(has_map),
                Value::Object(object) => object.iter().any(|(_, v)| has_map(v)),
                _ => false,
            }
        }
        prop_assert!(!has_map(&materialize(&value)));
    }

    #[test]
    fn serialization_round_trips(
        entries in prop::collection::vec((arb_key(), arb_plain_value()), 0..6)
    ) {
        let obj: IndexableObject = entries.into_iter().collect();
        let bytes = postcard::to_stdvec(&obj).unwrap();
        let restored: IndexableObject = postcard::from_bytes(&bytes).unwrap();

        prop_assert_eq!(&restored, &obj);
        prop_assert_eq!(
            restored.keys().collect::<Vec<_>>(),
            obj.keys().collect::<Vec<_>>()
        );
    }
}

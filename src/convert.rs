//! Recursive structural converters between plain nested data and
//! container form.
//!
//! Matching precedence is fixed as mapping, then sequence, then the
//! already-converted container, then scalar. Both converters borrow their
//! input and never mutate it; recursion depth equals the nesting depth of
//! the input, and `Value` trees cannot contain cycles.

use crate::object::IndexableObject;
use crate::value::Value;

/// Turns plain nested mapping/sequence data into container form: every
/// `Map` becomes an [`IndexableObject`] with materialized values, every
/// `Array` is rebuilt element-wise in order, an existing `Object` is
/// rebuilt with materialized values, and scalars come back unchanged.
pub fn materialize(value: &Value) -> Value {
    match value {
        Value::Map(map) => {
            let mut object = IndexableObject::new();
            for (key, value) in map {
                object.set(key.clone(), materialize(value));
            }
            Value::Object(object)
        }
        Value::Array(items) => Value::Array(items.iter().map(materialize).collect()),
        Value::Object(object) => Value::Object(
            object
                .iter()
                .map(|(key, value)| (key, materialize(value)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

/// The inverse shape of [`materialize`]: every `Object` becomes a plain
/// `Map` with flattened values, maps and arrays are rebuilt element-wise,
/// scalars come back unchanged. `flatten(materialize(x)) == x` for any
/// `x` built from maps, arrays, and scalars.
pub fn flatten(value: &Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), flatten(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(flatten).collect()),
        Value::Object(object) => Value::Map(
            object
                .iter()
                .map(|(key, value)| (key, flatten(value)))
                .collect(),
        ),
        scalar => scalar.clone(),
    }
}

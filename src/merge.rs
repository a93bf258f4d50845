use indexmap::IndexMap;

use crate::key::Key;
use crate::object::IndexableObject;
use crate::value::Value;

/// Anything that can serve as the right-hand operand of a union: the
/// container itself or a plain mapping. The source's own entry order
/// governs overlay order.
pub trait EntrySource {
    fn entries(&self) -> impl Iterator<Item = (Key, &Value)>;
}

impl EntrySource for IndexableObject {
    fn entries(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.iter()
    }
}

impl EntrySource for IndexMap<Key, Value> {
    fn entries(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.iter().map(|(key, value)| (key.clone(), value))
    }
}

/// Overlays `other` onto `this` and returns the mutated borrow.
/// Alias for [`IndexableObject::union_in_place`].
pub fn update<'a, S: EntrySource>(
    this: &'a mut IndexableObject,
    other: &S,
) -> &'a mut IndexableObject {
    this.union_in_place(other)
}

/// Returns a new container holding `this` overlaid with `other`, leaving
/// both operands unchanged. Alias for [`IndexableObject::union`].
pub fn merge<S: EntrySource>(this: &IndexableObject, other: &S) -> IndexableObject {
    this.union(other)
}

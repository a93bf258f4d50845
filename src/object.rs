use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ObjectError;
use crate::key::{Key, is_attribute_name};
use crate::merge::EntrySource;
use crate::value::Value;

/// A container exposing the same data through field-style and key-style
/// access.
///
/// Every key is routed by [`is_attribute_name`] to exactly one of two
/// stores: `Str` keys that are valid, non-reserved identifiers become
/// *native fields*, reachable through [`attr`] and [`get`] alike; every
/// other key lives in the *fallback store* and is reachable through
/// [`get`] only. Classification depends on nothing but the key itself, so
/// an entry never migrates between stores.
///
/// Both stores preserve insertion order. Iteration yields native fields
/// first, then fallback entries, each key exactly once.
///
/// Serialization round-trips through the entry list, so a deserialized
/// container re-classifies every key and behaves identically to the
/// original under all four access styles.
///
/// [`attr`]: IndexableObject::attr
/// [`get`]: IndexableObject::get
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(Key, Value)>", into = "Vec<(Key, Value)>")]
pub struct IndexableObject {
    fields: IndexMap<String, Value>,
    extras: IndexMap<Key, Value>,
}

impl IndexableObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up `key` in the store its classification selects. A missing
    /// attribute-eligible key fails with `MissingAttribute`, a missing
    /// fallback-only key with `MissingKey`.
    pub fn get(&self, key: &Key) -> Result<&Value, ObjectError> {
        match key.as_attribute_name() {
            Some(name) => self
                .fields
                .get(name)
                .ok_or_else(|| self.missing_attribute(name)),
            None => self
                .extras
                .get(key)
                .ok_or_else(|| ObjectError::missing_key(key.clone())),
        }
    }

    /// Like [`get`](Self::get), but returns `default` instead of failing
    /// when the key is absent. Any value is a legitimate default,
    /// including `Value::Null`.
    pub fn get_or<'a>(&'a self, key: &Key, default: &'a Value) -> &'a Value {
        self.get(key).unwrap_or(default)
    }

    /// Stores `value` under `key` in the store its classification selects.
    /// Never fails; overwriting keeps the entry's original position.
    pub fn set(&mut self, key: Key, value: Value) {
        match key {
            Key::Str(name) if is_attribute_name(&name) => {
                self.fields.insert(name, value);
            }
            key => {
                self.extras.insert(key, value);
            }
        }
    }

    /// Removes the entry for `key` and returns its value. The error split
    /// matches [`get`](Self::get); remaining entries keep their order.
    pub fn remove(&mut self, key: &Key) -> Result<Value, ObjectError> {
        match key.as_attribute_name() {
            Some(name) => match self.fields.shift_remove(name) {
                Some(value) => Ok(value),
                None => Err(self.missing_attribute(name)),
            },
            None => self
                .extras
                .shift_remove(key)
                .ok_or_else(|| ObjectError::missing_key(key.clone())),
        }
    }

    pub fn contains(&self, key: &Key) -> bool {
        match key.as_attribute_name() {
            Some(name) => self.fields.contains_key(name),
            None => self.extras.contains_key(key),
        }
    }

    /// Field-style access. Only native fields are reachable here: any name
    /// that is not attribute-eligible, or is eligible but absent, fails
    /// with `MissingAttribute` regardless of the fallback store's
    /// contents.
    pub fn attr(&self, name: &str) -> Result<&Value, ObjectError> {
        if is_attribute_name(name)
            && let Some(value) = self.fields.get(name)
        {
            return Ok(value);
        }
        Err(self.missing_attribute(name))
    }

    /// Field-style write; routes identically to [`set`](Self::set), so a
    /// non-eligible name lands in the fallback store rather than shadowing
    /// field storage.
    pub fn set_attr(&mut self, name: &str, value: Value) {
        self.set(Key::Str(name.to_string()), value);
    }

    /// Field-style removal; native fields only, with the same error rule
    /// as [`attr`](Self::attr).
    pub fn remove_attr(&mut self, name: &str) -> Result<Value, ObjectError> {
        if is_attribute_name(name)
            && let Some(value) = self.fields.shift_remove(name)
        {
            return Ok(value);
        }
        Err(self.missing_attribute(name))
    }

    pub fn contains_attr(&self, name: &str) -> bool {
        is_attribute_name(name) && self.fields.contains_key(name)
    }

    /// All keys currently held: native-field names first, in insertion
    /// order, then fallback keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Key> {
        self.fields
            .keys()
            .map(|name| Key::Str(name.clone()))
            .chain(self.extras.keys().cloned())
    }

    /// All entries, in the same order as [`keys`](Self::keys).
    pub fn iter(&self) -> impl Iterator<Item = (Key, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (Key::Str(name.clone()), value))
            .chain(self.extras.iter().map(|(key, value)| (key.clone(), value)))
    }

    /// Native fields only, as borrowed names.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.extras.is_empty()
    }

    /// Returns a new container seeded from `self` and overlaid with every
    /// entry of `other`, shallow, in `other`'s own order, `other` winning
    /// on key collisions. Neither operand is mutated.
    pub fn union<S: EntrySource>(&self, other: &S) -> IndexableObject {
        let mut merged = self.clone();
        merged.union_in_place(other);
        merged
    }

    /// The mutating form of [`union`](Self::union): overlays `other` onto
    /// `self` and returns `self`.
    pub fn union_in_place<S: EntrySource>(&mut self, other: &S) -> &mut Self {
        for (key, value) in other.entries() {
            self.set(key, value.clone());
        }
        self
    }

    // Pass-through aliases for an external capability-restriction layer.
    // They are the interception seam and must stay behaviorally identical
    // to the operations they wrap.

    pub fn guarded_set(&mut self, key: Key, value: Value) {
        self.set(key, value);
    }

    pub fn guarded_remove(&mut self, key: &Key) -> Result<Value, ObjectError> {
        self.remove(key)
    }

    pub fn guarded_set_attr(&mut self, name: &str, value: Value) {
        self.set_attr(name, value);
    }

    pub fn guarded_remove_attr(&mut self, name: &str) -> Result<Value, ObjectError> {
        self.remove_attr(name)
    }

    fn missing_attribute(&self, name: &str) -> ObjectError {
        let candidates: Vec<&str> = self.fields.keys().map(String::as_str).collect();
        ObjectError::missing_attribute(name, &candidates)
    }
}

impl Extend<(Key, Value)> for IndexableObject {
    fn extend<I: IntoIterator<Item = (Key, Value)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.set(key, value);
        }
    }
}

impl FromIterator<(Key, Value)> for IndexableObject {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(entries: I) -> Self {
        let mut object = Self::new();
        object.extend(entries);
        object
    }
}

impl From<IndexMap<Key, Value>> for IndexableObject {
    fn from(map: IndexMap<Key, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Vec<(Key, Value)>> for IndexableObject {
    fn from(entries: Vec<(Key, Value)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<IndexableObject> for Vec<(Key, Value)> {
    fn from(object: IndexableObject) -> Self {
        object.into_iter().collect()
    }
}

type FieldEntries = std::iter::Map<
    indexmap::map::IntoIter<String, Value>,
    fn((String, Value)) -> (Key, Value),
>;

impl IntoIterator for IndexableObject {
    type Item = (Key, Value);
    type IntoIter = std::iter::Chain<FieldEntries, indexmap::map::IntoIter<Key, Value>>;

    fn into_iter(self) -> Self::IntoIter {
        fn field_entry((name, value): (String, Value)) -> (Key, Value) {
            (Key::Str(name), value)
        }
        self.fields
            .into_iter()
            .map(field_entry as fn((String, Value)) -> (Key, Value))
            .chain(self.extras)
    }
}

/// Type and size only; the verbose form is `Debug`.
impl fmt::Display for IndexableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IndexableObject({} entries)", self.len())
    }
}

/// Verbose diagnostic form: every entry in iteration order. Not a parse
/// format.
impl fmt::Debug for IndexableObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in self.iter() {
            map.entry(&format_args!("{key}"), value);
        }
        map.finish()
    }
}

//! # indexable-object
//!
//! A container that exposes the same underlying data through two access
//! styles: field-style (`obj.attr("name")`) and key-style
//! (`obj.get(&key)`), while accepting arbitrary hashable keys rather than
//! just valid identifiers.
//!
//! Data usually arrives as nested mapping/sequence structures (parsed
//! configuration, deserialized payloads). Consumer code wants ergonomic
//! named access wherever keys happen to be valid names, without giving up
//! the odd keys (`" padded"`, `1`, `true`, `(1, 2)`) that real payloads
//! carry. [`IndexableObject`] routes every key to one of two stores based
//! on a pure classification rule, and [`materialize`]/[`flatten`] convert
//! whole nested structures to and from container form.
//!
//! ```
//! use indexable_object::{IndexableObject, Key, Value};
//!
//! let mut obj = IndexableObject::new();
//! obj.set(Key::from("boo"), Value::from("foo"));
//! obj.set(Key::from(" boo"), Value::from("bar"));
//!
//! assert_eq!(obj.attr("boo").unwrap(), &Value::from("foo"));
//! assert_eq!(obj.get(&Key::from(" boo")).unwrap(), &Value::from("bar"));
//! assert!(obj.attr(" boo").is_err());
//! assert_eq!(obj.len(), 2);
//! ```

pub mod convert;
pub mod error;
pub mod key;
pub mod merge;
pub mod object;
pub mod value;

pub use convert::{flatten, materialize};
pub use error::{ObjectError, suggest_similar};
pub use key::{Key, is_attribute_name, is_identifier};
pub use merge::{EntrySource, merge, update};
pub use object::IndexableObject;
pub use value::Value;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Compiled regex for the reserved name class: two or more leading
/// underscores, at least one non-whitespace character, then two or more
/// trailing underscores, matched as a prefix (`__x__`, `__data__`,
/// `__x__tail`). Names in this class are kept for internal bookkeeping
/// and never behave as ordinary field names.
static RESERVED_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached reserved-name regex.
fn reserved_regex() -> &'static Regex {
    RESERVED_PATTERN
        .get_or_init(|| Regex::new(r"^_{2}\S+_{2}").expect("invalid reserved-name pattern"))
}

/// Returns true if `s` is a syntactically valid identifier: non-empty,
/// starting with a letter or underscore, continuing with letters, digits,
/// or underscores. Unicode letters count, so `你好` is an identifier while
/// `1-2-3` and `" boo"` are not.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }

    for c in chars {
        if !c.is_alphanumeric() && c != '_' {
            return false;
        }
    }

    true
}

/// Returns true if `s` starts with the reserved name pattern.
pub fn is_reserved_name(s: &str) -> bool {
    reserved_regex().is_match(s)
}

/// The classification rule: a string becomes a native field name iff it is
/// a valid identifier and not a reserved name. Everything else is routed to
/// the fallback store. The result depends only on the string itself, so a
/// key never changes stores over the life of a container.
pub fn is_attribute_name(s: &str) -> bool {
    is_identifier(s) && !is_reserved_name(s)
}

/// A hashable key. Any variant is usable with key-style access; only
/// `Str` keys that pass [`is_attribute_name`] are reachable field-style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Key {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Key>),
}

impl Key {
    /// Returns the field name when this key is attribute-eligible.
    pub fn as_attribute_name(&self) -> Option<&str> {
        match self {
            Key::Str(s) if is_attribute_name(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Key::Null => "null",
            Key::Bool(_) => "bool",
            Key::Int(_) => "int",
            Key::Float(_) => "float",
            Key::Str(_) => "string",
            Key::Seq(_) => "seq",
        }
    }
}

// Floats compare and hash by bit pattern so `Key` can satisfy `Eq + Hash`.
// `NaN` keys are equal to themselves and `-0.0` is distinct from `0.0`.
impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Null, Key::Null) => true,
            (Key::Bool(a), Key::Bool(b)) => a == b,
            (Key::Int(a), Key::Int(b)) => a == b,
            (Key::Float(a), Key::Float(b)) => a.to_bits() == b.to_bits(),
            (Key::Str(a), Key::Str(b)) => a == b,
            (Key::Seq(a), Key::Seq(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::Null => state.write_u8(0),
            Key::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Key::Int(n) => {
                state.write_u8(2);
                n.hash(state);
            }
            Key::Float(f) => {
                state.write_u8(3);
                f.to_bits().hash(state);
            }
            Key::Str(s) => {
                state.write_u8(4);
                s.hash(state);
            }
            Key::Seq(keys) => {
                state.write_u8(5);
                keys.hash(state);
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(n) => write!(f, "{n}"),
            Key::Float(x) => write!(f, "{x}"),
            Key::Str(s) => write!(f, "{s:?}"),
            Key::Seq(keys) => {
                write!(f, "(")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Float(value)
    }
}

impl From<()> for Key {
    fn from(_: ()) -> Self {
        Key::Null
    }
}

impl<T: Into<Key>> From<Vec<T>> for Key {
    fn from(keys: Vec<T>) -> Self {
        Key::Seq(keys.into_iter().map(Into::into).collect())
    }
}

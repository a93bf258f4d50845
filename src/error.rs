use std::fmt;

use crate::key::Key;

/// Find the closest match from `candidates` using Levenshtein distance.
/// Returns `None` if no candidate is close enough (max distance 2, and
/// distance must be strictly less than `input.len()` to avoid nonsense
/// suggestions for very short inputs).
pub fn suggest_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for &candidate in candidates {
        let d = levenshtein(input, candidate);
        if d == 0 {
            continue;
        }
        if d > 2 || d >= input.len() {
            continue;
        }
        if best.is_none() || d < best.unwrap().1 {
            best = Some((candidate, d));
        }
    }
    best.map(|(s, _)| s)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];
    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// A failed lookup. There are exactly two kinds: the key was
/// attribute-eligible but no such field exists, or the key was
/// fallback-only and the fallback store has no entry for it.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectError {
    MissingAttribute {
        name: String,
        suggestion: Option<String>,
    },
    MissingKey {
        key: Key,
    },
}

impl ObjectError {
    pub fn missing_attribute(name: impl Into<String>, candidates: &[&str]) -> Self {
        let name = name.into();
        let suggestion = suggest_similar(&name, candidates).map(str::to_string);
        Self::MissingAttribute { name, suggestion }
    }

    pub fn missing_key(key: Key) -> Self {
        Self::MissingKey { key }
    }

    /// True when the error is the attribute-side kind.
    pub fn is_missing_attribute(&self) -> bool {
        matches!(self, Self::MissingAttribute { .. })
    }

    pub fn is_missing_key(&self) -> bool {
        matches!(self, Self::MissingKey { .. })
    }
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute { name, suggestion } => {
                write!(f, "no attribute named '{name}'")?;
                if let Some(s) = suggestion {
                    write!(f, " — did you mean '{s}'?")?;
                }
                Ok(())
            }
            Self::MissingKey { key } => write!(f, "no entry for key {key}"),
        }
    }
}

impl std::error::Error for ObjectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_field_names() {
        let err = ObjectError::missing_attribute("colr", &["color", "count"]);
        match err {
            ObjectError::MissingAttribute { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("color"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_inputs_get_no_suggestion() {
        assert_eq!(suggest_similar("a", &["b"]), None);
    }

    #[test]
    fn missing_key_displays_the_key() {
        let err = ObjectError::missing_key(Key::from(1i64));
        assert_eq!(err.to_string(), "no entry for key 1");
    }
}

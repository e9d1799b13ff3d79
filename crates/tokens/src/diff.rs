//! Structural comparison of serialized token documents.
//!
//! The diff walks two JSON documents and reports every place where their key
//! structure or leaf value kind departs. Leaf values themselves are free to
//! differ; that is the whole point of having one document per theme mode.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Broad classification of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool,
    /// Any number.
    Number,
    /// Any string.
    String,
    /// An array.
    Array,
    /// An object.
    Object,
}

impl ValueKind {
    /// Classifies a JSON value.
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        })
    }
}

/// How a candidate document departs from the reference structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Path exists in the reference but not in the candidate.
    Missing,
    /// Path exists in the candidate but not in the reference.
    Unexpected,
    /// Path exists in both with different value kinds.
    TypeMismatch {
        /// Kind found in the reference document.
        expected: ValueKind,
        /// Kind found in the candidate document.
        found: ValueKind,
    },
}

/// One structural departure, anchored at a dotted key path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralDiff {
    /// Dotted path from the document root, e.g. `colors.primary.main`.
    pub path: String,
    /// The kind of departure.
    pub kind: DiffKind,
}

impl fmt::Display for StructuralDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiffKind::Missing => write!(f, "missing key `{}`", self.path),
            DiffKind::Unexpected => write!(f, "unexpected key `{}`", self.path),
            DiffKind::TypeMismatch { expected, found } => write!(
                f,
                "type mismatch at `{}`: expected {expected}, found {found}",
                self.path
            ),
        }
    }
}

/// Recursively diffs the key structure of `candidate` against `reference`.
///
/// Returns every departure in deterministic (sorted path) order within each
/// object. An empty result means the two documents are structurally aligned.
#[must_use]
pub fn diff_structure(reference: &Value, candidate: &Value) -> Vec<StructuralDiff> {
    let mut diffs = Vec::new();
    walk("", reference, candidate, &mut diffs);
    diffs
}

fn walk(path: &str, reference: &Value, candidate: &Value, diffs: &mut Vec<StructuralDiff>) {
    if let (Value::Object(reference), Value::Object(candidate)) = (reference, candidate) {
        let keys: BTreeSet<&String> = reference.keys().chain(candidate.keys()).collect();
        for key in keys {
            let child = join(path, key);
            match (reference.get(key.as_str()), candidate.get(key.as_str())) {
                (Some(reference), Some(candidate)) => walk(&child, reference, candidate, diffs),
                (Some(_), None) => diffs.push(StructuralDiff {
                    path: child,
                    kind: DiffKind::Missing,
                }),
                _ => diffs.push(StructuralDiff {
                    path: child,
                    kind: DiffKind::Unexpected,
                }),
            }
        }
        return;
    }

    let expected = ValueKind::of(reference);
    let found = ValueKind::of(candidate);
    if expected != found {
        diffs.push(StructuralDiff {
            path: path.to_owned(),
            kind: DiffKind::TypeMismatch { expected, found },
        });
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn identical_structures_produce_no_diffs() {
        let reference = json!({"colors": {"primary": "#A8D8EA"}, "spacing": {"md": "1rem"}});
        let candidate = json!({"colors": {"primary": "#466D81"}, "spacing": {"md": "2rem"}});
        assert!(diff_structure(&reference, &candidate).is_empty());
    }

    #[test]
    fn reports_missing_nested_keys() {
        let reference = json!({"typography": {"fontSize": {"md": "1rem", "lg": "1.125rem"}}});
        let candidate = json!({"typography": {"fontSize": {"md": "1rem"}}});
        let diffs = diff_structure(&reference, &candidate);
        assert_eq!(
            diffs,
            vec![StructuralDiff {
                path: "typography.fontSize.lg".into(),
                kind: DiffKind::Missing,
            }]
        );
    }

    #[test]
    fn reports_unexpected_keys() {
        let reference = json!({"radii": {"sm": "0.25rem"}});
        let candidate = json!({"radii": {"sm": "0.25rem", "pill": "9999px"}});
        let diffs = diff_structure(&reference, &candidate);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].path, "radii.pill");
        assert_eq!(diffs[0].kind, DiffKind::Unexpected);
    }

    #[test]
    fn reports_leaf_kind_changes() {
        let reference = json!({"zIndex": {"auto": "auto", "modal": 1400}});
        let candidate = json!({"zIndex": {"auto": 0, "modal": 1400}});
        let diffs = diff_structure(&reference, &candidate);
        assert_eq!(
            diffs,
            vec![StructuralDiff {
                path: "zIndex.auto".into(),
                kind: DiffKind::TypeMismatch {
                    expected: ValueKind::String,
                    found: ValueKind::Number,
                },
            }]
        );
    }

    #[test]
    fn whole_category_replaced_by_leaf_is_a_type_mismatch() {
        let reference = json!({"spacing": {"md": "1rem"}});
        let candidate = json!({"spacing": "1rem"});
        let diffs = diff_structure(&reference, &candidate);
        assert_eq!(diffs[0].path, "spacing");
        assert!(matches!(diffs[0].kind, DiffKind::TypeMismatch { .. }));
    }
}

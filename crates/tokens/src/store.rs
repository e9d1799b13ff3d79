//! Registry that owns one token set per theme mode.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::diff::{diff_structure, StructuralDiff};
use crate::tokens::{dark_tokens, light_tokens, TokenSet};

/// Theme modes shipped with the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode.
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// Every mode, in registration order.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Returns the mode's slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by token lookups, validation, and persistence.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Raised when a lookup names a mode the store does not hold.
    #[error("unknown theme mode '{0}'")]
    UnknownMode(String),
    /// Raised when the registered token sets are not structurally aligned.
    #[error("token sets are not structurally aligned ({} violation(s))", .violations.len())]
    StructuralMismatch {
        /// Every departure found by the parity check.
        violations: Vec<ParityViolation>,
    },
    /// Wraps JSON document serialization issues.
    #[error("token document error: {0}")]
    Document(#[from] serde_json::Error),
    /// Wraps underlying IO errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One spot where a mode's structure departs from the reference mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParityViolation {
    /// The mode whose document departs.
    pub mode: ThemeMode,
    /// Where and how it departs.
    pub diff: StructuralDiff,
}

impl fmt::Display for ParityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.mode, self.diff)
    }
}

/// Outcome of a structural parity check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<ParityViolation>,
}

impl ValidationReport {
    /// Whether the check found no departures.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Every departure found, in mode registration order.
    #[must_use]
    pub fn violations(&self) -> &[ParityViolation] {
        &self.violations
    }

    /// Converts the report into a fail-fast result.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::StructuralMismatch`] when any violation exists.
    pub fn into_result(self) -> Result<(), TokenError> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(TokenError::StructuralMismatch {
                violations: self.violations,
            })
        }
    }
}

/// Immutable registry mapping theme modes to their token sets.
///
/// Constructed once at startup, read by any number of consumers afterwards.
/// Switching modes means asking for a different set, never mutating one.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenStore {
    sets: HashMap<ThemeMode, TokenSet>,
    order: Vec<ThemeMode>,
}

impl Default for TokenStore {
    fn default() -> Self {
        let mut sets = HashMap::new();
        sets.insert(ThemeMode::Light, light_tokens());
        sets.insert(ThemeMode::Dark, dark_tokens());
        Self {
            sets,
            order: ThemeMode::ALL.to_vec(),
        }
    }
}

impl TokenStore {
    /// Creates a store holding the built-in token sets, not yet validated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from one raw JSON document per mode.
    ///
    /// The documents are structurally validated against the first one before
    /// any typed deserialization happens, so a truncated document fails with
    /// a precise list of missing paths rather than a serde field error.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::StructuralMismatch`] when the documents disagree
    /// on structure, or [`TokenError::Document`] when a document does not
    /// deserialize into a [`TokenSet`].
    pub fn from_documents<I>(documents: I) -> Result<Self, TokenError>
    where
        I: IntoIterator<Item = (ThemeMode, Value)>,
    {
        let documents: Vec<(ThemeMode, Value)> = documents.into_iter().collect();
        validate_documents(&documents).into_result()?;

        let mut sets = HashMap::new();
        let mut order = Vec::with_capacity(documents.len());
        for (mode, document) in documents {
            let set: TokenSet = serde_json::from_value(document)?;
            if sets.insert(mode, set).is_none() {
                order.push(mode);
            }
        }
        Ok(Self { sets, order })
    }

    /// Returns the token set for the requested mode.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownMode`] when the mode is not registered.
    pub fn tokens(&self, mode: ThemeMode) -> Result<&TokenSet, TokenError> {
        self.sets
            .get(&mode)
            .ok_or_else(|| TokenError::UnknownMode(mode.as_str().to_owned()))
    }

    /// Looks up a mode by its slug.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownMode`] when no registered mode matches.
    pub fn mode_from_str(&self, name: &str) -> Result<ThemeMode, TokenError> {
        self.order
            .iter()
            .copied()
            .find(|mode| mode.as_str() == name)
            .ok_or_else(|| TokenError::UnknownMode(name.to_owned()))
    }

    /// Returns the token set for the mode named by `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownMode`] when no registered mode matches.
    pub fn tokens_by_name(&self, name: &str) -> Result<&TokenSet, TokenError> {
        self.tokens(self.mode_from_str(name)?)
    }

    /// Iterates over the registered modes in a stable order.
    pub fn modes(&self) -> impl Iterator<Item = ThemeMode> + '_ {
        self.order.iter().copied()
    }

    /// Checks structural parity of every registered set against the first.
    ///
    /// Pure; run it once at startup rather than per lookup.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let documents: Vec<(ThemeMode, Value)> = self
            .order
            .iter()
            .map(|mode| {
                let set = self.sets.get(mode).expect("registered mode has a token set");
                (*mode, to_document_value(set))
            })
            .collect();
        validate_documents(&documents)
    }

    /// Runs the parity check and hands the store back only when it passes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::StructuralMismatch`] carrying every violation.
    pub fn verified(self) -> Result<Self, TokenError> {
        self.validate().into_result()?;
        Ok(self)
    }

    /// Serializes one mode's token set to its canonical JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownMode`] when the mode is not registered.
    pub fn to_document(&self, mode: ThemeMode) -> Result<Value, TokenError> {
        let set = self.tokens(mode)?;
        Ok(serde_json::to_value(set)?)
    }
}

fn to_document_value(set: &TokenSet) -> Value {
    serde_json::to_value(set).expect("token set serializes to a JSON document")
}

fn validate_documents(documents: &[(ThemeMode, Value)]) -> ValidationReport {
    let mut violations = Vec::new();
    if let Some(((_, reference), rest)) = documents.split_first() {
        for (mode, candidate) in rest {
            for diff in diff_structure(reference, candidate) {
                violations.push(ParityViolation { mode: *mode, diff });
            }
        }
    }
    ValidationReport { violations }
}

/// Returns the process-wide store, validated on first access.
///
/// # Panics
///
/// Panics on first access if the built-in token sets ever lose structural
/// parity, which aborts startup before any consumer reads a partial set.
#[must_use]
pub fn shared() -> &'static TokenStore {
    static SHARED: Lazy<TokenStore> = Lazy::new(|| {
        TokenStore::new()
            .verified()
            .expect("built-in token sets are structurally aligned")
    });
    &SHARED
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::json;

    use super::*;
    use crate::diff::DiffKind;

    #[test]
    fn modes_are_ordered_and_restartable() {
        let store = TokenStore::new();
        let first: Vec<ThemeMode> = store.modes().collect();
        let second: Vec<ThemeMode> = store.modes().collect();
        assert_eq!(first, vec![ThemeMode::Light, ThemeMode::Dark]);
        assert_eq!(first, second);
    }

    #[test]
    fn mode_lookup_by_slug() {
        let store = TokenStore::new();
        assert_eq!(store.mode_from_str("dark").unwrap(), ThemeMode::Dark);
        assert!(matches!(
            store.mode_from_str("sepia"),
            Err(TokenError::UnknownMode(name)) if name == "sepia"
        ));
        assert!(matches!(
            store.tokens_by_name("sepia"),
            Err(TokenError::UnknownMode(_))
        ));
    }

    #[test]
    fn built_in_sets_are_structurally_aligned() {
        let report = TokenStore::new().validate();
        assert!(report.is_valid(), "violations: {:?}", report.violations());
        assert!(shared().validate().is_valid());
    }

    #[test]
    fn documents_expose_exactly_the_seven_categories() {
        let store = TokenStore::new();
        for mode in store.modes() {
            let document = store.to_document(mode).unwrap();
            let categories: BTreeSet<String> = document
                .as_object()
                .unwrap()
                .keys()
                .cloned()
                .collect();
            let expected: BTreeSet<String> = [
                "colors",
                "spacing",
                "radii",
                "shadows",
                "typography",
                "transitions",
                "zIndex",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect();
            assert_eq!(categories, expected);
        }
    }

    #[test]
    fn store_round_trips_through_documents() {
        let store = TokenStore::new();
        let documents: Vec<(ThemeMode, Value)> = store
            .modes()
            .map(|mode| (mode, store.to_document(mode).unwrap()))
            .collect();
        let reloaded = TokenStore::from_documents(documents).unwrap();
        assert_eq!(reloaded, store);
    }

    #[test]
    fn truncated_dark_document_fails_with_missing_categories() {
        // A dark mode carrying only `colors`, with the other categories left
        // to an unwritten "remains the same as light" convention.
        let light = serde_json::to_value(light_tokens()).unwrap();
        let mut dark = serde_json::to_value(dark_tokens()).unwrap();
        if let Value::Object(map) = &mut dark {
            map.retain(|key, _| key == "colors");
        }

        let error = TokenStore::from_documents([
            (ThemeMode::Light, light),
            (ThemeMode::Dark, dark),
        ])
        .unwrap_err();

        let TokenError::StructuralMismatch { violations } = error else {
            panic!("expected a structural mismatch, got {error}");
        };
        assert!(violations
            .iter()
            .all(|violation| violation.mode == ThemeMode::Dark
                && violation.diff.kind == DiffKind::Missing));
        let paths: BTreeSet<&str> = violations
            .iter()
            .map(|violation| violation.diff.path.as_str())
            .collect();
        let expected: BTreeSet<&str> = [
            "radii",
            "shadows",
            "spacing",
            "transitions",
            "typography",
            "zIndex",
        ]
        .into_iter()
        .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn coerced_sentinel_is_reported_as_type_mismatch() {
        let light = serde_json::to_value(light_tokens()).unwrap();
        let mut dark = serde_json::to_value(dark_tokens()).unwrap();
        dark["zIndex"]["auto"] = json!(0);

        let error = TokenStore::from_documents([
            (ThemeMode::Light, light),
            (ThemeMode::Dark, dark),
        ])
        .unwrap_err();

        let TokenError::StructuralMismatch { violations } = error else {
            panic!("expected a structural mismatch, got {error}");
        };
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].diff.path, "zIndex.auto");
        assert!(matches!(
            violations[0].diff.kind,
            DiffKind::TypeMismatch { .. }
        ));
    }

    #[test]
    fn missing_mode_surfaces_as_unknown_mode() {
        let light = serde_json::to_value(light_tokens()).unwrap();
        let store = TokenStore::from_documents([(ThemeMode::Light, light)]).unwrap();
        assert!(matches!(
            store.tokens(ThemeMode::Dark),
            Err(TokenError::UnknownMode(name)) if name == "dark"
        ));
    }
}

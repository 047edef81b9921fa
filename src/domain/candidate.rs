//! Candidate domain model.
//!
//! This module defines the two value types the matcher works with: the
//! immutable [`CandidateSet`] supplied at construction, and the ephemeral
//! [`Candidate`] split produced for the current input text.

use serde::{Deserialize, Serialize};

use super::error::{Result, TypeaheadError};

/// A single match, split into the portion that matched the input and the rest.
///
/// `matched_prefix` equals the input text under case folding, and
/// `matched_prefix + remainder` reassembles the original candidate string
/// exactly. A `Candidate` is only valid for the input that produced it; the
/// match list is recomputed on every text change, never patched.
///
/// # Examples
///
/// ```
/// use typeahead::Candidate;
///
/// let candidate = Candidate {
///     matched_prefix: "A".to_string(),
///     remainder: "udi".to_string(),
/// };
/// assert_eq!(candidate.full_text(), "Audi");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Leading portion of the candidate that matched the input text.
    pub matched_prefix: String,
    /// Everything after the matched prefix.
    pub remainder: String,
}

impl Candidate {
    /// Reassembles the original candidate string.
    ///
    /// This is the value committed into the input text when the candidate is
    /// selected.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{}{}", self.matched_prefix, self.remainder)
    }
}

/// The immutable, ordered set of strings the widget matches against.
///
/// Supplied once at construction and never mutated afterwards; the sole
/// source of truth for matching. Entries must be unique — duplicates are
/// rejected with a configuration error. An empty set is legal and simply
/// never matches.
///
/// # Examples
///
/// ```
/// use typeahead::CandidateSet;
///
/// let set = CandidateSet::new(vec!["Audi".to_string(), "BMW".to_string()])?;
/// assert_eq!(set.len(), 2);
///
/// let dup = CandidateSet::new(vec!["Audi".to_string(), "Audi".to_string()]);
/// assert!(dup.is_err());
/// # Ok::<(), typeahead::TypeaheadError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    entries: Vec<String>,
}

impl CandidateSet {
    /// Creates a candidate set from the given entries, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`TypeaheadError::Config`] if the same string appears more
    /// than once.
    pub fn new(entries: Vec<String>) -> Result<Self> {
        let mut seen = std::collections::HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.as_str()) {
                return Err(TypeaheadError::Config(format!(
                    "duplicate candidate entry: {entry:?}"
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Returns the entries in their original order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns the number of candidate strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the set contains no candidates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicates() {
        let err = CandidateSet::new(vec!["a".to_string(), "b".to_string(), "a".to_string()])
            .unwrap_err();
        assert!(matches!(err, TypeaheadError::Config(_)));
    }

    #[test]
    fn preserves_order() {
        let set =
            CandidateSet::new(vec!["b".to_string(), "a".to_string(), "c".to_string()]).unwrap();
        assert_eq!(set.entries(), ["b", "a", "c"]);
    }

    #[test]
    fn empty_set_is_legal() {
        let set = CandidateSet::new(vec![]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn full_text_concatenates_split() {
        let candidate = Candidate {
            matched_prefix: "Alfa".to_string(),
            remainder: " Romeo".to_string(),
        };
        assert_eq!(candidate.full_text(), "Alfa Romeo");
    }
}

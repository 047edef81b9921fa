//! Pure prefix matcher.
//!
//! This module narrows a [`CandidateSet`] to the entries whose leading
//! characters match the current input text, case-insensitively. It is the only
//! place matching semantics live: no state, no I/O, and deterministic for a
//! given `(candidates, input)` pair.
//!
//! # Matching Rules
//!
//! - Blank input (empty or all-whitespace) matches nothing — it is never
//!   treated as "matches everything".
//! - A candidate matches iff its first `input.chars().count()` characters
//!   equal the input under simple Unicode upper-casing.
//! - Candidates shorter than the input never match.
//! - Output preserves the original candidate order and multiplicity; there is
//!   no deduplication, scoring, or result cap.

use super::candidate::{Candidate, CandidateSet};

/// Filters the candidate set down to prefix matches for `input`.
///
/// Each match is returned as a [`Candidate`] split at the character boundary
/// where the input ends, so the view layer can emphasize the matched prefix
/// without re-deriving it.
///
/// # Examples
///
/// ```
/// use typeahead::{matcher, CandidateSet};
///
/// let set = CandidateSet::new(vec![
///     "Audi".to_string(),
///     "Alfa Romeo".to_string(),
///     "BMW".to_string(),
/// ])?;
///
/// let matches = matcher::filter(&set, "a");
/// assert_eq!(matches.len(), 2);
/// assert_eq!(matches[0].matched_prefix, "A");
/// assert_eq!(matches[0].remainder, "udi");
///
/// assert!(matcher::filter(&set, "   ").is_empty());
/// # Ok::<(), typeahead::TypeaheadError>(())
/// ```
#[must_use]
pub fn filter(candidates: &CandidateSet, input: &str) -> Vec<Candidate> {
    if input.trim().is_empty() {
        return vec![];
    }

    candidates
        .entries()
        .iter()
        .filter_map(|entry| split_prefix(entry, input))
        .collect()
}

/// Splits `candidate` at the end of a case-insensitive prefix match against
/// `input`, or returns `None` if the prefix does not match.
///
/// Comparison is per-character using simple upper-case folding; a candidate
/// that runs out of characters before the input does fails naturally.
fn split_prefix(candidate: &str, input: &str) -> Option<Candidate> {
    let mut boundary = 0;
    let mut candidate_chars = candidate.char_indices();

    for want in input.chars() {
        let (idx, have) = candidate_chars.next()?;
        if !chars_eq_fold(have, want) {
            return None;
        }
        boundary = idx + have.len_utf8();
    }

    Some(Candidate {
        matched_prefix: candidate[..boundary].to_string(),
        remainder: candidate[boundary..].to_string(),
    })
}

/// Case-insensitive character equality via simple upper-casing.
fn chars_eq_fold(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}

//! Domain layer for the typeahead widget.
//!
//! This module contains the core domain types and matching logic, independent
//! of UI or host-binding concerns. It follows domain-driven design principles
//! by keeping the matching rules isolated from everything that renders or
//! dispatches events.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`candidate`]: Candidate value types and the immutable candidate set
//! - [`matcher`]: Pure case-insensitive prefix matching
//!
//! # Examples
//!
//! ```
//! use typeahead::{matcher, CandidateSet};
//!
//! fn first_match(set: &CandidateSet, input: &str) -> Option<String> {
//!     matcher::filter(set, input)
//!         .into_iter()
//!         .next()
//!         .map(|c| c.full_text())
//! }
//! ```

pub mod candidate;
pub mod error;
pub mod matcher;

pub use candidate::{Candidate, CandidateSet};
pub use error::{Result, TypeaheadError};

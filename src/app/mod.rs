//! Application layer coordinating state, events, and actions.
//!
//! This module implements the suggestion state machine, sitting between the
//! host binding (main.rs or any other embedder) and the domain layer. It
//! follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Event → handle_event → State Mutations → (render?, Actions) → Host
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`keys`]: Key press classification into the closed navigation set
//! - [`state`]: Central state container, phase machine, view model computation
//! - [`suggestions`]: Suggestion list controller (focus ownership, wraparound)
//!
//! # Example
//!
//! ```
//! use typeahead::{handle_event, CandidateSet, Event, Theme, TypeaheadState};
//!
//! let candidates = CandidateSet::new(vec!["Audi".to_string()])?;
//! let mut state = TypeaheadState::new(candidates, Theme::default());
//! let (render, _actions) = handle_event(&mut state, &Event::TextChanged("a".into()))?;
//! assert!(render);
//! # Ok::<(), typeahead::TypeaheadError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod keys;
pub mod state;
pub mod suggestions;

pub use actions::Action;
pub use handler::{handle_event, Event, KeyOrigin};
pub use keys::{Key, KeyPress};
pub use state::{Phase, TypeaheadState};
pub use suggestions::{Direction, FocusAdvance, SuggestionList};

//! Actions representing side effects to be executed by the host binding.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing an event. The core never performs
//! focus I/O itself; it declares intent and the host binding applies the
//! literal focus transfer to whatever rendering technology it uses.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The host binding
//! executes them in sequence.
//!
//! # Example
//!
//! ```
//! use typeahead::Action;
//!
//! let actions = vec![Action::SuppressDefault, Action::FocusSuggestion(0)];
//! assert!(actions.contains(&Action::SuppressDefault));
//! ```

/// Commands representing side effects to be executed by the host binding.
///
/// Actions are the boundary between pure state transitions and effectful
/// operations like moving platform focus or cancelling a key's default
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move platform input focus to the text field.
    ///
    /// Emitted on dismissal (Escape, outside interaction), on selection, and
    /// when backward navigation crosses the index-0 boundary.
    FocusField,

    /// Move platform input focus to the suggestion at the given index.
    ///
    /// Emitted when the controller takes a navigation step itself (entering
    /// the list, interior forward steps, wraparound).
    FocusSuggestion(usize),

    /// The key press that produced this transition must not perform its
    /// default behavior.
    ///
    /// Without this the wraparound Tab would additionally move focus to the
    /// next element the host page places after the widget.
    SuppressDefault,
}

//! Typeahead: an interactive prefix-matching suggestion widget.
//!
//! The crate implements the suggestion state machine behind an autocomplete
//! ("typeahead") input: given a fixed candidate list and live user text, it
//! narrows candidates to case-insensitive prefix matches, tracks the
//! visibility/selection/focus lifecycle of the suggestion list, and drives
//! the keyboard-navigation protocol (tab-forward wraparound,
//! escape-to-dismiss, enter-to-select, outside-interaction dismissal,
//! re-open-on-typing).
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Binding (main.rs or embedder)                 │  ← Focus I/O, events
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and key classification            │
//! │  - Suggestion list focus protocol                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                  │
//! ┌───────────────────┐             ┌───────────────────┐
//! │ UI Layer (ui/)    │             │ Domain (domain/)  │
//! │ - Rendering       │             │ - Prefix matcher  │
//! │ - Theming         │             │ - Candidate types │
//! │ - Components      │             │ - Error types     │
//! └───────────────────┘             └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one direction per event: a raw event enters [`handle_event`],
//! triggers a state transition (possibly consulting the matcher), and yields
//! a `(render, actions)` pair the host binding executes. The core never
//! performs focus I/O itself — focus transfer is declared through
//! [`Action`] values and applied by the host.
//!
//! # Modules
//!
//! - [`app`]: Suggestion state machine with event/action model
//! - [`domain`]: Candidate types, prefix matcher, errors
//! - [`infrastructure`]: Platform utilities (data paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing with file export
//!
//! # Example
//!
//! ```
//! use typeahead::{
//!     handle_event, Action, CandidateSet, Event, Key, KeyOrigin, KeyPress,
//!     Theme, TypeaheadState,
//! };
//!
//! let candidates = CandidateSet::new(vec![
//!     "Audi".to_string(),
//!     "Alfa Romeo".to_string(),
//!     "BMW".to_string(),
//! ])?;
//! let mut state = TypeaheadState::new(candidates, Theme::default());
//!
//! // Typing narrows the candidates and opens the box.
//! handle_event(&mut state, &Event::TextChanged("a".to_string()))?;
//! assert_eq!(state.suggestions().len(), 2);
//!
//! // Tab enters the suggestion list; the host applies the focus intent.
//! let (_, actions) = handle_event(
//!     &mut state,
//!     &Event::KeyPress {
//!         origin: KeyOrigin::Field,
//!         press: KeyPress { key: Key::Tab, shift: false },
//!     },
//! )?;
//! assert!(actions.contains(&Action::FocusSuggestion(0)));
//! # Ok::<(), typeahead::TypeaheadError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{
    handle_event, Action, Direction, Event, FocusAdvance, Key, KeyOrigin, KeyPress, Phase,
    SuggestionList, TypeaheadState,
};
pub use domain::{matcher, Candidate, CandidateSet, Result, TypeaheadError};
pub use ui::{render, Theme};

use std::collections::BTreeMap;

/// Widget configuration parsed from the host's key/value settings.
///
/// The demo binary feeds this from `key=value` command-line arguments; an
/// embedder can construct it directly.
///
/// # Example
///
/// ```text
/// typeahead candidates="Audi,Alfa Romeo,BMW" theme=catppuccin-latte trace_level=debug
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidate strings, in presentation order.
    ///
    /// The widget matches against exactly this list for its whole lifetime.
    /// Default: a demo list of car makes.
    pub candidates: Vec<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            candidates: [
                "Audi",
                "Alfa Romeo",
                "BMW",
                "Fiat",
                "Ford",
                "Honda",
                "Mercedes",
                "Mini",
                "Nissan",
                "Opel",
                "Peugeot",
                "Renault",
                "Škoda",
                "Toyota",
                "Volkswagen",
                "Volvo",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `candidates`: Comma-separated string → `Vec<String>` (entries are
    ///   trimmed; empty entries are filtered; an absent or empty key falls
    ///   back to the default demo list)
    /// - `theme`: String → `Option<String>`
    /// - `theme_file`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use typeahead::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("candidates".to_string(), "Audi, BMW".to_string());
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.candidates, vec!["Audi", "BMW"]);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let candidates = config
            .get("candidates")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or_else(|| Self::default().candidates);

        Self {
            candidates,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the widget from configuration.
///
/// Loads the theme (from file, name, or default) and validates the candidate
/// list into an immutable [`CandidateSet`].
///
/// # Errors
///
/// Returns [`TypeaheadError::Config`] if the candidate list contains
/// duplicate entries. Theme loading failures fall back to the default theme
/// with a logged notice — a wrong color scheme should not take the widget
/// down.
///
/// # Example
///
/// ```
/// use typeahead::{initialize, Config};
///
/// let state = initialize(&Config::default())?;
/// assert_eq!(state.input_text(), "");
/// # Ok::<(), typeahead::TypeaheadError>(())
/// ```
pub fn initialize(config: &Config) -> Result<TypeaheadState> {
    tracing::debug!(candidates = config.candidates.len(), "initializing typeahead widget");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let candidates = CandidateSet::new(config.candidates.clone())?;
    Ok(TypeaheadState::new(candidates, theme))
}

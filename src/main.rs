//! Terminal host binding and demo entry point.
//!
//! This binary is the reference host for the widget library: it owns the
//! candidate list, the page's focus order, and the outside-interaction
//! detector, and it translates a line-based command protocol into core
//! events. The library never touches the terminal or platform focus itself —
//! everything effectful happens here.
//!
//! # Page Model
//!
//! The demo "page" contains the widget plus one mock control placed after it
//! in focus order, so default Tab traversal has somewhere to go when the
//! core defers:
//!
//! ```text
//! [ text field ] → [ suggestion 0..n ] → [ next control ]
//! ```
//!
//! # Command Protocol
//!
//! Commands are read line by line from stdin:
//!
//! - `type <text>` — set the field text (fires a text-changed event)
//! - `clear` — set the field text to empty
//! - `tab` / `shift-tab` — key press at the currently focused element
//! - `enter` / `esc` — key press at the currently focused element
//! - `click <n>` — pointer selection of suggestion `n`
//! - `outside` — pointer activity outside the widget
//! - `dump` — print the current view model as JSON
//! - `quit` — tear the widget down and exit
//!
//! # Event Mapping
//!
//! Host commands are translated to library events:
//!
//! - `type abc` → `Event::TextChanged("abc")`
//! - `tab` → `Event::KeyPress { origin, press: Tab }`
//! - `click 1` → `Event::SuggestionClicked(1)` (inside the box)
//! - `outside` → `Event::OutsideInteraction` (via the armed detector)
//!
//! Returned actions are executed in order: focus intents move the host's
//! focus marker, and `SuppressDefault` cancels the native traversal this
//! binding would otherwise emulate.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use typeahead::observability::init_tracing;
use typeahead::{
    handle_event, initialize, render, Action, Config, Event, Key, KeyOrigin, KeyPress,
    TypeaheadState,
};

/// Fallback terminal size when the environment does not say otherwise.
const DEFAULT_ROWS: usize = 24;
const DEFAULT_COLS: usize = 80;

/// Where the host's literal input focus currently sits in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostFocus {
    /// The widget's text field.
    Field,
    /// The widget's suggestion at this index.
    Suggestion(usize),
    /// The mock control the page places after the widget.
    NextControl,
}

impl HostFocus {
    /// The key-event origin the core expects for this focus position.
    ///
    /// `None` means the key press happens outside the widget entirely and is
    /// not forwarded to the core.
    fn origin(self) -> Option<KeyOrigin> {
        match self {
            Self::Field => Some(KeyOrigin::Field),
            Self::Suggestion(index) => Some(KeyOrigin::Suggestion(index)),
            Self::NextControl => None,
        }
    }
}

/// Instance-scoped outside-interaction detector.
///
/// Stands in for a document-wide pointer listener: registered when the
/// widget becomes active, deregistered on teardown, and idempotent in both
/// directions so coexisting widget instances cannot double-fire dismissals.
/// Pointer events the widget itself consumes (suggestion clicks) are routed
/// to selection by [`translate_command`] and never reach the detector.
#[derive(Debug, Default)]
struct OutsideClickDetector {
    armed: bool,
}

impl OutsideClickDetector {
    fn register(&mut self) {
        self.armed = true;
    }

    fn deregister(&mut self) {
        self.armed = false;
    }

    /// Returns the dismissal event for outside pointer activity, if armed.
    fn observe(&self) -> Option<Event> {
        self.armed.then_some(Event::OutsideInteraction)
    }
}

fn main() {
    let config = Config::from_map(&parse_args());
    init_tracing(&config);

    let mut state = match initialize(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("typeahead: {e}");
            std::process::exit(1);
        }
    };

    let mut focus = HostFocus::Field;
    let mut detector = OutsideClickDetector::default();
    detector.register();

    let (rows, cols) = terminal_size();
    draw(&state, rows, cols, focus, None);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "quit" || command == "q" {
            break;
        }

        let status = run_command(command, &mut state, &mut focus, &detector);
        draw(&state, rows, cols, focus, status.as_deref());
    }

    detector.deregister();
    print!("\u{1b}[2J\u{1b}[H");
    let _ = io::stdout().flush();
}

/// Executes one host command, returning an optional status message.
fn run_command(
    command: &str,
    state: &mut TypeaheadState,
    focus: &mut HostFocus,
    detector: &OutsideClickDetector,
) -> Option<String> {
    let event = match translate_command(command, *focus, detector) {
        Translation::Event(event) => event,
        Translation::NativeTab { backward } => {
            // A Tab outside the widget never reaches the core; the page's
            // own focus order applies directly.
            *focus = native_tab_target(*focus, backward, state.suggestions().len());
            return None;
        }
        Translation::Dump => {
            let view = state.compute_viewmodel();
            return Some(
                serde_json::to_string(&view)
                    .unwrap_or_else(|e| format!("snapshot failed: {e}")),
            );
        }
        Translation::Ignored(reason) => return Some(reason),
    };

    // Typing implies the field took literal focus before the change event.
    if matches!(event, Event::TextChanged(_)) {
        *focus = HostFocus::Field;
    }

    let (pressed_tab, backward) = match event {
        Event::KeyPress {
            press: KeyPress { key: Key::Tab, shift },
            ..
        } => (true, shift),
        _ => (false, false),
    };

    match handle_event(state, &event) {
        Ok((_render, actions)) => {
            let mut consumed = false;
            for action in actions {
                match action {
                    Action::FocusField => *focus = HostFocus::Field,
                    Action::FocusSuggestion(index) => *focus = HostFocus::Suggestion(index),
                    Action::SuppressDefault => consumed = true,
                }
            }

            if pressed_tab && !consumed {
                *focus = native_tab_target(*focus, backward, state.suggestions().len());
            }
            None
        }
        // Integration errors (stale indices) are reported, not swallowed.
        Err(e) => Some(format!("error: {e}")),
    }
}

/// Result of translating a host command.
enum Translation {
    /// Forward this event to the core.
    Event(Event),
    /// Apply native Tab traversal without involving the core.
    NativeTab { backward: bool },
    /// Print the current view model as JSON.
    Dump,
    /// Nothing to do; show the given notice.
    Ignored(String),
}

/// Maps one command line to a core event.
fn translate_command(
    command: &str,
    focus: HostFocus,
    detector: &OutsideClickDetector,
) -> Translation {
    if let Some(text) = command.strip_prefix("type ") {
        return Translation::Event(Event::TextChanged(text.to_string()));
    }
    if command == "clear" {
        return Translation::Event(Event::TextChanged(String::new()));
    }
    if command == "dump" {
        return Translation::Dump;
    }
    if let Some(index) = command.strip_prefix("click ") {
        return match index.trim().parse::<usize>() {
            // A click on a suggestion is consumed by selection and must not
            // also reach the outside-interaction detector.
            Ok(index) => Translation::Event(Event::SuggestionClicked(index)),
            Err(_) => Translation::Ignored(format!("not a suggestion index: {index}")),
        };
    }
    if command == "outside" {
        return match detector.observe() {
            Some(event) => Translation::Event(event),
            None => Translation::Ignored("outside-click detector not registered".to_string()),
        };
    }

    let press = match command {
        "tab" => KeyPress { key: Key::Tab, shift: false },
        "shift-tab" => KeyPress { key: Key::Tab, shift: true },
        "esc" => KeyPress { key: Key::Escape, shift: false },
        "enter" => KeyPress { key: Key::Enter, shift: false },
        _ => {
            return Translation::Ignored(format!(
                "unknown command: {command} (try: type <text>, tab, shift-tab, enter, esc, click <n>, outside, dump, quit)"
            ));
        }
    };

    match focus.origin() {
        Some(origin) => Translation::Event(Event::KeyPress { origin, press }),
        None if press.key == Key::Tab => Translation::NativeTab { backward: press.shift },
        None => Translation::Ignored("focus is outside the widget".to_string()),
    }
}

/// Emulates the page's native Tab traversal for presses the core deferred.
///
/// Page order is field → suggestions → next control, wrapping at the page
/// edges the way a browser would cycle through a short document.
fn native_tab_target(focus: HostFocus, backward: bool, suggestion_count: usize) -> HostFocus {
    if backward {
        match focus {
            HostFocus::Field => HostFocus::NextControl,
            HostFocus::Suggestion(index) if index > 0 => HostFocus::Suggestion(index - 1),
            HostFocus::Suggestion(_) => HostFocus::Field,
            HostFocus::NextControl if suggestion_count > 0 => {
                HostFocus::Suggestion(suggestion_count - 1)
            }
            HostFocus::NextControl => HostFocus::Field,
        }
    } else {
        match focus {
            HostFocus::Field if suggestion_count > 0 => HostFocus::Suggestion(0),
            HostFocus::Field => HostFocus::NextControl,
            HostFocus::Suggestion(index) if index + 1 < suggestion_count => {
                HostFocus::Suggestion(index + 1)
            }
            HostFocus::Suggestion(_) => HostFocus::NextControl,
            HostFocus::NextControl => HostFocus::Field,
        }
    }
}

/// Clears the screen and renders one frame plus the host chrome.
///
/// The widget gets the screen minus the three host-owned rows at the bottom
/// (mock control, status line, prompt).
fn draw(state: &TypeaheadState, rows: usize, cols: usize, focus: HostFocus, status: Option<&str>) {
    print!("\u{1b}[2J\u{1b}[H");
    render(state, rows.saturating_sub(3), cols);

    print!("\u{1b}[{};1H", rows.saturating_sub(2));
    match focus {
        HostFocus::NextControl => print!("  [ Search ] ← focused"),
        _ => print!("  [ Search ]"),
    }

    if let Some(status) = status {
        print!("\u{1b}[{};1H", rows.saturating_sub(1));
        let line: String = status.chars().take(cols.saturating_sub(1)).collect();
        print!("{line}");
    }

    print!("\u{1b}[{rows};1H> ");
    let _ = io::stdout().flush();
}

/// Parses `key=value` command-line arguments into a configuration map.
fn parse_args() -> BTreeMap<String, String> {
    std::env::args()
        .skip(1)
        .filter_map(|arg| {
            arg.split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Reads the terminal size from the environment, with fallbacks.
fn terminal_size() -> (usize, usize) {
    let rows = std::env::var("LINES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_ROWS);
    let cols = std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_COLS);
    (rows, cols)
}

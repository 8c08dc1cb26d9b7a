//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! (`update`) and rendering layer (`view`) both program against them.
//!
//! Design principle: the tracker holds the domain data; `App` adds only
//! presentation state on top of it (focus, caret, list cursor). The two
//! cursors are plain fields rather than per-focus payloads because they
//! must survive focus bounces: typing, checking the list, and resuming
//! typing keeps the caret where it was.

use crate::tracker::GoalTracker;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the domain tracker plus the transient screen state.
/// The effects layer reads this to know what to render.
#[derive(Debug, Default)]
pub struct App {
    /// Domain state: draft text and the goal list.
    pub tracker: GoalTracker,

    /// Where key events are routed.
    pub focus: Focus,

    /// Byte offset of the caret into the draft. Always on a char boundary.
    pub caret: usize,

    /// Focused row in the goal list. Meaningful only while `focus` is
    /// `List`; kept in bounds by the transition layer.
    pub cursor: usize,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Create an App with an empty tracker, input focused.
    pub fn new() -> Self {
        App::default()
    }
}

// ============================================================================
// FOCUS
// ============================================================================

/// Which sub-view receives key events.
///
/// This is input routing, not a tracker mode: the tracker itself accepts
/// any operation at any time. Invariant (held by `update`): `List` is
/// only reachable while the goal list is non-empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Keys edit the draft.
    #[default]
    Input,
    /// Keys navigate the goal list.
    List,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions (per current focus).
/// The transition function decides what each Action means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // -- draft editing (input focus) --
    /// Insert a character at the caret.
    InsertChar(char),
    /// Insert a newline at the caret (Alt+Enter).
    InsertNewline,
    /// Delete the character before the caret.
    DeleteBack,
    /// Delete the character at the caret.
    DeleteForward,
    /// Move the caret one character left.
    CaretLeft,
    /// Move the caret one character right.
    CaretRight,
    /// Move the caret to the start of the current line.
    CaretHome,
    /// Move the caret to the end of the current line.
    CaretEnd,
    /// Commit the draft as a new goal (the text field's "done" action).
    Submit,

    // -- focus routing --
    /// Move focus to the goal list.
    FocusList,
    /// Move focus back to the input.
    FocusInput,

    // -- list navigation (list focus) --
    /// Move the list cursor up.
    MoveUp,
    /// Move the list cursor down.
    MoveDown,
    /// Delete the focused goal.
    DeleteGoal,

    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================

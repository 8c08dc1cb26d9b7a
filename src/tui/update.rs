//! Pure state transitions: (App, Action) → mutated App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! The current focus decides which actions are meaningful; anything
//! unhandled is a no-op. Domain mutations go through the tracker's
//! operations; this layer owns only the caret, cursor, and focus.

use super::state::{Action, App, Focus};

/// Pure state transition function.
///
/// Dispatches on the current focus. After every transition the focus
/// invariant holds: `Focus::List` implies a non-empty goal list with
/// the cursor on a valid row.
pub fn update(app: &mut App, action: &Action) {
    match app.focus {
        Focus::Input => update_input(app, action),
        Focus::List => update_list(app, action),
    }
}

// ============================================================================
// PER-FOCUS HANDLERS
// ============================================================================

/// Input focused: edit the draft, submit, or hand focus to the list.
fn update_input(app: &mut App, action: &Action) {
    match action {
        Action::InsertChar(ch) => {
            let (draft, caret) = insert_char(app.tracker.draft(), app.caret, *ch);
            app.tracker.update_draft(draft);
            app.caret = caret;
        }
        Action::InsertNewline => {
            let (draft, caret) = insert_char(app.tracker.draft(), app.caret, '\n');
            app.tracker.update_draft(draft);
            app.caret = caret;
        }
        Action::DeleteBack => {
            if let Some((draft, caret)) = remove_before(app.tracker.draft(), app.caret) {
                app.tracker.update_draft(draft);
                app.caret = caret;
            }
        }
        Action::DeleteForward => {
            if let Some(draft) = remove_at(app.tracker.draft(), app.caret) {
                app.tracker.update_draft(draft);
            }
        }
        Action::CaretLeft => {
            if let Some(i) = prev_char_start(app.tracker.draft(), app.caret) {
                app.caret = i;
            }
        }
        Action::CaretRight => {
            let draft = app.tracker.draft();
            if let Some(ch) = draft[app.caret..].chars().next() {
                app.caret += ch.len_utf8();
            }
        }
        Action::CaretHome => {
            app.caret = line_start(app.tracker.draft(), app.caret);
        }
        Action::CaretEnd => {
            app.caret = line_end(app.tracker.draft(), app.caret);
        }
        Action::Submit => {
            // A blank draft is a silent no-op; the caret stays put so the
            // untouched draft still reads naturally.
            if app.tracker.submit_draft().is_some() {
                app.caret = 0;
            }
        }
        Action::FocusList => {
            if !app.tracker.goals().is_empty() {
                app.focus = Focus::List;
                app.cursor = app.cursor.min(app.tracker.goals().len() - 1);
            }
        }
        Action::Quit => app.should_quit = true,
        _ => {}
    }
}

/// List focused: navigate rows, delete, or return to the input.
fn update_list(app: &mut App, action: &Action) {
    match action {
        Action::MoveUp => {
            // Up from the top row returns to the input
            if app.cursor == 0 {
                app.focus = Focus::Input;
            } else {
                app.cursor -= 1;
            }
        }
        Action::MoveDown => {
            let len = app.tracker.goals().len();
            if len > 0 {
                app.cursor = (app.cursor + 1).min(len - 1);
            }
        }
        Action::DeleteGoal => {
            if let Some(goal) = app.tracker.goals().get(app.cursor) {
                let id = goal.id;
                app.tracker.delete_goal(id);
            }
            let len = app.tracker.goals().len();
            if len == 0 {
                app.focus = Focus::Input;
                app.cursor = 0;
            } else {
                app.cursor = app.cursor.min(len - 1);
            }
        }
        Action::FocusInput => app.focus = Focus::Input,
        Action::Quit => app.should_quit = true,
        _ => {}
    }
}

// ============================================================================
// DRAFT EDITING HELPERS
// ============================================================================
// Pure string math over a byte-offset caret. The caret is always on a
// char boundary; every helper preserves that.

/// Insert `ch` at the caret, returning the new draft and caret.
fn insert_char(draft: &str, caret: usize, ch: char) -> (String, usize) {
    let mut out = String::with_capacity(draft.len() + ch.len_utf8());
    out.push_str(&draft[..caret]);
    out.push(ch);
    out.push_str(&draft[caret..]);
    (out, caret + ch.len_utf8())
}

/// Byte offset where the char before the caret starts, if any.
fn prev_char_start(draft: &str, caret: usize) -> Option<usize> {
    draft[..caret].char_indices().next_back().map(|(i, _)| i)
}

/// Remove the char before the caret. None if the caret is at the start.
fn remove_before(draft: &str, caret: usize) -> Option<(String, usize)> {
    let start = prev_char_start(draft, caret)?;
    let mut out = String::with_capacity(draft.len());
    out.push_str(&draft[..start]);
    out.push_str(&draft[caret..]);
    Some((out, start))
}

/// Remove the char at the caret. None if the caret is at the end.
fn remove_at(draft: &str, caret: usize) -> Option<String> {
    let ch = draft[caret..].chars().next()?;
    let mut out = String::with_capacity(draft.len());
    out.push_str(&draft[..caret]);
    out.push_str(&draft[caret + ch.len_utf8()..]);
    Some(out)
}

/// Byte offset of the start of the line the caret is on.
fn line_start(draft: &str, caret: usize) -> usize {
    draft[..caret].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset of the end of the line the caret is on.
fn line_end(draft: &str, caret: usize) -> usize {
    caret + draft[caret..].find('\n').unwrap_or(draft.len() - caret)
}

// ============================================================================
// TESTS
// ============================================================================

//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each section of the screen has a dedicated render function; `render()`
//! lays them out top to bottom. Widget-building is pure (state in, widgets
//! out); the only effect is Frame::render_widget() which writes to the
//! terminal buffer. Scroll offsets are derived here every frame, never
//! stored: row positions are a display artifact of the current list.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{App, Focus};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(2),                                      // header
        Constraint::Length(input_card_height(app.tracker.draft())), // input card
        Constraint::Length(1),                                      // section header
        Constraint::Min(0),                                         // goals / empty state
        Constraint::Length(1),                                      // help
    ])
    .split(area);

    render_header(frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_section_header(app, frame, chunks[2]);
    if app.tracker.goals().is_empty() {
        render_empty_state(frame, chunks[3]);
    } else {
        render_goal_list(app, frame, chunks[3]);
    }
    render_help(app, frame, chunks[4]);
}

// ============================================================================
// HEADER
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Goal Tracker", theme::STYLE_TITLE)),
        Line::from(Span::styled(
            "Turn dreams into achievements",
            theme::STYLE_SUBTITLE,
        )),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}

// ============================================================================
// INPUT CARD
// ============================================================================

/// Card height: draft line count capped at 2..=4 content rows, plus borders.
fn input_card_height(draft: &str) -> u16 {
    let rows = draft.split('\n').count().clamp(2, 4) as u16;
    rows + 2
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Input;
    let border_style = if focused {
        theme::STYLE_ACCENT
    } else {
        theme::STYLE_DIM
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Add Goal ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let draft = app.tracker.draft();
    if draft.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "What's your next goal?",
            theme::STYLE_PLACEHOLDER,
        ));
        frame.render_widget(placeholder, inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    // Scroll so the caret stays inside the card.
    let (caret_line, caret_col) = caret_position(draft, app.caret);
    let scroll_y = caret_line.saturating_sub(inner.height as usize - 1);
    let scroll_x = caret_col.saturating_sub(inner.width as usize - 1);

    let lines: Vec<Line> = draft.split('\n').map(|l| Line::from(l.to_string())).collect();
    let text = Paragraph::new(lines).scroll((scroll_y as u16, scroll_x as u16));
    frame.render_widget(text, inner);

    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + (caret_col - scroll_x) as u16,
            inner.y + (caret_line - scroll_y) as u16,
        ));
    }
}

/// The caret's (line, column) in the draft. Columns count chars, which
/// matches cells for everything narrow; wide glyphs may drift a cell.
fn caret_position(draft: &str, caret: usize) -> (usize, usize) {
    let before = &draft[..caret];
    let line = before.matches('\n').count();
    let col = match before.rfind('\n') {
        Some(i) => before[i + 1..].chars().count(),
        None => before.chars().count(),
    };
    (line, col)
}

// ============================================================================
// SECTION HEADER
// ============================================================================

fn render_section_header(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.tracker.goals().len();
    let mut spans = vec![Span::styled("Your Goals", theme::STYLE_SECTION)];
    if count > 0 {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", count), theme::STYLE_BADGE));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// GOAL LIST
// ============================================================================

fn render_goal_list(app: &App, frame: &mut Frame, area: Rect) {
    let goals = app.tracker.goals();
    let list_focused = app.focus == Focus::List;

    // Rows are variable-height (multi-line goals), so track where the
    // focused row's lines land to derive the scroll offset.
    let mut lines: Vec<Line> = Vec::new();
    let mut focused_rows = (0usize, 0usize);
    for (i, goal) in goals.iter().enumerate() {
        let is_cursor = list_focused && i == app.cursor;
        let start = lines.len();
        for (j, text_line) in goal.text.split('\n').enumerate() {
            let mut spans = vec![Span::styled("▌ ", theme::STYLE_ACCENT)];
            if j == 0 {
                spans.push(Span::styled(format!("{:>2}. ", i + 1), theme::STYLE_ACCENT));
            } else {
                spans.push(Span::raw("    "));
            }
            spans.push(Span::styled(text_line.to_string(), theme::STYLE_GOAL));
            if j == 0 {
                spans.push(Span::raw("  "));
                spans.push(Span::styled("✕", theme::STYLE_DIM));
            }
            let line = if is_cursor {
                Line::from(spans).style(theme::STYLE_CURSOR)
            } else {
                Line::from(spans)
            };
            lines.push(line);
        }
        if i == app.cursor {
            focused_rows = (start, lines.len());
        }
    }

    // Keep the focused row fully visible.
    let height = area.height as usize;
    let scroll = if list_focused && height > 0 {
        let (start, end) = focused_rows;
        end.saturating_sub(height).min(start)
    } else {
        0
    };

    let list = Paragraph::new(lines).scroll((scroll as u16, 0));
    frame.render_widget(list, area);
}

// ============================================================================
// EMPTY STATE
// ============================================================================

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("✎", theme::STYLE_PLACEHOLDER)),
        Line::from(""),
        Line::from(Span::styled("No goals yet!", theme::STYLE_SECTION)),
        Line::from(Span::styled(
            "Start by adding your first goal above",
            theme::STYLE_HINT,
        )),
    ];
    let empty = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(empty, area);
}

// ============================================================================
// HELP
// ============================================================================

/// Help line showing the keybindings for the current focus.
fn render_help(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = match app.focus {
        Focus::Input => "[Enter] add  [Alt+Enter] newline  [Tab] goals  [^C] quit",
        Focus::List => "[j/k] move  [d] delete  [i] input  [q] quit",
    };
    frame.render_widget(Paragraph::new(Span::styled(help_text, theme::STYLE_HELP)), area);
}

// ============================================================================
// TESTS
// ============================================================================

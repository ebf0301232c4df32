//! Shared rendering utilities.
//!
//! Components draw into a [`Canvas`], an ANSI string buffer with absolute
//! cursor positioning, so a whole frame can be printed at once or inspected
//! in tests.

use crate::ui::theme::Theme;
use std::fmt::Write as _;

/// ANSI frame buffer.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed `row`/`col`.
    ///
    /// Emits `\u{1b}[{row};{col}H`, so later text starts at that cell.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio::ui::helpers::Canvas;
    ///
    /// let mut canvas = Canvas::new();
    /// canvas.move_to(2, 5);
    /// canvas.put("hi");
    /// assert_eq!(canvas.finish(), "\u{1b}[2;5Hhi");
    /// ```
    pub fn move_to(&mut self, row: usize, col: usize) {
        let _ = write!(self.buf, "\u{1b}[{row};{col}H");
    }

    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    pub fn fg(&mut self, hex: &str) {
        self.buf.push_str(&Theme::fg(hex));
    }

    pub fn bg(&mut self, hex: &str) {
        self.buf.push_str(&Theme::bg(hex));
    }

    pub fn bold(&mut self) {
        self.buf.push_str(Theme::bold());
    }

    pub fn reset(&mut self) {
        self.buf.push_str(Theme::reset());
    }

    /// The raw frame, escape sequences included.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Display width in terminal cells, counting one cell per `char`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` cells, ending with `…` when shortened.
///
/// # Example
///
/// ```rust
/// use folio::ui::helpers::truncate;
///
/// assert_eq!(truncate("Weather Dashboard", 8), "Weather…");
/// assert_eq!(truncate("Weather", 8), "Weather");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap to lines of at most `max` cells. Words longer than a line
/// are truncated.
#[must_use]
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, max);
        if line.is_empty() {
            line = word;
        } else if width(&line) + 1 + width(&word) <= max {
            line.push(' ');
            line.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut line));
            line = word;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Draws `text` with the character `ranges` highlighted.
///
/// # Parameters
///
/// * `canvas` - Frame buffer to draw into
/// * `text` - The text to draw
/// * `ranges` - Character index ranges `(start, end)`, exclusive end
/// * `theme` - Palette supplying `match_highlight_fg` and `match_highlight_bg`
/// * `is_selected` - Whether the row is selected
///
/// # Character Indices
///
/// Ranges count `char`s, not bytes. Ranges past the end of `text` are
/// clamped; overlapping or reversed ranges are skipped.
///
/// # Selection Behavior
///
/// On a selected row, highlights are skipped so the selection colors win.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.put(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        canvas.put(&chars[current_pos..start].iter().collect::<String>());
        canvas.fg(&theme.colors.match_highlight_fg);
        canvas.bg(&theme.colors.match_highlight_bg);
        canvas.put(&chars[start..end].iter().collect::<String>());
        canvas.reset();
        canvas.bold();
        canvas.fg(&theme.colors.header_fg);

        current_pos = end;
    }

    if current_pos < chars.len() {
        canvas.put(&chars[current_pos..].iter().collect::<String>());
    }
}

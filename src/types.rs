/// A selection within a text buffer.
///
/// Offsets are zero-based and counted in `char`s, not bytes. `start == end` is a bare caret; otherwise `[start, end)` is the
/// range an insertion replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// The start of the selection (inclusive).
    pub start: usize,
    /// The end of the selection (exclusive).
    pub end: usize,
}

impl Selection {
    /// A collapsed selection at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

/// Horizontal caret movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// What a resolved key does to the text buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert text, replacing the selection. May be empty.
    InsertText(String),
    /// Move the caret over one grapheme cluster, collapsing any range.
    MoveCaret(Direction),
    /// Backspace.
    DeleteBackward,
    /// Delete.
    DeleteForward,
    /// Select the whole buffer.
    SelectAll,
    /// The key has no effect on the buffer.
    NoOp,
}

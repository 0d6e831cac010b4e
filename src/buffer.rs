//! Cursor-aware text storage.
//!
//! Every operation updates content and selection together, so a caller
//! never observes one without the other. Offsets count `char`s, so text
//! inserted at the caret is removed again by one backspace per char. Caret
//! movement steps over whole grapheme clusters and never lands inside one
//! of its own accord.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Action, Direction, Selection};

/// Content plus selection, as handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSnapshot {
    pub content: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

/// The edited text and its selection.
///
/// Invariant: `0 <= selection.start <= selection.end <= len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    selection: Selection,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding `text` with the caret at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let end = char_len(&content);
        Self {
            content,
            selection: Selection::caret(end),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        char_len(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            content: self.content.clone(),
            selection_start: self.selection.start,
            selection_end: self.selection.end,
        }
    }

    pub fn selected_text(&self) -> &str {
        let (a, b) = self.byte_range(self.selection);
        &self.content[a..b]
    }

    /// Sets the selection, clamping both ends into the buffer and ordering
    /// them.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        let (start, end) = (start.min(len), end.min(len));
        self.selection = Selection {
            start: start.min(end),
            end: start.max(end),
        };
    }

    /// Replaces the selection with `text` and collapses the caret after it.
    pub fn insert_replacing_selection(&mut self, text: &str) {
        let (a, b) = self.byte_range(self.selection);
        self.content.replace_range(a..b, text);
        self.selection = Selection::caret(self.selection.start + char_len(text));
    }

    /// Backspace: removes the selected range, or the char before the
    /// caret. Does nothing at position 0.
    pub fn delete_backward(&mut self) {
        if !self.selection.is_caret() {
            self.remove_selection();
            return;
        }
        let caret = self.selection.start;
        if caret == 0 {
            return;
        }
        self.remove(Selection {
            start: caret - 1,
            end: caret,
        });
    }

    /// Delete: removes the selected range, or the char at the caret.
    /// Does nothing at the end of the buffer.
    pub fn delete_forward(&mut self) {
        if !self.selection.is_caret() {
            self.remove_selection();
            return;
        }
        let caret = self.selection.start;
        if caret >= self.len() {
            return;
        }
        self.remove(Selection {
            start: caret,
            end: caret + 1,
        });
    }

    /// Moves the caret over one grapheme cluster from the current selection
    /// start, clamped to the buffer. A range collapses to the new position.
    pub fn move_caret(&mut self, direction: Direction) {
        let from = self.selection.start;
        let at = self.byte_offset(from);
        let to = match direction {
            Direction::Left => {
                let head = &self.content[..at];
                let step = head.graphemes(true).next_back().map_or(0, char_len);
                from - step
            }
            Direction::Right => {
                let tail = &self.content[at..];
                from + tail.graphemes(true).next().map_or(0, char_len)
            }
        };
        self.selection = Selection::caret(to);
    }

    pub fn select_all(&mut self) {
        self.selection = Selection {
            start: 0,
            end: self.len(),
        };
    }

    /// Applies a resolved action. Returns true if content or selection
    /// changed.
    pub fn apply(&mut self, action: &Action) -> bool {
        let before = (self.content.len(), self.selection);
        match action {
            Action::InsertText(text) => {
                if text.is_empty() && self.selection.is_caret() {
                    return false;
                }
                self.insert_replacing_selection(text);
                return true;
            }
            Action::MoveCaret(direction) => self.move_caret(*direction),
            Action::DeleteBackward => self.delete_backward(),
            Action::DeleteForward => self.delete_forward(),
            Action::SelectAll => self.select_all(),
            Action::NoOp => return false,
        }
        before != (self.content.len(), self.selection)
    }

    fn remove_selection(&mut self) {
        let range = self.selection;
        self.remove(range);
    }

    fn remove(&mut self, range: Selection) {
        let (a, b) = self.byte_range(range);
        self.content.replace_range(a..b, "");
        let caret = range.start.min(self.len());
        self.selection = Selection::caret(caret);
    }

    fn byte_range(&self, range: Selection) -> (usize, usize) {
        let a = self.byte_offset(range.start);
        let b = self.byte_offset(range.end).max(a);
        (a, b)
    }

    fn byte_offset(&self, pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(pos)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

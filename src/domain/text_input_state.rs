//! Single-line text field state used by the member and case id forms.

/// Maximum accepted length for a member name or case id.
pub const MAX_INPUT_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInputState {
    text: String,
    /// Cursor position (character index, not byte).
    cursor_position: usize,
}

impl TextInputState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the cursor.
    /// Returns false if the input would exceed the maximum length.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}

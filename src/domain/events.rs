#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    Resized,
    QuitRequested,
    InputKey(KeyInput),
}

/// A normalized key press. Named keys use lowercase names ("enter", "esc",
/// "backspace", "left", "right", "up", "down"); printable keys carry the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, ctrl: bool) -> Self {
        Self {
            key: key.into(),
            ctrl,
        }
    }

    /// The character for printable single-character keys.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if !self.ctrl => Some(ch),
            _ => None,
        }
    }
}

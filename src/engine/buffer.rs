use crate::layout::Key;

/// The session's typed text plus caps state. Single writer; mutated only
/// by committed keys or accepted suggestions.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    text: String,
    caps: bool,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caps(&self) -> bool {
        self.caps
    }

    /// Last whitespace-delimited token, if any. This is the suggestion
    /// query key.
    pub fn last_token(&self) -> Option<&str> {
        self.text.split_whitespace().last()
    }

    /// Applies one committed key.
    pub fn apply(&mut self, key: Key) {
        match key {
            Key::Space => self.text.push(' '),
            // Delete on an empty buffer is a valid no-op, not an error.
            Key::Delete => {
                self.text.pop();
            }
            Key::Shift => self.caps = !self.caps,
            Key::Char(c) => {
                if self.caps && c.is_alphabetic() {
                    self.text.extend(c.to_uppercase());
                } else {
                    self.text.extend(c.to_lowercase());
                }
            }
            Key::Blank => {}
        }
    }

    /// Replaces the last token with `word` plus a trailing space,
    /// re-joining the preceding tokens with single spaces. An empty
    /// buffer becomes `word + " "`.
    pub fn apply_suggestion(&mut self, word: &str) {
        let mut tokens: Vec<&str> = self.text.split_whitespace().collect();
        tokens.pop();

        let mut out = tokens.join(" ");
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        out.push(' ');
        self.text = out;
    }
}

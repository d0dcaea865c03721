use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A single addressable key on either grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Literal character key.
    Char(char),
    /// Toggles caps state; does not touch the buffer.
    Shift,
    /// Appends a single space.
    Space,
    /// Removes the last character.
    Delete,
    /// Pad filler cell. Never selectable, never committed.
    Blank,
}

impl Key {
    /// Legend printed on the key cap. Blank cells render empty.
    pub fn legend(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Shift => "SHIFT".to_string(),
            Key::Space => "SPACE".to_string(),
            Key::Delete => "DEL".to_string(),
            Key::Blank => String::new(),
        }
    }
}

/// Ordered rows of keys. Immutable after construction; row lengths may
/// differ (the main grid's bottom row has 3 wide keys).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLayout {
    rows: Vec<Vec<Key>>,
}

impl KeyLayout {
    pub fn from_rows(rows: Vec<Vec<Key>>) -> Self {
        Self { rows }
    }

    /// The fixed main grid: three 10-key QWERTY rows (Spanish, with ñ)
    /// plus a control row.
    pub fn qwerty() -> Self {
        let chars = |s: &str| s.chars().map(Key::Char).collect::<Vec<_>>();
        Self {
            rows: vec![
                chars("qwertyuiop"),
                chars("asdfghjklñ"),
                chars("zxcvbnm,.;"),
                vec![Key::Shift, Key::Space, Key::Delete],
            ],
        }
    }

    /// The fixed numeric pad: 4 rows of 3.
    pub fn numpad() -> Self {
        let chars = |s: &str| s.chars().map(Key::Char).collect::<Vec<_>>();
        Self {
            rows: vec![
                chars("789"),
                chars("456"),
                chars("123"),
                chars("¿0?"),
            ],
        }
    }

    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn key_at(&self, row: usize, col: usize) -> Option<Key> {
        self.rows.get(row)?.get(col).copied()
    }
}

/// CLI-addressable grids.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum LayoutKind {
    Qwerty,
    Numpad,
}

impl LayoutKind {
    pub fn build(&self) -> KeyLayout {
        match self {
            Self::Qwerty => KeyLayout::qwerty(),
            Self::Numpad => KeyLayout::numpad(),
        }
    }
}

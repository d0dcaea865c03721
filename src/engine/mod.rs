pub mod buffer;
pub mod trigger;

pub use self::buffer::TextBuffer;
pub use self::trigger::EdgeTrigger;

use tracing::debug;

use crate::config::GeometryParams;
use crate::geometry::{KeyGrid, Point};
use crate::input::GestureSample;
use crate::layout::{Key, KeyLayout};
use crate::suggest::Suggester;

/// The key currently under the tracked fingertip, not yet committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    None,
    Main { row: usize, col: usize },
    Pad { row: usize, col: usize },
}

/// Output events emitted on commit. The audio collaborator consumes
/// these fire-and-forget; the engine never waits on playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    KeyCommitted(Key),
    SuggestionApplied(String),
}

/// Per-tick selection state machine: position sample in, hover update,
/// edge-detected commit, event out.
pub struct KeyboardEngine {
    main_layout: KeyLayout,
    pad_layout: KeyLayout,
    main_grid: KeyGrid,
    pad_grid: KeyGrid,
    buffer: TextBuffer,
    target: SelectionTarget,
    trigger: EdgeTrigger,
    suggester: Suggester,
}

impl KeyboardEngine {
    pub fn new(params: &GeometryParams, suggester: Suggester) -> Self {
        Self::with_layouts(KeyLayout::qwerty(), KeyLayout::numpad(), params, suggester)
    }

    pub fn with_layouts(
        main_layout: KeyLayout,
        pad_layout: KeyLayout,
        params: &GeometryParams,
        suggester: Suggester,
    ) -> Self {
        let main_grid = KeyGrid::compute(&main_layout, params.main_bounds());
        let pad_grid = KeyGrid::compute(&pad_layout, params.pad_bounds());
        Self {
            main_layout,
            pad_layout,
            main_grid,
            pad_grid,
            buffer: TextBuffer::new(),
            target: SelectionTarget::None,
            trigger: EdgeTrigger::new(),
            suggester,
        }
    }

    /// Maps a fingertip position to the key under it, if any.
    ///
    /// Scans the main grid row-major, then the pad grid row-major; the
    /// first containing region wins. A pad hit on a blank filler cell
    /// absorbs the point without selecting anything.
    pub fn resolve(&self, point: Option<Point>) -> SelectionTarget {
        let Some(p) = point else {
            return SelectionTarget::None;
        };

        if let Some((row, col)) = self.main_grid.locate(p) {
            return SelectionTarget::Main { row, col };
        }

        if let Some((row, col)) = self.pad_grid.locate(p) {
            if self.pad_layout.key_at(row, col) != Some(Key::Blank) {
                return SelectionTarget::Pad { row, col };
            }
        }

        SelectionTarget::None
    }

    /// Runs one loop iteration: refresh the hover target from the sample,
    /// then commit if the confirmation gesture just closed.
    pub fn tick(&mut self, sample: GestureSample) -> Option<EngineEvent> {
        self.target = self.resolve(sample.point);
        if self.trigger.update(sample.fist) {
            return self.commit();
        }
        None
    }

    /// Commits the hovered key. No-op when nothing is hovered.
    pub fn commit(&mut self) -> Option<EngineEvent> {
        let key = match self.target {
            SelectionTarget::None => return None,
            SelectionTarget::Main { row, col } => self.main_layout.key_at(row, col)?,
            SelectionTarget::Pad { row, col } => self.pad_layout.key_at(row, col)?,
        };
        debug!(key = %key.legend(), "key committed");
        self.buffer.apply(key);
        Some(EngineEvent::KeyCommitted(key))
    }

    /// Accepts suggestion slot `index` from the current suggestion set.
    pub fn commit_suggestion(&mut self, index: usize) -> Option<EngineEvent> {
        let word = self.suggestions().into_iter().nth(index)?;
        debug!(word = %word, "suggestion applied");
        self.buffer.apply_suggestion(&word);
        Some(EngineEvent::SuggestionApplied(word))
    }

    /// Ranked completions for the buffer's last token; recomputed on
    /// demand, never cached across buffer mutations.
    pub fn suggestions(&self) -> Vec<String> {
        self.suggester.suggestions(self.buffer.text())
    }

    pub fn target(&self) -> SelectionTarget {
        self.target
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn caps(&self) -> bool {
        self.buffer.caps()
    }

    pub fn main_grid(&self) -> &KeyGrid {
        &self.main_grid
    }

    pub fn pad_grid(&self) -> &KeyGrid {
        &self.pad_grid
    }

    pub fn main_layout(&self) -> &KeyLayout {
        &self.main_layout
    }

    pub fn pad_layout(&self) -> &KeyLayout {
        &self.pad_layout
    }
}

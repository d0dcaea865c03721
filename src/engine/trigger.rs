/// Rising-edge detector over the confirmation gesture level.
///
/// A closed fist (or held click) arrives as a level, one sample per tick.
/// Commits must fire once per gesture, so only the false→true transition
/// counts; a fist held across many ticks commits exactly once.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeTrigger {
    prev: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one level sample. Returns true exactly on a rising edge.
    pub fn update(&mut self, level: bool) -> bool {
        let fired = level && !self.prev;
        self.prev = level;
        fired
    }
}

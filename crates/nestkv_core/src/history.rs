//! Per-variable version history.

/// A single frame in a variable's version history.
///
/// The explicit `Cleared` variant distinguishes "explicitly unset" from
/// "never set" without reserving a sentinel string: the literal text
/// `"UNSET"` is an ordinary storable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionFrame {
    /// The variable holds a value.
    Value(String),
    /// The variable was explicitly cleared.
    Cleared,
}

impl VersionFrame {
    /// Returns the held value, or `None` for a cleared frame.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            VersionFrame::Value(v) => Some(v),
            VersionFrame::Cleared => None,
        }
    }
}

/// Version history for one variable.
///
/// A stack of frames, most recent on top. Each open transaction scope
/// that writes the variable contributes at most one frame; outside any
/// scope the history holds at most one frame. Histories are created
/// lazily on first write and kept in the variable map even when empty,
/// so an undone creation reads as absent without losing the slot.
#[derive(Debug, Default)]
pub struct VersionHistory {
    frames: Vec<VersionFrame>,
}

impl VersionHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the top frame, if any.
    #[must_use]
    pub fn top(&self) -> Option<&VersionFrame> {
        self.frames.last()
    }

    /// Returns the currently visible value.
    ///
    /// `None` means the variable reads as absent: either the history is
    /// empty or its top frame is `Cleared`.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.top().and_then(VersionFrame::value)
    }

    /// Pushes a frame on top of the history.
    pub fn push(&mut self, frame: VersionFrame) {
        self.frames.push(frame);
    }

    /// Pops the top frame.
    pub fn pop(&mut self) -> Option<VersionFrame> {
        self.frames.pop()
    }

    /// Replaces the top frame, returning the previous one.
    ///
    /// With an empty history this is a plain push.
    pub fn replace_top(&mut self, frame: VersionFrame) -> Option<VersionFrame> {
        let previous = self.frames.pop();
        self.frames.push(frame);
        previous
    }

    /// Collapses the history to its top frame alone.
    ///
    /// No-op on an empty history.
    pub fn flatten(&mut self) {
        if let Some(top) = self.frames.pop() {
            self.frames.clear();
            self.frames.push(top);
        }
    }

    /// Number of frames.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Whether the history has no frames at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_reads_as_absent() {
        let history = VersionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
    }

    #[test]
    fn push_makes_value_current() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("10".to_string()));
        assert_eq!(history.current(), Some("10"));
        assert_eq!(history.depth(), 1);
    }

    #[test]
    fn cleared_top_reads_as_absent() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("10".to_string()));
        history.push(VersionFrame::Cleared);
        assert_eq!(history.current(), None);
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn pop_reveals_previous_frame() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("10".to_string()));
        history.push(VersionFrame::Value("20".to_string()));

        let popped = history.pop();
        assert_eq!(popped, Some(VersionFrame::Value("20".to_string())));
        assert_eq!(history.current(), Some("10"));
    }

    #[test]
    fn replace_top_keeps_depth() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("10".to_string()));
        history.push(VersionFrame::Value("20".to_string()));

        let previous = history.replace_top(VersionFrame::Value("30".to_string()));
        assert_eq!(previous, Some(VersionFrame::Value("20".to_string())));
        assert_eq!(history.depth(), 2);
        assert_eq!(history.current(), Some("30"));
    }

    #[test]
    fn replace_top_on_empty_is_push() {
        let mut history = VersionHistory::new();
        let previous = history.replace_top(VersionFrame::Cleared);
        assert_eq!(previous, None);
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current(), None);
    }

    #[test]
    fn flatten_keeps_only_top() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("10".to_string()));
        history.push(VersionFrame::Value("20".to_string()));
        history.push(VersionFrame::Value("30".to_string()));

        history.flatten();
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current(), Some("30"));
    }

    #[test]
    fn flatten_preserves_cleared_top() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("10".to_string()));
        history.push(VersionFrame::Cleared);

        history.flatten();
        assert_eq!(history.depth(), 1);
        assert_eq!(history.top(), Some(&VersionFrame::Cleared));
        assert_eq!(history.current(), None);
    }

    #[test]
    fn literal_unset_text_is_an_ordinary_value() {
        let mut history = VersionHistory::new();
        history.push(VersionFrame::Value("UNSET".to_string()));
        assert_eq!(history.current(), Some("UNSET"));
    }
}

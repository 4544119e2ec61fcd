//! Selective recording states
//!
//! With selective recording enabled every node can be shown on the stream,
//! on the recording, or on both. Clicking the node's badge walks
//! Both -> RecordingOnly -> StreamOnly -> Both.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingMode {
    Both,
    StreamOnly,
    RecordingOnly,
}

impl RecordingMode {
    /// Classify a `(stream_visible, recording_visible)` pair
    ///
    /// Hidden on both channels is not a mode of its own and cycles like
    /// `RecordingOnly`.
    pub fn from_flags(stream_visible: bool, recording_visible: bool) -> Self {
        match (stream_visible, recording_visible) {
            (true, true) => RecordingMode::Both,
            (true, false) => RecordingMode::StreamOnly,
            (false, _) => RecordingMode::RecordingOnly,
        }
    }

    /// Flags as `(stream_visible, recording_visible)`
    pub fn flags(self) -> (bool, bool) {
        match self {
            RecordingMode::Both => (true, true),
            RecordingMode::StreamOnly => (true, false),
            RecordingMode::RecordingOnly => (false, true),
        }
    }

    pub fn next(self) -> Self {
        match self {
            RecordingMode::Both => RecordingMode::RecordingOnly,
            RecordingMode::RecordingOnly => RecordingMode::StreamOnly,
            RecordingMode::StreamOnly => RecordingMode::Both,
        }
    }

    /// Badge icon class shown next to the node
    pub fn icon(self) -> &'static str {
        match self {
            RecordingMode::Both => "icon-smart-record",
            RecordingMode::StreamOnly => "icon-broadcast",
            RecordingMode::RecordingOnly => "icon-studio",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            RecordingMode::Both => "Visible on both Stream and Recording",
            RecordingMode::StreamOnly => "Only visible on Stream",
            RecordingMode::RecordingOnly => "Only visible on Recording",
        }
    }
}

/// Advance a flag pair one step through the cycle
pub fn cycle_flags(stream_visible: bool, recording_visible: bool) -> (bool, bool) {
    RecordingMode::from_flags(stream_visible, recording_visible)
        .next()
        .flags()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(RecordingMode::from_flags(true, true), RecordingMode::Both);
        assert_eq!(RecordingMode::from_flags(true, false), RecordingMode::StreamOnly);
        assert_eq!(RecordingMode::from_flags(false, true), RecordingMode::RecordingOnly);
        assert_eq!(RecordingMode::from_flags(false, false), RecordingMode::RecordingOnly);
    }

    #[test]
    fn test_cycle_order() {
        let mut mode = RecordingMode::Both;
        mode = mode.next();
        assert_eq!(mode, RecordingMode::RecordingOnly);
        mode = mode.next();
        assert_eq!(mode, RecordingMode::StreamOnly);
        mode = mode.next();
        assert_eq!(mode, RecordingMode::Both);
    }

    #[test]
    fn test_three_cycles_return_to_start() {
        for start in [(true, true), (true, false), (false, true)] {
            let mut flags = start;
            for _ in 0..3 {
                flags = cycle_flags(flags.0, flags.1);
            }
            assert_eq!(flags, start);
        }
    }

    #[test]
    fn test_hidden_everywhere_joins_the_cycle() {
        let first = cycle_flags(false, false);
        assert_eq!(first, (true, false));

        let mut flags = first;
        for _ in 0..3 {
            flags = cycle_flags(flags.0, flags.1);
        }
        assert_eq!(flags, first);
    }

    #[test]
    fn test_flags_round_trip_modes() {
        for mode in [
            RecordingMode::Both,
            RecordingMode::StreamOnly,
            RecordingMode::RecordingOnly,
        ] {
            let (stream, recording) = mode.flags();
            assert_eq!(RecordingMode::from_flags(stream, recording), mode);
        }
    }

    #[test]
    fn test_badges() {
        assert_eq!(RecordingMode::Both.icon(), "icon-smart-record");
        assert_eq!(RecordingMode::StreamOnly.tooltip(), "Only visible on Stream");
        assert_eq!(RecordingMode::RecordingOnly.icon(), "icon-studio");
    }
}

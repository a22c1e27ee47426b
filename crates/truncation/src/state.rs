use std::fmt;

/// Class placed on the toggle element while the truncated view is shown.
pub const PARTIAL_MARKER: &str = "text-state-partial";
/// Class placed on the toggle element while the full view is shown.
pub const FULL_MARKER: &str = "text-state-full";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayState {
    #[default]
    Partial,
    Full,
}

impl DisplayState {
    pub fn toggled(self) -> Self {
        match self {
            DisplayState::Partial => DisplayState::Full,
            DisplayState::Full => DisplayState::Partial,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            DisplayState::Partial => PARTIAL_MARKER,
            DisplayState::Full => FULL_MARKER,
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            PARTIAL_MARKER => Some(DisplayState::Partial),
            FULL_MARKER => Some(DisplayState::Full),
            _ => None,
        }
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayState::Partial => "partial",
            DisplayState::Full => "full",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_partial() {
        assert_eq!(DisplayState::default(), DisplayState::Partial);
    }

    #[test]
    fn toggled_flips_and_marker_follows() {
        assert_eq!(DisplayState::Partial.toggled(), DisplayState::Full);
        assert_eq!(DisplayState::Full.toggled(), DisplayState::Partial);
        for state in [DisplayState::Partial, DisplayState::Full] {
            assert_eq!(DisplayState::from_marker(state.marker()), Some(state));
        }
        assert_eq!(DisplayState::from_marker("text-state-other"), None);
    }
}

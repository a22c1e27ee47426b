use crate::cut::{TruncationOptions, truncate_markup};
use crate::state::DisplayState;

/// Two-state view over one captured piece of markup.
///
/// The full markup is captured once and never changes. The truncated view is derived
/// from it at construction and again on every switch back to [`DisplayState::Partial`].
#[derive(Clone, Debug)]
pub struct TruncationController {
    full_markup: Box<str>,
    split_offset: usize,
    options: TruncationOptions,
    state: DisplayState,
    truncated_markup: String,
}

impl TruncationController {
    pub fn new(full_markup: impl Into<Box<str>>, split_offset: usize) -> Self {
        Self::with_options(full_markup, split_offset, TruncationOptions::default())
    }

    pub fn with_options(
        full_markup: impl Into<Box<str>>,
        split_offset: usize,
        options: TruncationOptions,
    ) -> Self {
        let full_markup = full_markup.into();
        let truncated_markup = truncate_markup(&full_markup, split_offset, options);
        Self {
            full_markup,
            split_offset,
            options,
            state: DisplayState::Partial,
            truncated_markup,
        }
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Class name reflecting the current state.
    pub fn marker(&self) -> &'static str {
        self.state.marker()
    }

    pub fn split_offset(&self) -> usize {
        self.split_offset
    }

    pub fn options(&self) -> TruncationOptions {
        self.options
    }

    pub fn full_markup(&self) -> &str {
        &self.full_markup
    }

    /// Last derived truncated view; kept across a switch to full.
    pub fn truncated_markup(&self) -> &str {
        &self.truncated_markup
    }

    /// Content to render for the current state.
    pub fn displayed(&self) -> &str {
        match self.state {
            DisplayState::Partial => self.truncated_markup.as_str(),
            DisplayState::Full => &*self.full_markup,
        }
    }

    /// Whether the truncated view differs from the full markup at all.
    pub fn is_truncated(&self) -> bool {
        *self.truncated_markup != *self.full_markup
    }

    /// Advances the state machine by exactly one step and returns the new state.
    pub fn toggle(&mut self) -> DisplayState {
        self.state = match self.state {
            DisplayState::Partial => DisplayState::Full,
            DisplayState::Full => {
                self.truncated_markup =
                    truncate_markup(&self.full_markup, self.split_offset, self.options);
                DisplayState::Partial
            }
        };
        log::debug!(
            target: "truncation.state",
            "toggled to {} ({} bytes displayed)",
            self.state,
            self.displayed().len()
        );
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<p>Hello <b>world, this is bold</b> and more</p>";

    #[test]
    fn starts_partial_with_truncated_view() {
        let controller = TruncationController::new(SAMPLE, 19);
        assert_eq!(controller.state(), DisplayState::Partial);
        assert_eq!(controller.marker(), "text-state-partial");
        assert_eq!(controller.displayed(), "<p>Hello <b>world,</b></p>");
        assert!(controller.is_truncated());
    }

    #[test]
    fn full_view_is_byte_identical() {
        let mut controller = TruncationController::new(SAMPLE, 19);
        assert_eq!(controller.toggle(), DisplayState::Full);
        assert_eq!(controller.displayed(), SAMPLE);
        assert_eq!(controller.marker(), "text-state-full");
    }

    #[test]
    fn repeated_round_trips_do_not_drift() {
        let mut controller = TruncationController::new(SAMPLE, 25);
        let first = controller.displayed().to_string();
        for _ in 0..3 {
            controller.toggle();
            assert_eq!(controller.displayed(), SAMPLE);
            controller.toggle();
            assert_eq!(controller.displayed(), first);
        }
        assert_eq!(controller.full_markup(), SAMPLE);
    }

    #[test]
    fn degenerate_offset_gives_empty_partial() {
        let mut controller = TruncationController::new("Pneumonoultramicroscopic", 0);
        assert_eq!(controller.displayed(), "");
        controller.toggle();
        assert_eq!(controller.displayed(), "Pneumonoultramicroscopic");
    }

    #[test]
    fn is_truncated_compares_against_full_markup() {
        // Only the trailing space is dropped, but that still differs.
        let controller = TruncationController::new("<p>short</p> ", 100);
        assert_eq!(controller.displayed(), "<p>short</p>");
        assert!(controller.is_truncated());
        let exact = TruncationController::new("", 100);
        assert!(!exact.is_truncated());
    }

    #[test]
    fn options_are_kept_for_recomputation() {
        let options = TruncationOptions {
            balance: markup::BalanceOptions::ignore_ascii_case(),
        };
        let mut controller =
            TruncationController::with_options("<P>one</p> <B>two three</B>", 17, options);
        assert_eq!(controller.displayed(), "<P>one</p> <B>two</B>");
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.displayed(), "<P>one</p> <B>two</B>");
        assert_eq!(controller.options(), options);
        assert_eq!(controller.split_offset(), 17);
    }
}

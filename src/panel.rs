//! Result panel modeled as an explicit state machine.
//!
//! The panel is one owning handle over a closed set of states (hidden,
//! loading, success, error); the rendering layer observes [`Panel::state`]
//! to draw whichever one is current, instead of mutating shared view state
//! in place.

/// What the panel is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Not shown.
    #[default]
    Hidden,
    /// A request is in flight for the captured selection.
    Loading { text: String },
    /// The normalized explanation, alongside the text it explains.
    Success { original: String, explanation: String },
    /// A human-readable failure message.
    Error { message: String },
}

/// Owning handle over the panel state.
#[derive(Debug, Default)]
pub struct Panel {
    state: PanelState,
}

impl Panel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self.state, PanelState::Hidden)
    }

    /// Show the loading state for a captured selection.
    pub fn begin_loading(&mut self, text: impl Into<String>) {
        self.state = PanelState::Loading { text: text.into() };
    }

    /// Show a successful result. The original selection is carried over from
    /// the loading state; arriving in any other state (the panel was
    /// dismissed mid-flight) leaves it blank rather than dropping the result.
    pub fn succeed(&mut self, explanation: impl Into<String>) {
        let original = match &self.state {
            PanelState::Loading { text } => text.clone(),
            _ => String::new(),
        };
        self.state = PanelState::Success {
            original,
            explanation: explanation.into(),
        };
    }

    /// Show a failure message.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = PanelState::Error {
            message: message.into(),
        };
    }

    /// Hide the panel.
    pub fn dismiss(&mut self) {
        self.state = PanelState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let panel = Panel::new();
        assert_eq!(*panel.state(), PanelState::Hidden);
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_loading_to_success_keeps_original_text() {
        let mut panel = Panel::new();
        panel.begin_loading("the borrow checker");
        panel.succeed("It enforces ownership rules at compile time.");
        assert_eq!(
            *panel.state(),
            PanelState::Success {
                original: "the borrow checker".into(),
                explanation: "It enforces ownership rules at compile time.".into(),
            }
        );
    }

    #[test]
    fn test_success_without_loading_has_blank_original() {
        let mut panel = Panel::new();
        panel.succeed("42");
        assert_eq!(
            *panel.state(),
            PanelState::Success {
                original: String::new(),
                explanation: "42".into(),
            }
        );
    }

    #[test]
    fn test_loading_to_error() {
        let mut panel = Panel::new();
        panel.begin_loading("some text");
        panel.fail("network error; check your internet connection");
        assert!(matches!(panel.state(), PanelState::Error { .. }));
        assert!(panel.is_visible());
    }

    #[test]
    fn test_dismiss_from_any_state() {
        let mut panel = Panel::new();
        panel.begin_loading("text");
        panel.dismiss();
        assert!(!panel.is_visible());

        panel.fail("boom");
        panel.dismiss();
        assert_eq!(*panel.state(), PanelState::Hidden);
    }
}

//! Finite-state core of the valentine question dialog.
//!
//! [`DialogState`] is a plain value type: a "No" counter plus an optional
//! terminal resolution. The displayed title and prompt are derived from
//! the state by pure methods, and the two button presses are the only
//! transitions. Window rendering lives in [`crate::dialog_ui`]; nothing
//! here depends on egui.

/// Prompt shown when the dialog first opens.
pub const INITIAL_PROMPT: &str = "Do you want to be my valentine?";

/// Escalating prompts shown after each "No" press, in order.
pub const ESCALATION_PROMPTS: [&str; 4] = [
    "Are you sure?",
    "Are you REALLY sure?",
    "Will you REALLY not be my valentine?",
    "Last chance",
];

/// Message shown once "Yes" is pressed, before the dialog closes.
pub const ACCEPT_MESSAGE: &str = "Woohoo!!!";

/// Message shown after the fifth "No", before the dialog closes.
pub const FAREWELL_MESSAGE: &str = "Alright 😔";

/// Terminal outcome of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// "Yes" was pressed.
    Accepted,
    /// "No" was pressed a fifth time.
    Declined,
}

/// State of one open question dialog.
///
/// `no_count` stays in `0..=4`; once `resolution` is set the state is
/// terminal and only the closing message remains to be acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogState {
    no_count: u8,
    resolution: Option<Resolution>,
}

impl DialogState {
    /// A fresh dialog: zero "No" presses, still asking.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times "No" has been pressed so far.
    pub fn no_count(&self) -> u8 {
        self.no_count
    }

    /// The terminal outcome, or `None` while the question is still open.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    /// Whether a terminal state has been reached.
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Window title for the current state.
    pub fn title(&self) -> &'static str {
        match self.resolution {
            None => "Question",
            Some(Resolution::Accepted) => "Yay!",
            Some(Resolution::Declined) => "Oh...",
        }
    }

    /// Text displayed for the current state: the question while asking,
    /// the closing message once resolved.
    pub fn prompt(&self) -> &'static str {
        match self.resolution {
            Some(Resolution::Accepted) => ACCEPT_MESSAGE,
            Some(Resolution::Declined) => FAREWELL_MESSAGE,
            None => {
                if self.no_count == 0 {
                    INITIAL_PROMPT
                } else {
                    ESCALATION_PROMPTS[self.no_count as usize - 1]
                }
            }
        }
    }

    /// Handle a "Yes" press: resolves the dialog from any asking state.
    pub fn press_yes(&mut self) {
        if self.resolution.is_none() {
            self.resolution = Some(Resolution::Accepted);
        }
    }

    /// Handle a "No" press: escalates the prompt while fewer than four
    /// "No"s have been given, resolves to [`Resolution::Declined`] on
    /// the fifth. No-op once resolved.
    pub fn press_no(&mut self) {
        if self.resolution.is_some() {
            return;
        }
        if (self.no_count as usize) < ESCALATION_PROMPTS.len() {
            self.no_count += 1;
        } else {
            self.resolution = Some(Resolution::Declined);
        }
    }
}

use crate::navigation::{BackOutcome, NavigationEvent};
use itertools::Itertools;
use std::error::Error;
use std::fmt;

/// A one-line message for the viewer's status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

impl StatusLine {
    fn info(message: String) -> Self {
        Self {
            message,
            is_error: false,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_error {
            write!(f, "Error: {}", self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

/// Formats engine events and errors into human-readable status lines.
pub struct StatusFormatter;

impl StatusFormatter {
    pub fn event(event: &NavigationEvent) -> StatusLine {
        match event {
            NavigationEvent::Navigated { to, trigger, .. } => {
                StatusLine::info(format!("Transition: {} -> {}", trigger, to))
            }
            NavigationEvent::Loaded { start_screen: id, .. } | NavigationEvent::WentBack { to: id, .. } => {
                Self::screen_loaded(id)
            }
        }
    }

    pub fn back(outcome: &BackOutcome) -> StatusLine {
        match outcome {
            BackOutcome::Returned { to, .. } => Self::screen_loaded(to),
            BackOutcome::NoPreviousScreen => {
                StatusLine::info("No previous screen in history.".to_string())
            }
        }
    }

    pub fn error(error: &dyn Error) -> StatusLine {
        StatusLine {
            message: error.to_string(),
            is_error: true,
        }
    }

    /// Renders a history stack as a breadcrumb trail ending at the current screen.
    pub fn breadcrumbs(history: &[String], current: &str) -> String {
        history
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(current))
            .join(" > ")
    }

    fn screen_loaded(id: &str) -> StatusLine {
        StatusLine::info(format!("Loaded screen: {}", id))
    }
}

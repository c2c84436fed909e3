//! Application-wide UI state shared by the page controllers.
//!
//! The hacker-mode flag may only change through a transition: callers must
//! [`begin_transition`](AppState::begin_transition) first, which fails while
//! another transition holds the lock.

use crate::error::FolioError;
use crate::theme::Theme;

/// Which portfolio the page is presenting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Ai,
    Hacker,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Ai => Mode::Hacker,
            Mode::Hacker => Mode::Ai,
        }
    }

    pub fn is_hacker(self) -> bool {
        self == Mode::Hacker
    }

    /// Trigger button label while in this mode (it names the mode you switch to).
    pub fn toggle_label(self) -> &'static str {
        match self {
            Mode::Ai => "HACKER MODE",
            Mode::Hacker => "AI PORTFOLIO",
        }
    }

    pub fn toggle_icon(self) -> &'static str {
        match self {
            Mode::Ai => "☠",
            Mode::Hacker => "🤖",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    mode: Mode,
    transition: Option<Mode>,
    theme: Theme,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_hacker_mode(&self) -> bool {
        self.mode.is_hacker()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Take the transition lock and return the mode being switched to.
    pub fn begin_transition(&mut self) -> Result<Mode, FolioError> {
        if self.transition.is_some() {
            return Err(FolioError::TransitionInProgress);
        }
        let target = self.mode.toggled();
        self.transition = Some(target);
        Ok(target)
    }

    /// Flip the mode to the locked transition's target. No-op without a lock.
    pub fn commit_transition(&mut self) -> Option<Mode> {
        let target = self.transition?;
        self.mode = target;
        Some(target)
    }

    pub fn end_transition(&mut self) {
        self.transition = None;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}

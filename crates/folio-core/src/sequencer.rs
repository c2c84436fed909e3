//! Staged hacker-mode transition.
//!
//! A transition is a fixed list of [`Step`]s interpreted by
//! [`toggle_hacker_mode`]. It only suspends inside [`Wait::wait`], so tests can
//! substitute an instant wait and inspect what the stage was told to do.
//! There is no cancellation: while a transition holds the lock in
//! [`AppState`], further toggles are refused.

use crate::constants::*;
use crate::error::FolioError;
use crate::state::{AppState, Mode};
use std::cell::RefCell;
use std::future::Future;

/// Suspends the sequence for a fixed time.
pub trait Wait {
    fn wait(&self, ms: u32) -> impl Future<Output = ()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    OverlayShown,
    Line1Typed,
    Line2Typed,
    Line3Typed,
    StatusShown,
    ModeApplied,
    OverlayFading,
}

impl Phase {
    fn after_line(line: usize) -> Self {
        match line {
            0 => Phase::Line1Typed,
            1 => Phase::Line2Typed,
            _ => Phase::Line3Typed,
        }
    }
}

/// Everything the sequence does to the page.
pub trait Stage {
    /// Disable or re-enable the control that starts a transition.
    fn set_trigger_locked(&mut self, locked: bool);
    /// Reset the overlay rain, show the overlay and start its render loop.
    fn show_overlay(&mut self);
    /// Empty the typed lines and the status footer.
    fn clear_text(&mut self);
    fn set_line(&mut self, line: usize, text: &str);
    fn set_status(&mut self, text: &str, color: &str);
    /// Swap body class, label and icon for `mode` in one go.
    fn apply_mode(&mut self, mode: Mode);
    fn begin_fade(&mut self, duration_ms: u32);
    /// Stop the overlay loop, hide it and drop the inline fade styles.
    fn hide_overlay(&mut self);
    fn enter_phase(&mut self, _phase: Phase) {}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    ShowOverlay,
    Settle(u32),
    TypeLine {
        line: usize,
        text: &'static str,
        char_ms: u32,
        hold_ms: u32,
    },
    Status {
        text: &'static str,
        color: &'static str,
        hold_ms: u32,
    },
    ApplyMode,
    FadeOut {
        fade_ms: u32,
        wait_ms: u32,
    },
    HideOverlay,
}

const ENTER_LINES: [&str; 3] = [
    "> INITIATING HACK SEQUENCE...",
    "> BYPASSING FIREWALL... [OK]",
    "> LOADING OFFENSIVE PROFILE...",
];
const EXIT_LINES: [&str; 3] = [
    "> TERMINATING SESSION...",
    "> CLEARING TRACES... [OK]",
    "> RESTORING AI PORTFOLIO...",
];

/// The full step list for switching into `target`.
pub fn transition_script(target: Mode) -> Vec<Step> {
    let (lines, status, color) = match target {
        Mode::Hacker => (ENTER_LINES, "[ ACCESS GRANTED ]", HK_STATUS_GREEN),
        Mode::Ai => (EXIT_LINES, "[ AI MODE RESTORED ]", HK_STATUS_CYAN),
    };
    let mut steps = vec![Step::ShowOverlay, Step::Settle(HK_SETTLE_MS)];
    for (line, text) in lines.into_iter().enumerate() {
        let hold_ms = if line + 1 == lines.len() {
            HK_LAST_LINE_PAUSE_MS
        } else {
            HK_LINE_PAUSE_MS
        };
        steps.push(Step::TypeLine {
            line,
            text,
            char_ms: HK_CHAR_MS,
            hold_ms,
        });
    }
    steps.extend([
        Step::Status {
            text: status,
            color,
            hold_ms: HK_STATUS_HOLD_MS,
        },
        Step::ApplyMode,
        Step::FadeOut {
            fade_ms: HK_FADE_MS,
            wait_ms: HK_FADE_WAIT_MS,
        },
        Step::HideOverlay,
    ]);
    steps
}

/// Sum of every wait the script will perform.
pub fn script_duration_ms(steps: &[Step]) -> u64 {
    steps
        .iter()
        .map(|s| match s {
            Step::Settle(ms) => *ms as u64,
            Step::TypeLine {
                text,
                char_ms,
                hold_ms,
                ..
            } => text.chars().count() as u64 * *char_ms as u64 + *hold_ms as u64,
            Step::Status { hold_ms, .. } => *hold_ms as u64,
            Step::FadeOut { wait_ms, .. } => *wait_ms as u64,
            Step::ShowOverlay | Step::ApplyMode | Step::HideOverlay => 0,
        })
        .sum()
}

/// Run one full transition. Returns the mode now in effect, or
/// `TransitionInProgress` without touching the page if one is already running.
pub async fn toggle_hacker_mode<S: Stage, W: Wait>(
    state: &RefCell<AppState>,
    stage: &mut S,
    wait: &W,
) -> Result<Mode, FolioError> {
    let target = state.borrow_mut().begin_transition()?;
    stage.set_trigger_locked(true);
    log::info!("[hacker] transition to {:?}", target);

    for step in transition_script(target) {
        run_step(&step, state, stage, wait).await;
    }

    state.borrow_mut().end_transition();
    stage.set_trigger_locked(false);
    stage.enter_phase(Phase::Idle);
    log::info!("[hacker] transition to {:?} done", target);
    Ok(target)
}

async fn run_step<S: Stage, W: Wait>(
    step: &Step,
    state: &RefCell<AppState>,
    stage: &mut S,
    wait: &W,
) {
    match step {
        Step::ShowOverlay => {
            stage.show_overlay();
            stage.clear_text();
            stage.enter_phase(Phase::OverlayShown);
        }
        Step::Settle(ms) => wait.wait(*ms).await,
        Step::TypeLine {
            line,
            text,
            char_ms,
            hold_ms,
        } => {
            type_line(stage, wait, *line, text, *char_ms).await;
            stage.enter_phase(Phase::after_line(*line));
            wait.wait(*hold_ms).await;
        }
        Step::Status {
            text,
            color,
            hold_ms,
        } => {
            stage.set_status(text, color);
            stage.enter_phase(Phase::StatusShown);
            wait.wait(*hold_ms).await;
        }
        Step::ApplyMode => {
            // the only point where the global mode changes
            let committed = state.borrow_mut().commit_transition();
            if let Some(mode) = committed {
                stage.apply_mode(mode);
            }
            stage.enter_phase(Phase::ModeApplied);
        }
        Step::FadeOut { fade_ms, wait_ms } => {
            stage.begin_fade(*fade_ms);
            stage.enter_phase(Phase::OverlayFading);
            wait.wait(*wait_ms).await;
        }
        Step::HideOverlay => stage.hide_overlay(),
    }
}

/// Typewriter effect: one character every `char_ms`.
pub async fn type_line<S: Stage, W: Wait>(
    stage: &mut S,
    wait: &W,
    line: usize,
    text: &str,
    char_ms: u32,
) {
    let mut shown = String::with_capacity(text.len());
    stage.set_line(line, "");
    for ch in text.chars() {
        wait.wait(char_ms).await;
        shown.push(ch);
        stage.set_line(line, &shown);
    }
}

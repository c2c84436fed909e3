// Host-side tests for the hacker-mode transition sequencer.
// Waits resolve instantly, so a whole transition runs inside `block_on`.

mod support;

use folio_core::constants::*;
use folio_core::{
    script_duration_ms, toggle_hacker_mode, transition_script, AppState, FolioError, Mode, Phase,
    Stage, Step, Wait,
};
use std::cell::RefCell;
use std::future::{ready, Future};
use std::rc::Rc;
use support::InstantWait;

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Lock(bool),
    Show,
    Clear,
    Status(String, String),
    Apply(Mode),
    Fade(u32),
    Hide,
    Wait(u32),
}

/// Page double: keeps the visible state and a log shared with the wait.
#[derive(Default)]
struct FakePage {
    log: Rc<RefCell<Vec<Event>>>,
    phases: Vec<Phase>,
    lines: [String; 3],
    status: String,
    label: String,
    icon: String,
    body_hacker: bool,
    overlay_active: bool,
    overlay_opacity: Option<String>,
    overlay_transition: Option<String>,
    trigger_disabled: bool,
}

impl FakePage {
    fn new() -> Self {
        Self {
            label: Mode::Ai.toggle_label().to_string(),
            icon: Mode::Ai.toggle_icon().to_string(),
            ..Self::default()
        }
    }

    fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }
}

impl Stage for FakePage {
    fn set_trigger_locked(&mut self, locked: bool) {
        self.trigger_disabled = locked;
        self.log.borrow_mut().push(Event::Lock(locked));
    }

    fn show_overlay(&mut self) {
        self.overlay_active = true;
        self.log.borrow_mut().push(Event::Show);
    }

    fn clear_text(&mut self) {
        self.lines = Default::default();
        self.status.clear();
        self.log.borrow_mut().push(Event::Clear);
    }

    fn set_line(&mut self, line: usize, text: &str) {
        self.lines[line] = text.to_string();
    }

    fn set_status(&mut self, text: &str, color: &str) {
        self.status = text.to_string();
        self.log
            .borrow_mut()
            .push(Event::Status(text.to_string(), color.to_string()));
    }

    fn apply_mode(&mut self, mode: Mode) {
        self.body_hacker = mode.is_hacker();
        self.label = mode.toggle_label().to_string();
        self.icon = mode.toggle_icon().to_string();
        self.log.borrow_mut().push(Event::Apply(mode));
    }

    fn begin_fade(&mut self, duration_ms: u32) {
        self.overlay_opacity = Some("0".to_string());
        self.overlay_transition = Some(format!("opacity {}s ease", duration_ms as f32 / 1000.0));
        self.log.borrow_mut().push(Event::Fade(duration_ms));
    }

    fn hide_overlay(&mut self) {
        self.overlay_active = false;
        self.overlay_opacity = None;
        self.overlay_transition = None;
        self.log.borrow_mut().push(Event::Hide);
    }

    fn enter_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }
}

/// Instant wait that logs into the page's event log.
struct LoggedWait(Rc<RefCell<Vec<Event>>>);

impl Wait for LoggedWait {
    fn wait(&self, ms: u32) -> impl Future<Output = ()> {
        self.0.borrow_mut().push(Event::Wait(ms));
        ready(())
    }
}

/// On its first wait, tries to start a second transition and records the
/// outcome plus everything the second page was asked to do.
struct ReentrantWait<'a> {
    state: &'a RefCell<AppState>,
    attempted: RefCell<Option<Result<Mode, FolioError>>>,
    second_page: RefCell<FakePage>,
    modes_seen: RefCell<Vec<Mode>>,
}

impl Wait for ReentrantWait<'_> {
    fn wait(&self, _ms: u32) -> impl Future<Output = ()> {
        self.modes_seen.borrow_mut().push(self.state.borrow().mode());
        if self.attempted.borrow().is_none() {
            let mut page = self.second_page.borrow_mut();
            let res = pollster::block_on(toggle_hacker_mode(
                self.state,
                &mut *page,
                &InstantWait::default(),
            ));
            *self.attempted.borrow_mut() = Some(res);
        }
        ready(())
    }
}

fn run(state: &RefCell<AppState>, page: &mut FakePage) -> Result<Mode, FolioError> {
    let wait = LoggedWait(page.log.clone());
    pollster::block_on(toggle_hacker_mode(state, page, &wait))
}

#[test]
fn entering_hacker_mode_end_to_end() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    assert_eq!(page.label, "HACKER MODE");

    assert_eq!(run(&state, &mut page), Ok(Mode::Hacker));

    assert!(state.borrow().is_hacker_mode());
    assert!(!state.borrow().is_transitioning());
    assert_eq!(page.label, "AI PORTFOLIO");
    assert_eq!(page.icon, "🤖");
    assert!(page.body_hacker);
    assert!(!page.overlay_active);
    assert_eq!(page.overlay_opacity, None);
    assert_eq!(page.overlay_transition, None);
    assert!(!page.trigger_disabled);
    assert_eq!(
        page.lines,
        [
            "> INITIATING HACK SEQUENCE...".to_string(),
            "> BYPASSING FIREWALL... [OK]".to_string(),
            "> LOADING OFFENSIVE PROFILE...".to_string(),
        ]
    );
    assert_eq!(page.status, "[ ACCESS GRANTED ]");
    assert!(page.events().contains(&Event::Status(
        "[ ACCESS GRANTED ]".to_string(),
        HK_STATUS_GREEN.to_string()
    )));
}

#[test]
fn toggling_twice_restores_the_original_mode() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    run(&state, &mut page).unwrap();
    assert_eq!(run(&state, &mut page), Ok(Mode::Ai));

    assert_eq!(state.borrow().mode(), Mode::Ai);
    assert_eq!(page.label, "HACKER MODE");
    assert_eq!(page.icon, "☠");
    assert!(!page.body_hacker);
    assert_eq!(page.lines[2], "> RESTORING AI PORTFOLIO...");
    assert_eq!(page.status, "[ AI MODE RESTORED ]");
    assert!(page.events().contains(&Event::Status(
        "[ AI MODE RESTORED ]".to_string(),
        HK_STATUS_CYAN.to_string()
    )));
}

#[test]
fn phases_follow_the_fixed_order() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    run(&state, &mut page).unwrap();
    assert_eq!(
        page.phases,
        vec![
            Phase::OverlayShown,
            Phase::Line1Typed,
            Phase::Line2Typed,
            Phase::Line3Typed,
            Phase::StatusShown,
            Phase::ModeApplied,
            Phase::OverlayFading,
            Phase::Idle,
        ]
    );
}

#[test]
fn waits_match_the_timing_contract() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    let wait = InstantWait::default();
    pollster::block_on(toggle_hacker_mode(&state, &mut page, &wait)).unwrap();

    let waits = wait.waits.borrow().clone();
    let l1 = "> INITIATING HACK SEQUENCE...".chars().count();
    let l2 = "> BYPASSING FIREWALL... [OK]".chars().count();
    let l3 = "> LOADING OFFENSIVE PROFILE...".chars().count();

    let mut expected = vec![HK_SETTLE_MS];
    expected.extend(std::iter::repeat(HK_CHAR_MS).take(l1));
    expected.push(HK_LINE_PAUSE_MS);
    expected.extend(std::iter::repeat(HK_CHAR_MS).take(l2));
    expected.push(HK_LINE_PAUSE_MS);
    expected.extend(std::iter::repeat(HK_CHAR_MS).take(l3));
    expected.push(HK_LAST_LINE_PAUSE_MS);
    expected.push(HK_STATUS_HOLD_MS);
    expected.push(HK_FADE_WAIT_MS);
    assert_eq!(waits, expected);

    let total = 180 + 30 * (l1 + l2 + l3) as u64 + 90 + 90 + 180 + 450 + 520;
    assert_eq!(wait.total_ms(), total);
    assert_eq!(script_duration_ms(&transition_script(Mode::Hacker)), total);
}

#[test]
fn mode_changes_only_after_the_status_hold() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    run(&state, &mut page).unwrap();
    let events = page.events();

    let apply = events
        .iter()
        .position(|e| *e == Event::Apply(Mode::Hacker))
        .unwrap();
    assert_eq!(events[apply - 1], Event::Wait(HK_STATUS_HOLD_MS));
    assert!(matches!(events[apply - 2], Event::Status(..)));
    assert_eq!(events[apply + 1], Event::Fade(HK_FADE_MS));
    assert_eq!(events[apply + 2], Event::Wait(HK_FADE_WAIT_MS));
    assert_eq!(events[apply + 3], Event::Hide);
    assert_eq!(events[apply + 4], Event::Lock(false));
    assert_eq!(&events[..3], &[Event::Lock(true), Event::Show, Event::Clear]);
    assert_eq!(events[3], Event::Wait(HK_SETTLE_MS));
}

#[test]
fn global_mode_is_untouched_until_applied() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    let wait = ReentrantWait {
        state: &state,
        attempted: RefCell::new(None),
        second_page: RefCell::new(FakePage::new()),
        modes_seen: RefCell::new(Vec::new()),
    };
    pollster::block_on(toggle_hacker_mode(&state, &mut page, &wait)).unwrap();
    let seen = wait.modes_seen.borrow();
    // every wait but the final fade happens before the flip
    let (before, after) = seen.split_at(seen.len() - 1);
    assert!(before.iter().all(|&m| m == Mode::Ai));
    assert_eq!(after, &[Mode::Hacker]);
}

#[test]
fn toggle_while_locked_is_a_no_op() {
    let state = RefCell::new(AppState::default());
    let mut page = FakePage::new();
    let wait = ReentrantWait {
        state: &state,
        attempted: RefCell::new(None),
        second_page: RefCell::new(FakePage::new()),
        modes_seen: RefCell::new(Vec::new()),
    };
    let first = pollster::block_on(toggle_hacker_mode(&state, &mut page, &wait));

    assert_eq!(
        *wait.attempted.borrow(),
        Some(Err(FolioError::TransitionInProgress))
    );
    let second = wait.second_page.borrow();
    assert!(second.events().is_empty());
    assert!(second.phases.is_empty());
    assert!(!second.overlay_active);
    // the in-flight transition is unaffected
    assert_eq!(first, Ok(Mode::Hacker));
    assert_eq!(state.borrow().mode(), Mode::Hacker);
    assert_eq!(page.lines[0], "> INITIATING HACK SEQUENCE...");
}

#[test]
fn app_state_lock_accessors() {
    let mut state = AppState::default();
    assert_eq!(state.commit_transition(), None);
    assert_eq!(state.mode(), Mode::Ai);

    assert_eq!(state.begin_transition(), Ok(Mode::Hacker));
    assert!(state.is_transitioning());
    assert_eq!(
        state.begin_transition(),
        Err(FolioError::TransitionInProgress)
    );
    assert_eq!(state.mode(), Mode::Ai);
    assert_eq!(state.commit_transition(), Some(Mode::Hacker));
    state.end_transition();
    assert!(!state.is_transitioning());
    assert_eq!(state.begin_transition(), Ok(Mode::Ai));
}

#[test]
fn scripts_differ_only_in_text() {
    let enter = transition_script(Mode::Hacker);
    let exit = transition_script(Mode::Ai);
    assert_eq!(enter.len(), exit.len());
    assert_eq!(enter[0], Step::ShowOverlay);
    assert_eq!(enter[1], Step::Settle(HK_SETTLE_MS));
    assert_eq!(enter.last(), Some(&Step::HideOverlay));
    for (a, b) in enter.iter().zip(&exit) {
        assert_eq!(std::mem::discriminant(a), std::mem::discriminant(b));
    }
}

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerKind {
    /// Fire the first time the target is visible, then detach.
    Once,
    /// Fire every time the target becomes visible.
    Repeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fire {
    Skip,
    Run { detach: bool },
}

/// Visibility subscription for one observed target.
#[derive(Clone, Debug)]
pub struct Subscription {
    kind: TriggerKind,
    fired: bool,
}

impl Subscription {
    pub fn once() -> Self {
        Self {
            kind: TriggerKind::Once,
            fired: false,
        }
    }

    pub fn repeat() -> Self {
        Self {
            kind: TriggerKind::Repeat,
            fired: false,
        }
    }

    pub fn kind(&self) -> TriggerKind {
        self.kind
    }

    pub fn is_detached(&self) -> bool {
        self.kind == TriggerKind::Once && self.fired
    }

    pub fn on_visibility(&mut self, intersecting: bool) -> Fire {
        if !intersecting || self.is_detached() {
            return Fire::Skip;
        }
        self.fired = true;
        Fire::Run {
            detach: self.kind == TriggerKind::Once,
        }
    }
}

/// Transition delay for the `index`-th entry of a reveal batch.
#[inline]
pub fn reveal_delay_secs(index: usize) -> f32 {
    (index % REVEAL_STAGGER_SLOTS) as f32 * REVEAL_STAGGER_SECS
}

/// Hero statistic counting up to its target in fixed increments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Counter {
    target: u32,
    current: u32,
    step: u32,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            current: 0,
            step: target.div_ceil(COUNTER_STEPS).max(1),
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn step_size(&self) -> u32 {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one interval and return the value to display.
    pub fn advance(&mut self) -> u32 {
        self.current = self.current.saturating_add(self.step).min(self.target);
        self.current
    }
}

/// Classes driven by the window scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollState {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

impl ScrollState {
    pub fn from_offset(scroll_y: f64) -> Self {
        Self {
            navbar_scrolled: scroll_y > NAVBAR_SCROLLED_AFTER_PX,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER_PX,
        }
    }
}

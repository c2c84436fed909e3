use crate::constants::*;
use crate::error::FolioError;
use crate::sequencer::Wait;
use glam::Vec2;
use std::str::FromStr;

// ---------------- Typed hero text ----------------

pub const HERO_PHRASES: &[&str] = &[
    "AI-Powered Apps.",
    "Automation Bots.",
    "Full-Stack Web Apps.",
    "Smart Solutions.",
    "Cool Stuff. 🚀",
];

#[derive(Clone, Debug)]
pub struct TypedTextTiming {
    pub type_ms: u32,
    pub hold_ms: u32,
    pub delete_ms: u32,
    pub next_phrase_ms: u32,
}

impl Default for TypedTextTiming {
    fn default() -> Self {
        Self {
            type_ms: TYPE_CHAR_MS,
            hold_ms: TYPE_HOLD_MS,
            delete_ms: TYPE_DELETE_MS,
            next_phrase_ms: TYPE_NEXT_PHRASE_MS,
        }
    }
}

/// What to display now and how long to wait before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Type, hold, delete, advance; cycling through the phrases forever.
#[derive(Clone, Debug)]
pub struct TypedText {
    phrases: Vec<&'static str>,
    timing: TypedTextTiming,
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl TypedText {
    pub fn new(phrases: &[&'static str], timing: TypedTextTiming) -> Self {
        Self {
            phrases: phrases.to_vec(),
            timing,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn hero() -> Self {
        Self::new(HERO_PHRASES, TypedTextTiming::default())
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn step(&mut self) -> TypedFrame {
        let Some(phrase) = self.phrases.get(self.phrase).copied() else {
            return TypedFrame {
                text: String::new(),
                next_delay_ms: self.timing.hold_ms,
            };
        };
        let len = phrase.chars().count();
        let text: String = phrase.chars().take(self.chars).collect();
        let next_delay_ms = if !self.deleting && self.chars < len {
            self.chars += 1;
            self.timing.type_ms
        } else if !self.deleting {
            self.deleting = true;
            self.timing.hold_ms
        } else if self.chars > 0 {
            self.chars -= 1;
            self.timing.delete_ms
        } else {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            self.timing.next_phrase_ms
        };
        TypedFrame {
            text,
            next_delay_ms,
        }
    }
}

// ---------------- Cursor follower ----------------

/// Ring that eases toward the pointer a fixed fraction per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Follower {
    pub pos: Vec2,
    pub target: Vec2,
}

impl Follower {
    pub fn ease(&mut self) -> Vec2 {
        self.pos += (self.target - self.pos) * FOLLOWER_EASING;
        self.pos
    }
}

/// Size (px) and border colour for the follower ring.
#[inline]
pub fn follower_look(hovering: bool) -> (f32, &'static str) {
    if hovering {
        (FOLLOWER_HOVER_SIZE_PX, FOLLOWER_HOVER_BORDER)
    } else {
        (FOLLOWER_SIZE_PX, FOLLOWER_BORDER)
    }
}

// ---------------- Blog / research tabs ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Posts,
    Research,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Posts, Tab::Research];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Posts => "posts",
            Tab::Research => "research",
        }
    }

    pub fn content_id(self) -> String {
        format!("tab-content-{}", self.as_str())
    }
}

impl FromStr for Tab {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "posts" => Ok(Tab::Posts),
            "research" => Ok(Tab::Research),
            other => Err(FolioError::UnknownTab(other.to_string())),
        }
    }
}

// ---------------- Contact form ----------------

pub trait FormView {
    fn show_sending(&mut self);
    fn show_sent(&mut self);
    fn restore(&mut self);
}

/// Simulated submission: there is no backend, it always succeeds.
pub async fn submit_contact<V: FormView, W: Wait>(view: &mut V, wait: &W) {
    view.show_sending();
    wait.wait(FORM_SEND_DELAY_MS).await;
    view.show_sent();
    log::info!("[form] message sent");
    wait.wait(FORM_RESTORE_DELAY_MS).await;
    view.restore();
}

pub mod clock;
pub mod constants;
pub mod error;
pub mod particles;
pub mod rain;
pub mod sequencer;
pub mod state;
pub mod surface;
pub mod theme;
pub mod triggers;
pub mod widgets;

pub use clock::*;
pub use error::*;
pub use particles::*;
pub use rain::*;
pub use sequencer::*;
pub use state::*;
pub use surface::*;
pub use theme::*;
pub use triggers::*;
pub use widgets::*;

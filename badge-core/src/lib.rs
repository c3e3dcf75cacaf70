//! Badge Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das Datenmodell, die Hardware-Traits, den Multiplexer,
//! den Button-Handler und die Animations-Engine.

#![no_std]

pub mod debounce;
pub mod engine;
pub mod logic;
pub mod multiplexer;
pub mod shared;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use debounce::{EdgeOutcome, on_button_edge};
pub use engine::{AnimationEngine, LoopStep};
pub use logic::{FrameSource, Pattern, PinConfig, frame_source, pin_config};
pub use multiplexer::{on_tick, render_current_position};
pub use shared::SharedState;
pub use traits::{
    ALL_PINS_RELEASED, BadgeError, EdgeInterrupt, PinBank, RandomSource, TickSource,
};
pub use types::{Animation, AnimationIndex, DisplayBitmap, LED_COUNT, MAX_ANIM, ScanPosition};

// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
#[cfg(not(test))]
pub mod interrupts;
pub mod tasks;

// Re-exports von badge-core
pub use badge_core::{
    AnimationEngine, AnimationIndex, BadgeError, LoopStep, PinBank, RandomSource, SharedState,
    TickSource,
};

// Embassy Signal-Typ
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

// ============================================================================
// Type-Aliase
// ============================================================================

/// Signal vom Button-Handler an die schlafende Hauptschleife
///
/// CriticalSectionRawMutex, weil aus einem Interrupt-Handler signalisiert wird.
pub type WakeSignal = Signal<CriticalSectionRawMutex, ()>;

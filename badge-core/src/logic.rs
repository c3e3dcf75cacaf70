//! Pure Business Logic Functions
//!
//! Pin-Tabelle des Multiplexers und Pattern-Tabellen der Animationen.
//! Funktionen ohne Hardware-Dependencies (testbar!)

use crate::types::{Animation, ScanPosition};

/// Pin-Konfiguration, die genau eine LED einschaltet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    /// Bit = 1: hochohmig, Bit = 0: Ausgang
    pub directions: u8,
    /// Pegel der Ausgänge
    pub levels: u8,
}

/// Verdrahtung der acht LEDs, Index = Position - 1
const LED_PIN_TABLE: [PinConfig; 8] = [
    PinConfig { directions: 0b0010_1011, levels: 0b0000_0100 }, // L1
    PinConfig { directions: 0b0000_1111, levels: 0b0001_0000 }, // L2
    PinConfig { directions: 0b0010_1011, levels: 0b0001_0000 }, // L3
    PinConfig { directions: 0b0000_1111, levels: 0b0010_0000 }, // L4
    PinConfig { directions: 0b0001_1011, levels: 0b0000_0100 }, // L5
    PinConfig { directions: 0b0001_1011, levels: 0b0010_0000 }, // L6
    PinConfig { directions: 0b0011_1100, levels: 0b0000_0001 }, // L7
    PinConfig { directions: 0b0011_1100, levels: 0b0000_0010 }, // L8
];

/// Pin-Konfiguration für die LED an `position`
pub const fn pin_config(position: ScanPosition) -> PinConfig {
    LED_PIN_TABLE[(position.get() - 1) as usize]
}

/// Zeitabhängiges Muster: Phasen-Tabelle plus Zähler-Takt
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub phases: &'static [u8],
    /// Zählerschritte pro Phase
    pub ticks_per_phase: u8,
    /// Zählerschritte pro Frame
    pub increment: u8,
}

impl Pattern {
    /// Zählerwert, bei dem auf 0 zurückgesetzt wird
    pub const fn period(&self) -> u8 {
        self.phases.len() as u8 * self.ticks_per_phase
    }

    /// Maske für den Zählerstand, `None` wenn der Zähler außerhalb der
    /// Tabelle liegt (z.B. Restwert einer anderen Animation)
    pub fn mask_at(&self, steps: u8) -> Option<u8> {
        self.phases
            .get((steps / self.ticks_per_phase) as usize)
            .copied()
    }

    /// Zähler um einen Frame weiterschalten, ab `period()` wieder 0
    pub const fn advance(&self, steps: u8) -> u8 {
        let next = steps.wrapping_add(self.increment);
        if next >= self.period() { 0 } else { next }
    }
}

const CHASE: Pattern = Pattern {
    phases: &[
        0b1000_0010,
        0b0100_0001,
        0b0010_0010,
        0b0001_0001,
        0b0000_1010,
        0b0000_0101,
    ],
    ticks_per_phase: 5,
    increment: 1,
};

const CHASE_REVERSE: Pattern = Pattern {
    phases: &[
        0b0000_0101,
        0b0000_1010,
        0b0001_0001,
        0b0010_0010,
        0b0100_0001,
        0b1000_0010,
    ],
    ticks_per_phase: 5,
    increment: 1,
};

const CHASE_FAST: Pattern = Pattern {
    phases: &[
        0b0000_0111,
        0b0000_1011,
        0b0001_0011,
        0b0010_0011,
        0b0100_0011,
        0b1000_0000,
        0b1000_0011,
        0b0100_0011,
        0b0010_0011,
        0b0001_0011,
        0b0000_1011,
        0b0000_0100,
    ],
    ticks_per_phase: 5,
    increment: 2,
};

const WAVE: Pattern = Pattern {
    phases: &[
        0b0011_0011,
        0b0100_1000,
        0b1000_0110,
        0b1000_0101,
        0b0100_1011,
        0b0011_0000,
    ],
    ticks_per_phase: 4,
    increment: 1,
};

/// Wie eine Animation ihren Frame berechnet
#[derive(Debug, Clone, Copy)]
pub enum FrameSource {
    /// Schlafmodus, kein Frame
    Sleep,
    /// Feste Maske, zeitunabhängig
    Solid(u8),
    /// Maske aus Tabelle und Frame-Zähler
    Timed(Pattern),
    /// Ein Zufallsbyte pro Frame
    Noise,
}

/// Frame-Quelle einer Animation
pub const fn frame_source(animation: Animation) -> FrameSource {
    match animation {
        Animation::Idle => FrameSource::Sleep,
        Animation::SolidAll => FrameSource::Solid(0b1111_1111),
        Animation::SolidUpper => FrameSource::Solid(0b1111_1100),
        Animation::SolidLower => FrameSource::Solid(0b0000_0011),
        Animation::Chase => FrameSource::Timed(CHASE),
        Animation::ChaseReverse => FrameSource::Timed(CHASE_REVERSE),
        Animation::ChaseFast => FrameSource::Timed(CHASE_FAST),
        Animation::Wave => FrameSource::Timed(WAVE),
        Animation::Random => FrameSource::Noise,
    }
}

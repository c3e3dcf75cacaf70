//! Animations-Engine (Zustandsmaschine der Hauptschleife)
//!
//! Die Engine berechnet pro Schleifendurchlauf einen Frame und schreibt
//! ihn in die Display-Bitmap. Die Wartezeiten (Settle, Frame-Intervall,
//! Schlaf) gehören nicht hierher: `poll()` sagt dem Aufrufer über
//! `LoopStep`, worauf er warten muss.

use crate::logic::{FrameSource, frame_source};
use crate::shared::SharedState;
use crate::traits::{BadgeError, PinBank, RandomSource, TickSource};
use crate::types::{AnimationIndex, DisplayBitmap};

/// Was der Aufrufer nach einem `poll()` tun muss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    /// Display ist dunkel. Settle-Zeit abwarten, dann `finish_settle()`.
    Settle,
    /// Schlafmodus: Tick aus, Pins hochohmig. Bis zum nächsten
    /// Button-Interrupt schlafen.
    Sleep,
    /// Frame berechnet. `mask` ist `None`, wenn der Frame-Zähler außerhalb
    /// der Tabelle lag und die alte Bitmap stehen bleibt.
    Frame {
        animation: AnimationIndex,
        mask: Option<u8>,
    },
}

/// Zustand der Hauptschleife
#[derive(Debug, Default)]
pub struct AnimationEngine {
    steps: u8,
}

impl AnimationEngine {
    pub const fn new() -> Self {
        Self { steps: 0 }
    }

    /// Aktueller Frame-Zähler
    pub const fn steps(&self) -> u8 {
        self.steps
    }

    /// Ein Durchlauf der Hauptschleife
    ///
    /// 1. Debounce-Flag gesetzt: Display aus, Zähler auf 0, `Settle`.
    /// 2. Sonst nach Animations-Index verzweigen:
    ///    - Idle: Tick stoppen, alle Pins loslassen, `Sleep`.
    ///    - alle anderen: Tick sicherstellen, Maske berechnen und
    ///      schreiben, Zähler weiterschalten, `Frame`.
    pub fn poll<P, T, R>(
        &mut self,
        shared: &SharedState,
        pins: &mut P,
        tick: &mut T,
        rng: &mut R,
    ) -> Result<LoopStep, BadgeError>
    where
        P: PinBank,
        T: TickSource,
        R: RandomSource,
    {
        if shared.debounce_pending() {
            shared.write_bitmap(DisplayBitmap::OFF);
            self.steps = 0;
            return Ok(LoopStep::Settle);
        }

        let animation = shared.animation();
        let source = frame_source(animation.animation());

        if let FrameSource::Sleep = source {
            tick.stop();
            pins.release_all();
            return Ok(LoopStep::Sleep);
        }

        tick.start()?;

        let mask = match source {
            FrameSource::Solid(mask) => Some(mask),
            FrameSource::Timed(pattern) => {
                let mask = pattern.mask_at(self.steps);
                self.steps = pattern.advance(self.steps);
                mask
            }
            FrameSource::Noise => Some(rng.next_byte()),
            FrameSource::Sleep => None,
        };

        if let Some(mask) = mask {
            shared.write_bitmap(DisplayBitmap::from_mask(mask));
        }

        Ok(LoopStep::Frame { animation, mask })
    }

    /// Nach der Settle-Zeit: Debounce-Flag löschen
    pub fn finish_settle(&self, shared: &SharedState) {
        shared.end_debounce();
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LoopStep {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LoopStep::Settle => defmt::write!(fmt, "Settle"),
            LoopStep::Sleep => defmt::write!(fmt, "Sleep"),
            LoopStep::Frame { animation, mask } => {
                defmt::write!(fmt, "Frame {{ animation: {}, mask: {} }}", animation, mask)
            }
        }
    }
}

//! Button-Handler mit Debounce
//!
//! Pro Tastendruck wird die Animation genau einmal weitergeschaltet.
//! Weitere Flanken werden ignoriert, bis die Hauptschleife das
//! Debounce-Flag nach der Settle-Zeit wieder löscht.

use crate::shared::SharedState;
use crate::traits::EdgeInterrupt;
use crate::types::AnimationIndex;

/// Ergebnis einer Button-Flanke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// Animation wurde weitergeschaltet
    Advanced(AnimationIndex),
    /// Prellen während der Settle-Zeit
    Ignored,
}

/// Behandelt eine fallende Flanke der Button-Leitung
///
/// Der Interrupt ist während der Behandlung gesperrt. Das Pending-Flag
/// wird gelöscht, bevor er wieder freigegeben wird. Die LEDs werden hier
/// nicht angefasst; das Ausblenden macht die Hauptschleife.
pub fn on_button_edge<E: EdgeInterrupt>(shared: &SharedState, edge: &mut E) -> EdgeOutcome {
    edge.mask();

    let outcome = if shared.try_begin_debounce() {
        EdgeOutcome::Advanced(shared.advance_animation())
    } else {
        EdgeOutcome::Ignored
    };

    edge.clear_pending();
    edge.unmask();
    outcome
}

#[cfg(feature = "defmt")]
impl defmt::Format for EdgeOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            EdgeOutcome::Advanced(index) => defmt::write!(fmt, "Advanced({})", index),
            EdgeOutcome::Ignored => defmt::write!(fmt, "Ignored"),
        }
    }
}

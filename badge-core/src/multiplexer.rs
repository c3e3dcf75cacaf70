//! Display-Multiplexer
//!
//! Schaltet pro Tick höchstens eine LED ein. Durch das schnelle
//! Weiterschalten der Scan-Position entsteht der POV-Effekt.

use crate::logic::pin_config;
use crate::shared::SharedState;
use crate::traits::PinBank;

/// Zeigt die LED an der aktuellen Scan-Position an
///
/// Ist die LED in der Bitmap an, wird die Pin-Bank so konfiguriert,
/// dass genau diese LED leuchtet. Sonst werden alle Leitungen
/// hochohmig geschaltet.
pub fn render_current_position<P: PinBank>(shared: &SharedState, pins: &mut P) {
    let position = shared.scan_position();

    if shared.bitmap().is_lit(position) {
        let config = pin_config(position);
        // Richtung vor Pegel
        pins.set_pin_directions(config.directions);
        pins.set_pin_levels(config.levels);
    } else {
        pins.release_all();
    }
}

/// Tick-Handler: Scan-Position weiterschalten und anzeigen
pub fn on_tick<P: PinBank>(shared: &SharedState, pins: &mut P) {
    shared.advance_scan_position();
    render_current_position(shared, pins);
}

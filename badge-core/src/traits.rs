//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Richtungsmaske: alle sechs Leitungen hochohmig, alle LEDs aus
pub const ALL_PINS_RELEASED: u8 = 0b0011_1111;

/// Fehler-Typ für das Badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BadgeError {
    /// Der Tick-Timer ließ sich nicht starten
    TickStartFailed,
    /// Animations-Index außerhalb von 1..=9
    AnimationOutOfRange(u8),
    /// Scan-Position außerhalb von 1..=8
    PositionOutOfRange(u8),
}

/// Trait für die Pin-Bank der LED-Matrix
///
/// Die LEDs hängen charlieplexed an sechs gemeinsamen Leitungen
/// (Bit 0..5). Bit 3 ist die Button-Leitung und wird nie getrieben.
///
/// # Implementierungen
/// - **Production:** GpioPinBank (ESP32 Flex-Pins)
/// - **Testing:** MockPinBank (in-memory Mock)
pub trait PinBank {
    /// Setzt die Richtung aller Leitungen
    ///
    /// Bit = 1: hochohmig (Eingang), Bit = 0: getriebener Ausgang
    fn set_pin_directions(&mut self, mask: u8);

    /// Setzt die Pegel der Ausgänge (Bit = 1: high)
    fn set_pin_levels(&mut self, mask: u8);

    /// Alle Leitungen hochohmig, keine LED leuchtet
    fn release_all(&mut self) {
        self.set_pin_directions(ALL_PINS_RELEASED);
    }
}

/// Trait für den periodischen POV-Tick
pub trait TickSource {
    /// Startet den Tick. Läuft er schon, passiert nichts.
    ///
    /// # Fehlerbehandlung
    /// Gibt `BadgeError::TickStartFailed` zurück wenn der Timer nicht startet
    fn start(&mut self) -> Result<(), BadgeError>;

    /// Stoppt den Tick
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

/// Trait für die Flanken-Interrupt-Quelle des Buttons
pub trait EdgeInterrupt {
    /// Sperrt den Interrupt (Schutz gegen Wiedereintritt)
    fn mask(&mut self);

    /// Gibt den Interrupt wieder frei
    fn unmask(&mut self);

    /// Löscht das Pending-Flag der Flanke
    fn clear_pending(&mut self);
}

/// Trait für die Zufallsquelle von Animation 9
pub trait RandomSource {
    fn next_byte(&mut self) -> u8;
}

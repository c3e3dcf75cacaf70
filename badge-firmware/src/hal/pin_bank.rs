// Pin-Bank der LED-Matrix
//
// Die acht LEDs hängen charlieplexed an fünf GPIO-Leitungen. Eine LED
// leuchtet nur, wenn genau ihre beiden Leitungen getrieben werden und
// alle anderen hochohmig sind.

use badge_core::PinBank;

/// Anzahl der Bits einer Pin-Bank-Maske
const BANK_WIDTH: usize = 6;

/// Bit der Button-Leitung, hat keinen LED-Pin
#[cfg(test)]
const BUTTON_BIT: usize = 3;

/// Ist `bit` in `mask` gesetzt?
fn bit_set(mask: u8, bit: usize) -> bool {
    mask & (1 << bit) != 0
}

// ============================================================================
// Real Hardware Implementation (nur für ESP32-Target)
// ============================================================================

#[cfg(not(test))]
mod real_impl {
    use super::*;
    use esp_hal::gpio::{Flex, Level};

    /// GPIO Pin-Bank
    ///
    /// Nutzt Flex-Pins, deren Ausgangstreiber einzeln an- und abgeschaltet
    /// werden kann. Abgeschalteter Treiber = hochohmig.
    pub struct GpioPinBank {
        lines: [Option<Flex<'static>>; BANK_WIDTH],
    }

    impl GpioPinBank {
        /// Erstellt eine neue GpioPinBank
        ///
        /// # Parameter
        /// - `lines`: Flex-Pins für Bit 0, 1, 2, 4, 5 der Pin-Bank
        ///
        /// Alle Leitungen starten hochohmig.
        pub fn new(lines: [Flex<'static>; BANK_WIDTH - 1]) -> Self {
            let [l0, l1, l2, l4, l5] = lines;
            let mut bank = Self {
                lines: [Some(l0), Some(l1), Some(l2), None, Some(l4), Some(l5)],
            };
            for pin in bank.lines.iter_mut().flatten() {
                pin.set_input_enable(false);
                pin.set_level(Level::Low);
            }
            bank.release_all();
            bank
        }
    }

    impl PinBank for GpioPinBank {
        fn set_pin_directions(&mut self, mask: u8) {
            for (bit, line) in self.lines.iter_mut().enumerate() {
                if let Some(pin) = line {
                    pin.set_output_enable(!bit_set(mask, bit));
                }
            }
        }

        fn set_pin_levels(&mut self, mask: u8) {
            for (bit, line) in self.lines.iter_mut().enumerate() {
                if let Some(pin) = line {
                    pin.set_level(Level::from(bit_set(mask, bit)));
                }
            }
        }
    }
}

#[cfg(not(test))]
pub use real_impl::GpioPinBank;

// ============================================================================
// Mock Implementation (nur für Tests)
// ============================================================================

/// Zustand einer Leitung
#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    Released,
    Low,
    High,
}

#[cfg(test)]
pub struct MockPinBank {
    directions: u8,
    levels: u8,
}

#[cfg(test)]
impl MockPinBank {
    pub fn new() -> Self {
        Self {
            directions: badge_core::ALL_PINS_RELEASED,
            levels: 0,
        }
    }

    /// Zustand aller LED-Leitungen, Button-Leitung ausgenommen
    pub fn lines(&self) -> [Option<LineState>; BANK_WIDTH] {
        core::array::from_fn(|bit| {
            if bit == BUTTON_BIT {
                None
            } else if bit_set(self.directions, bit) {
                Some(LineState::Released)
            } else if bit_set(self.levels, bit) {
                Some(LineState::High)
            } else {
                Some(LineState::Low)
            }
        })
    }
}

#[cfg(test)]
impl PinBank for MockPinBank {
    fn set_pin_directions(&mut self, mask: u8) {
        self.directions = mask;
    }

    fn set_pin_levels(&mut self, mask: u8) {
        self.levels = mask;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

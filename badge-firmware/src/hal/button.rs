// Button-Leitung mit Flanken-Interrupt

use badge_core::EdgeInterrupt;
use esp_hal::gpio::{Event, Input};

/// Button an einem GPIO (active-low, Pull-up)
///
/// Löst bei fallender Flanke den GPIO-Interrupt aus.
pub struct ButtonLine {
    input: Input<'static>,
}

impl ButtonLine {
    pub fn new(mut input: Input<'static>) -> Self {
        input.listen(Event::FallingEdge);
        Self { input }
    }

    /// Hat dieser Pin den GPIO-Interrupt ausgelöst?
    pub fn is_interrupt_set(&self) -> bool {
        self.input.is_interrupt_set()
    }
}

impl EdgeInterrupt for ButtonLine {
    fn mask(&mut self) {
        self.input.unlisten();
    }

    fn unmask(&mut self) {
        self.input.listen(Event::FallingEdge);
    }

    fn clear_pending(&mut self) {
        self.input.clear_interrupt();
    }
}

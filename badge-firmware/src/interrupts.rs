// Interrupt-Handler und geteilte Peripherie
//
// Pin-Bank, Tick-Timer und Button werden von den Interrupt-Handlern und
// von der Hauptschleife benutzt. Sie liegen deshalb in critical-section
// Mutexen. Die Hauptschleife greift über die Handles `SharedPinBank` und
// `SharedTick` darauf zu.

use core::cell::RefCell;

use badge_core::{
    BadgeError, EdgeOutcome, PinBank, SharedState, TickSource, on_button_edge, on_tick,
};
use critical_section::Mutex;
use defmt::{info, warn};
use esp_hal::handler;

use crate::WakeSignal;
use crate::hal::{ButtonLine, GpioPinBank, PovTimer};

/// Zustand, den Handler und Hauptschleife teilen
pub static SHARED: SharedState = SharedState::new();

/// Weckt die Hauptschleife aus dem Schlafmodus
pub static WAKE: WakeSignal = WakeSignal::new();

static PIN_BANK: Mutex<RefCell<Option<GpioPinBank>>> = Mutex::new(RefCell::new(None));
static POV_TIMER: Mutex<RefCell<Option<PovTimer>>> = Mutex::new(RefCell::new(None));
static BUTTON: Mutex<RefCell<Option<ButtonLine>>> = Mutex::new(RefCell::new(None));

/// Übergibt die Peripherie an die Handler
///
/// Muss vor dem Start der Hauptschleife aufgerufen werden. Vorher laufen
/// die Handler ins Leere.
pub fn install(pins: GpioPinBank, timer: PovTimer, button: ButtonLine) {
    critical_section::with(|cs| {
        PIN_BANK.borrow_ref_mut(cs).replace(pins);
        POV_TIMER.borrow_ref_mut(cs).replace(timer);
        BUTTON.borrow_ref_mut(cs).replace(button);
    });
}

/// Tick-Handler: Multiplexer eine Position weiter
#[handler(priority = crate::config::BADGE_IRQ_PRIORITY)]
pub fn pov_tick_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = POV_TIMER.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
        if let Some(pins) = PIN_BANK.borrow_ref_mut(cs).as_mut() {
            on_tick(&SHARED, pins);
        }
    });
}

/// GPIO-Handler: fallende Flanke am Button
#[handler(priority = crate::config::BADGE_IRQ_PRIORITY)]
pub fn button_handler() {
    let outcome = critical_section::with(|cs| {
        let mut button = BUTTON.borrow_ref_mut(cs);
        match button.as_mut() {
            Some(line) if line.is_interrupt_set() => Some(on_button_edge(&SHARED, line)),
            _ => None,
        }
    });

    match outcome {
        Some(EdgeOutcome::Advanced(index)) => {
            info!("Button: animation {}", index);
            WAKE.signal(());
        }
        Some(EdgeOutcome::Ignored) => WAKE.signal(()),
        None => warn!("Button: spurious GPIO interrupt"),
    }
}

// ============================================================================
// Handles für die Hauptschleife
// ============================================================================

/// Pin-Bank-Handle für die Hauptschleife
pub struct SharedPinBank;

impl PinBank for SharedPinBank {
    fn set_pin_directions(&mut self, mask: u8) {
        critical_section::with(|cs| {
            if let Some(pins) = PIN_BANK.borrow_ref_mut(cs).as_mut() {
                pins.set_pin_directions(mask);
            }
        });
    }

    fn set_pin_levels(&mut self, mask: u8) {
        critical_section::with(|cs| {
            if let Some(pins) = PIN_BANK.borrow_ref_mut(cs).as_mut() {
                pins.set_pin_levels(mask);
            }
        });
    }
}

/// Tick-Timer-Handle für die Hauptschleife
pub struct SharedTick;

impl TickSource for SharedTick {
    fn start(&mut self) -> Result<(), BadgeError> {
        critical_section::with(|cs| match POV_TIMER.borrow_ref_mut(cs).as_mut() {
            Some(timer) => timer.start(),
            None => Err(BadgeError::TickStartFailed),
        })
    }

    fn stop(&mut self) {
        critical_section::with(|cs| {
            if let Some(timer) = POV_TIMER.borrow_ref_mut(cs).as_mut() {
                timer.stop();
            }
        });
    }

    fn is_running(&self) -> bool {
        critical_section::with(|cs| {
            POV_TIMER
                .borrow_ref(cs)
                .as_ref()
                .is_some_and(|timer| timer.is_running())
        })
    }
}

// POV-Tick über einen Hardware-Timer
//
// Der Timer feuert alle POV_TICK_MICROS einen Interrupt, der Handler
// schaltet den Multiplexer weiter.

use badge_core::{BadgeError, TickSource};
use esp_hal::Blocking;
use esp_hal::interrupt::InterruptHandler;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;

/// Periodischer Tick-Timer
///
/// Merkt sich, ob er läuft: ein erneutes `start()` würde den Zähler
/// zurücksetzen und den Scan-Takt verschieben.
pub struct PovTimer {
    timer: PeriodicTimer<'static, Blocking>,
    period: Duration,
    running: bool,
}

impl PovTimer {
    /// Erstellt einen neuen PovTimer
    ///
    /// # Parameter
    /// - `timer`: Periodischer Timer (z.B. TIMG1 timer0)
    /// - `period_micros`: Tick-Periode in Mikrosekunden
    /// - `handler`: Interrupt-Handler, der bei jedem Tick läuft
    pub fn new(
        mut timer: PeriodicTimer<'static, Blocking>,
        period_micros: u64,
        handler: InterruptHandler,
    ) -> Self {
        timer.set_interrupt_handler(handler);
        timer.listen();
        Self {
            timer,
            period: Duration::from_micros(period_micros),
            running: false,
        }
    }

    /// Interrupt-Flag löschen (aus dem Tick-Handler)
    pub fn clear_interrupt(&mut self) {
        self.timer.clear_interrupt();
    }
}

impl TickSource for PovTimer {
    fn start(&mut self) -> Result<(), BadgeError> {
        if self.running {
            return Ok(());
        }
        self.timer
            .start(self.period)
            .map_err(|_| BadgeError::TickStartFailed)?;
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        if self.running {
            // cancel() schlägt nur fehl, wenn der Timer nicht lief
            let _ = self.timer.cancel();
            self.running = false;
        }
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

// Badge Loop Task - Hauptschleife der Animations-Engine
use defmt::{error, info};
use embassy_time::{Duration, Timer};

use crate::config::{DEBOUNCE_SETTLE_MS, FRAME_INTERVAL_MS};
use crate::{AnimationEngine, LoopStep, PinBank, RandomSource, SharedState, TickSource, WakeSignal};

/// Badge Loop Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Pro Durchlauf:
/// - Debounce: Display aus, Settle-Zeit abwarten, Flag löschen
/// - Idle: Tick aus, Pins hochohmig, schlafen bis zum Button-Interrupt
/// - sonst: einen Frame der aktiven Animation berechnen
///
/// Danach immer das Frame-Intervall abwarten. Während der Wartezeiten
/// läuft der Tick-Interrupt weiter und hält das Display am Leben.
///
/// # Trait-basierte Abstraktion
/// Die generischen Parameter ermöglichen:
/// - Handles auf die echte Peripherie im Production-Code
/// - Mock Implementierungen in Tests
///
/// # Parameter
/// - `shared`: Zustand, den die Interrupt-Handler mitbenutzen
/// - `wake`: Signal vom Button-Handler
/// - `pins`, `tick`, `rng`: Hardware (oder Mock)
pub async fn badge_loop_logic<P, T, R>(
    shared: &SharedState,
    wake: &WakeSignal,
    mut pins: P,
    mut tick: T,
    mut rng: R,
) -> !
where
    P: PinBank,
    T: TickSource,
    R: RandomSource,
{
    let mut engine = AnimationEngine::new();

    loop {
        match engine.poll(shared, &mut pins, &mut tick, &mut rng) {
            Ok(LoopStep::Settle) => {
                info!("Debounce: settling, next {}", shared.animation());
                // Blockiert nur diese Schleife, der Tick läuft weiter
                Timer::after(Duration::from_millis(DEBOUNCE_SETTLE_MS)).await;
                engine.finish_settle(shared);
            }
            Ok(LoopStep::Sleep) => {
                info!("Idle: tick stopped, sleeping until button");
                wake.wait().await;
                info!("Idle: woke up");
            }
            Ok(LoopStep::Frame { .. }) => {}
            Err(e) => {
                error!("Frame failed: {}", e);
            }
        }

        Timer::after(Duration::from_millis(FRAME_INTERVAL_MS)).await;
    }
}

/// Badge Loop Task - Embassy Task für die Hauptschleife
///
/// Verbindet die Logik mit den geteilten Peripherie-Handles aus
/// `interrupts` und dem Hardware-RNG.
#[cfg(not(test))]
#[embassy_executor::task]
pub async fn badge_loop_task(rng: crate::hal::HardwareRandom) {
    use crate::interrupts::{SHARED, SharedPinBank, SharedTick, WAKE};

    badge_loop_logic(&SHARED, &WAKE, SharedPinBank, SharedTick, rng).await
}

// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Timing
// ============================================================================

/// Settle-Zeit nach einem Tastendruck in Millisekunden
/// Während dieser Zeit werden weitere Flanken als Prellen ignoriert
pub const DEBOUNCE_SETTLE_MS: u64 = 450;

/// Pause zwischen zwei Frames der Hauptschleife in Millisekunden
/// Begrenzt die Animations-Geschwindigkeit unabhängig vom POV-Tick
pub const FRAME_INTERVAL_MS: u64 = 50;

/// Periode des POV-Ticks in Mikrosekunden
/// 65536 Takte bei 8 MHz = 8,192 ms, ein voller Scan über 8 LEDs ≈ 65 ms
pub const POV_TICK_MICROS: u64 = 8_192;

// ============================================================================
// Pin-Zuordnung
// ============================================================================

/// GPIO-Pin für den Button (active-low, interner Pull-up)
/// GPIO9 ist der BOOT-Button auf den meisten ESP32-C6 Boards
pub const BUTTON_GPIO_PIN: u8 = 9;

/// GPIO-Pins der LED-Leitungen, Bit 0, 1, 2, 4, 5 der Pin-Bank
/// Bit 3 ist die Button-Leitung und hat keinen LED-Pin
pub const LED_LINE_GPIO_PINS: [u8; 5] = [0, 1, 2, 3, 4];

// ============================================================================
// Interrupts
// ============================================================================

/// Priorität von Tick- und Button-Handler
/// Beide gleich, damit sich die Handler nicht gegenseitig unterbrechen
pub const BADGE_IRQ_PRIORITY: esp_hal::interrupt::Priority =
    esp_hal::interrupt::Priority::Priority1;

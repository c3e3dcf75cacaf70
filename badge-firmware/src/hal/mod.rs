// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus badge-core für die ESP32-C6 Peripherie.

pub mod button;
pub mod pin_bank;
pub mod random;
pub mod tick;

pub use button::ButtonLine;
#[cfg(not(test))]
pub use pin_bank::GpioPinBank;
pub use random::HardwareRandom;
pub use tick::PovTimer;

#[cfg(test)]
pub use pin_bank::MockPinBank;

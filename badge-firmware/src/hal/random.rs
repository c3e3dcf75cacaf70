// Zufallsquelle für die Random-Animation

use badge_core::RandomSource;
use esp_hal::rng::Rng;

/// Hardware-RNG des ESP32-C6
pub struct HardwareRandom {
    rng: Rng,
}

impl HardwareRandom {
    pub fn new(rng: Rng) -> Self {
        Self { rng }
    }
}

impl RandomSource for HardwareRandom {
    fn next_byte(&mut self) -> u8 {
        (self.rng.random() & 0xFF) as u8
    }
}

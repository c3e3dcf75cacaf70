//! Core Types für das Badge
//!
//! Datenstrukturen ohne Hardware-Dependencies

use crate::traits::BadgeError;

/// Höchster Animations-Index (danach geht es wieder bei 1 los)
pub const MAX_ANIM: u8 = 9;

/// Anzahl der LEDs auf dem Badge
pub const LED_COUNT: u8 = 8;

/// Scan-Position des Multiplexers (1..=8)
///
/// Gibt an, welche LED der Multiplexer gerade einschalten darf.
/// Wird nur vom Tick-Handler weitergeschaltet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanPosition(u8);

impl ScanPosition {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(LED_COUNT);

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Nächste Position, 8 → 1
    pub const fn next(self) -> Self {
        if self.0 >= LED_COUNT {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }

    /// Liest einen Rohwert aus dem Shared State. Ungültige Werte
    /// landen auf der ersten Position statt abgelehnt zu werden.
    pub(crate) const fn from_raw_wrapping(raw: u8) -> Self {
        if raw >= 1 && raw <= LED_COUNT {
            Self(raw)
        } else {
            Self::FIRST
        }
    }
}

impl TryFrom<u8> for ScanPosition {
    type Error = BadgeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1..=LED_COUNT => Ok(Self(raw)),
            _ => Err(BadgeError::PositionOutOfRange(raw)),
        }
    }
}

/// Index der aktiven Animation (1..=9)
///
/// 1 ist der Schlafmodus, 2..=9 sind die eigentlichen Animationen.
/// Wird nur vom Button-Handler weitergeschaltet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationIndex(u8);

impl AnimationIndex {
    /// Schlafmodus
    pub const IDLE: Self = Self(1);
    /// Animation nach dem Einschalten
    pub const POWER_ON: Self = Self(2);

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Nächste Animation, nach MAX_ANIM wieder bei 1 (Schlafmodus)
    pub const fn next(self) -> Self {
        if self.0 >= MAX_ANIM {
            Self::IDLE
        } else {
            Self(self.0 + 1)
        }
    }

    pub const fn is_idle(self) -> bool {
        self.0 == Self::IDLE.0
    }

    pub const fn animation(self) -> Animation {
        match self.0 {
            2 => Animation::SolidAll,
            3 => Animation::SolidUpper,
            4 => Animation::SolidLower,
            5 => Animation::Chase,
            6 => Animation::ChaseReverse,
            7 => Animation::ChaseFast,
            8 => Animation::Wave,
            9 => Animation::Random,
            _ => Animation::Idle,
        }
    }

    pub(crate) const fn from_raw_wrapping(raw: u8) -> Self {
        if raw >= 1 && raw <= MAX_ANIM {
            Self(raw)
        } else {
            Self::IDLE
        }
    }
}

impl TryFrom<u8> for AnimationIndex {
    type Error = BadgeError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            1..=MAX_ANIM => Ok(Self(raw)),
            _ => Err(BadgeError::AnimationOutOfRange(raw)),
        }
    }
}

/// Die Animationen des Badges, in Button-Reihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Timer aus, alle Pins hochohmig, Schlaf bis zum nächsten Tastendruck
    Idle,
    /// Alle acht LEDs an
    SolidAll,
    /// L1..L6 an
    SolidUpper,
    /// L7 und L8 an
    SolidLower,
    /// Lauflicht, sechs Phasen à 5 Frames
    Chase,
    /// Wie `Chase`, andere Richtung
    ChaseReverse,
    /// Zwölf Phasen à 5 Zählerschritte, zwei Schritte pro Frame
    ChaseFast,
    /// Sechs Phasen à 4 Frames
    Wave,
    /// Zufallsmuster, jeder Frame neu
    Random,
}

impl Animation {
    pub const fn name(self) -> &'static str {
        match self {
            Animation::Idle => "Idle",
            Animation::SolidAll => "SolidAll",
            Animation::SolidUpper => "SolidUpper",
            Animation::SolidLower => "SolidLower",
            Animation::Chase => "Chase",
            Animation::ChaseReverse => "ChaseReverse",
            Animation::ChaseFast => "ChaseFast",
            Animation::Wave => "Wave",
            Animation::Random => "Random",
        }
    }
}

/// LED-Bitmap des Displays
///
/// `leds` hält L1 im MSB und L8 im LSB, genau wie die Masken der
/// Pattern-Tabellen. `enable` ist das globale Enable-Flag; es wird mit
/// der Bitmap zurückgesetzt, der Multiplexer wertet es nicht aus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayBitmap {
    pub leds: u8,
    pub enable: bool,
}

impl DisplayBitmap {
    /// Alle LEDs aus
    pub const OFF: Self = Self {
        leds: 0,
        enable: false,
    };

    pub const fn from_mask(leds: u8) -> Self {
        Self {
            leds,
            enable: false,
        }
    }

    /// Ist die LED an dieser Position eingeschaltet?
    ///
    /// Bit `i` der Maske gehört zu LED L(8-i).
    pub const fn is_lit(self, position: ScanPosition) -> bool {
        (self.leds >> (LED_COUNT - position.get())) & 0x01 == 1
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for AnimationIndex {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "#{} ({})", self.0, self.animation().name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ScanPosition {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "L{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayBitmap {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=u8:b}", self.leds)
    }
}

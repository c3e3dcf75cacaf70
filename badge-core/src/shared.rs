//! Shared State zwischen Interrupt-Handlern und Hauptschleife
//!
//! Jedes Feld hat genau einen Schreiber:
//!
//! | Feld           | schreibt                 | liest             |
//! |----------------|--------------------------|-------------------|
//! | Scan-Position  | Tick-Handler             | Tick-Handler      |
//! | Animation      | Button-Handler           | Hauptschleife     |
//! | Display-Bitmap | Hauptschleife            | Tick-Handler      |
//! | Debounce-Flag  | Button (setzen), Hauptschleife (löschen) | beide |
//!
//! Das Debounce-Flag ist das einzige Feld mit zwei Schreibern und wird
//! deshalb per Compare-and-Swap gesetzt.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::types::{AnimationIndex, DisplayBitmap, ScanPosition};

pub struct SharedState {
    position: AtomicU8,
    animation: AtomicU8,
    leds: AtomicU8,
    enable: AtomicBool,
    debounce: AtomicBool,
}

impl SharedState {
    /// Zustand nach dem Einschalten
    pub const fn new() -> Self {
        Self {
            position: AtomicU8::new(ScanPosition::FIRST.get()),
            animation: AtomicU8::new(AnimationIndex::POWER_ON.get()),
            leds: AtomicU8::new(0),
            enable: AtomicBool::new(false),
            debounce: AtomicBool::new(false),
        }
    }

    /// Setzt alle Felder auf den Einschaltzustand zurück
    pub fn reset(&self) {
        self.position
            .store(ScanPosition::FIRST.get(), Ordering::Relaxed);
        self.animation
            .store(AnimationIndex::POWER_ON.get(), Ordering::Relaxed);
        self.write_bitmap(DisplayBitmap::OFF);
        self.debounce.store(false, Ordering::Release);
    }

    pub fn scan_position(&self) -> ScanPosition {
        ScanPosition::from_raw_wrapping(self.position.load(Ordering::Relaxed))
    }

    /// Nur vom Tick-Handler aufrufen
    pub fn advance_scan_position(&self) -> ScanPosition {
        let next = self.scan_position().next();
        self.position.store(next.get(), Ordering::Relaxed);
        next
    }

    pub fn animation(&self) -> AnimationIndex {
        AnimationIndex::from_raw_wrapping(self.animation.load(Ordering::Acquire))
    }

    /// Nur vom Button-Handler aufrufen
    pub fn advance_animation(&self) -> AnimationIndex {
        let next = self.animation().next();
        self.animation.store(next.get(), Ordering::Release);
        next
    }

    pub fn bitmap(&self) -> DisplayBitmap {
        DisplayBitmap {
            leds: self.leds.load(Ordering::Relaxed),
            enable: self.enable.load(Ordering::Relaxed),
        }
    }

    /// Nur von der Hauptschleife aufrufen
    pub fn write_bitmap(&self, bitmap: DisplayBitmap) {
        self.leds.store(bitmap.leds, Ordering::Relaxed);
        self.enable.store(bitmap.enable, Ordering::Relaxed);
    }

    pub fn debounce_pending(&self) -> bool {
        self.debounce.load(Ordering::Acquire)
    }

    /// Setzt das Debounce-Flag, `false` wenn es schon gesetzt war
    pub fn try_begin_debounce(&self) -> bool {
        self.debounce
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Löscht das Debounce-Flag nach der Settle-Zeit
    pub fn end_debounce(&self) {
        self.debounce.store(false, Ordering::Release);
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

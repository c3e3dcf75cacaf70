//! Integration Tests für die Badge-Logik
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Implementierungen
//! der Hardware-Traits

use badge_core::{
    ALL_PINS_RELEASED, AnimationEngine, AnimationIndex, BadgeError, DisplayBitmap, EdgeInterrupt,
    EdgeOutcome, LoopStep, MAX_ANIM, PinBank, RandomSource, ScanPosition, SharedState,
    TickSource, on_button_edge, on_tick, render_current_position,
};

// ============================================================================
// Mocks
// ============================================================================

#[derive(Default)]
pub struct MockPinBank {
    pub directions: Option<u8>,
    pub levels: Option<u8>,
    pub write_count: usize,
}

impl MockPinBank {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PinBank for MockPinBank {
    fn set_pin_directions(&mut self, mask: u8) {
        self.directions = Some(mask);
        self.write_count += 1;
    }

    fn set_pin_levels(&mut self, mask: u8) {
        self.levels = Some(mask);
        self.write_count += 1;
    }
}

#[derive(Default)]
pub struct MockTickSource {
    pub running: bool,
    pub start_count: usize,
    pub fail_next_start: bool,
}

impl TickSource for MockTickSource {
    fn start(&mut self) -> Result<(), BadgeError> {
        if self.fail_next_start {
            self.fail_next_start = false;
            return Err(BadgeError::TickStartFailed);
        }
        if !self.running {
            self.running = true;
            self.start_count += 1;
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

#[derive(Default)]
pub struct MockEdgeInterrupt {
    pub masked: bool,
    pub pending: bool,
}

impl MockEdgeInterrupt {
    /// Simuliert eine fallende Flanke
    pub fn fire(&mut self, shared: &SharedState) -> EdgeOutcome {
        self.pending = true;
        on_button_edge(shared, self)
    }
}

impl EdgeInterrupt for MockEdgeInterrupt {
    fn mask(&mut self) {
        self.masked = true;
    }

    fn unmask(&mut self) {
        self.masked = false;
    }

    fn clear_pending(&mut self) {
        self.pending = false;
    }
}

/// Liefert eine feste Byte-Folge, danach wieder von vorn
pub struct SequenceRandom {
    bytes: &'static [u8],
    next: usize,
}

impl SequenceRandom {
    pub fn new(bytes: &'static [u8]) -> Self {
        Self { bytes, next: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn next_byte(&mut self) -> u8 {
        let byte = self.bytes[self.next % self.bytes.len()];
        self.next += 1;
        byte
    }
}

struct Badge {
    shared: SharedState,
    engine: AnimationEngine,
    pins: MockPinBank,
    tick: MockTickSource,
    rng: SequenceRandom,
    button: MockEdgeInterrupt,
}

impl Badge {
    fn new() -> Self {
        Self {
            shared: SharedState::new(),
            engine: AnimationEngine::new(),
            pins: MockPinBank::new(),
            tick: MockTickSource::default(),
            rng: SequenceRandom::new(&[0x5A, 0xC3, 0x0F]),
            button: MockEdgeInterrupt::default(),
        }
    }

    /// Badge mit aktiver Animation `raw` und gelöschtem Debounce-Flag
    fn with_animation(raw: u8) -> Self {
        let badge = Self::new();
        while badge.shared.animation().get() != raw {
            badge.shared.advance_animation();
        }
        badge
    }

    fn poll(&mut self) -> LoopStep {
        self.engine
            .poll(&self.shared, &mut self.pins, &mut self.tick, &mut self.rng)
            .unwrap()
    }

    /// Drückt den Button und arbeitet die Settle-Phase ab
    fn press(&mut self) {
        self.button.fire(&self.shared);
        assert_eq!(self.poll(), LoopStep::Settle);
        self.engine.finish_settle(&self.shared);
    }

    /// Frame-Zähler per Frames auf `target` bringen
    fn run_until_steps(&mut self, target: u8) {
        for _ in 0..200 {
            if self.engine.steps() == target {
                return;
            }
            self.poll();
        }
        panic!("steps never reached {target}");
    }

    fn frame_mask(&mut self) -> u8 {
        match self.poll() {
            LoopStep::Frame {
                mask: Some(mask), ..
            } => mask,
            other => panic!("Expected frame with mask, got {other:?}"),
        }
    }
}

// ============================================================================
// Tests: Pattern-Tabellen
// ============================================================================

/// (Animation, Inklusiv-Bereich des Zählers, Maske)
const TIMED_TABLE: &[(u8, u8, u8, u8)] = &[
    (5, 0, 4, 0b1000_0010),
    (5, 5, 9, 0b0100_0001),
    (5, 10, 14, 0b0010_0010),
    (5, 15, 19, 0b0001_0001),
    (5, 20, 24, 0b0000_1010),
    (5, 25, 29, 0b0000_0101),
    (6, 0, 4, 0b0000_0101),
    (6, 5, 9, 0b0000_1010),
    (6, 10, 14, 0b0001_0001),
    (6, 15, 19, 0b0010_0010),
    (6, 20, 24, 0b0100_0001),
    (6, 25, 29, 0b1000_0010),
    (7, 0, 4, 0b0000_0111),
    (7, 5, 9, 0b0000_1011),
    (7, 10, 14, 0b0001_0011),
    (7, 15, 19, 0b0010_0011),
    (7, 20, 24, 0b0100_0011),
    (7, 25, 29, 0b1000_0000),
    (7, 30, 34, 0b1000_0011),
    (7, 35, 39, 0b0100_0011),
    (7, 40, 44, 0b0010_0011),
    (7, 45, 49, 0b0001_0011),
    (7, 50, 54, 0b0000_1011),
    (7, 55, 59, 0b0000_0100),
    (8, 0, 3, 0b0011_0011),
    (8, 4, 7, 0b0100_1000),
    (8, 8, 11, 0b1000_0110),
    (8, 12, 15, 0b1000_0101),
    (8, 16, 19, 0b0100_1011),
    (8, 20, 23, 0b0011_0000),
];

fn expected_mask(animation: u8, steps: u8) -> u8 {
    TIMED_TABLE
        .iter()
        .find(|(anim, lo, hi, _)| *anim == animation && (*lo..=*hi).contains(&steps))
        .map(|(_, _, _, mask)| *mask)
        .unwrap()
}

#[test]
fn test_timed_animations_follow_table() {
    for animation in 5..=8 {
        let mut badge = Badge::with_animation(animation);
        let mut seen = 0;

        // Eine volle Periode: jeder Frame muss zum Tabellenwert passen
        loop {
            let steps = badge.engine.steps();
            let mask = badge.frame_mask();
            assert_eq!(
                mask,
                expected_mask(animation, steps),
                "animation {animation}, steps {steps}"
            );
            assert_eq!(badge.shared.bitmap(), DisplayBitmap::from_mask(mask));
            seen += 1;
            if badge.engine.steps() == 0 {
                break;
            }
        }

        // 7 zählt in Zweierschritten bis 60, also auch 30 Frames
        let expected_frames = if animation == 8 { 24 } else { 30 };
        assert_eq!(seen, expected_frames, "animation {animation}");
    }
}

#[test]
fn test_solid_animations() {
    for (animation, mask) in [(2, 0b1111_1111), (3, 0b1111_1100), (4, 0b0000_0011)] {
        let mut badge = Badge::with_animation(animation);
        for _ in 0..3 {
            assert_eq!(badge.frame_mask(), mask);
        }
        assert_eq!(badge.engine.steps(), 0);
    }
}

#[test]
fn test_random_animation_draws_one_byte_per_frame() {
    let mut badge = Badge::with_animation(9);
    assert_eq!(badge.frame_mask(), 0x5A);
    assert_eq!(badge.frame_mask(), 0xC3);
    assert_eq!(badge.frame_mask(), 0x0F);
    assert_eq!(badge.engine.steps(), 0);
}

// ============================================================================
// Tests: Szenarien
// ============================================================================

#[test]
fn test_chase_scenario() {
    let mut badge = Badge::with_animation(5);
    assert_eq!(badge.frame_mask(), 0b1000_0010);

    badge.run_until_steps(5);
    assert_eq!(badge.frame_mask(), 0b0100_0001);

    badge.run_until_steps(29);
    badge.poll();
    assert_eq!(badge.engine.steps(), 0);
}

#[test]
fn test_chase_fast_scenario() {
    let mut badge = Badge::with_animation(7);
    badge.run_until_steps(58);
    assert_eq!(badge.frame_mask(), 0b0000_0100);
    // 58 + 2 = 60 → 0
    assert_eq!(badge.engine.steps(), 0);
    assert_eq!(badge.frame_mask(), 0b0000_0111);
    assert_eq!(badge.engine.steps(), 2);
}

#[test]
fn test_stale_steps_hold_previous_bitmap() {
    let mut badge = Badge::with_animation(7);
    badge.run_until_steps(40);
    let held = badge.shared.bitmap();

    // Animationswechsel ohne Debounce (Flanke zwischen Prüfung und Dispatch)
    badge.shared.advance_animation();
    assert_eq!(badge.shared.animation().get(), 8);

    let step = badge.poll();
    assert_eq!(
        step,
        LoopStep::Frame {
            animation: AnimationIndex::try_from(8).unwrap(),
            mask: None
        }
    );
    assert_eq!(badge.shared.bitmap(), held);
    assert_eq!(badge.engine.steps(), 0);
    assert_eq!(badge.frame_mask(), 0b0011_0011);
}

// ============================================================================
// Tests: Debounce
// ============================================================================

#[test]
fn test_debounce_blanks_display_and_resets_steps() {
    let mut badge = Badge::with_animation(5);
    badge.run_until_steps(12);
    assert_ne!(badge.shared.bitmap(), DisplayBitmap::OFF);

    badge.button.fire(&badge.shared);
    assert_eq!(badge.poll(), LoopStep::Settle);
    assert_eq!(badge.shared.bitmap(), DisplayBitmap::OFF);
    assert_eq!(badge.engine.steps(), 0);

    // Ohne finish_settle bleibt es beim Settle
    assert_eq!(badge.poll(), LoopStep::Settle);

    badge.engine.finish_settle(&badge.shared);
    assert_eq!(badge.frame_mask(), 0b0000_0101);
}

#[test]
fn test_edge_during_debounce_is_ignored() {
    let badge = Badge::with_animation(4);
    let mut button = MockEdgeInterrupt::default();

    assert_eq!(
        button.fire(&badge.shared),
        EdgeOutcome::Advanced(AnimationIndex::try_from(5).unwrap())
    );
    for _ in 0..5 {
        assert_eq!(button.fire(&badge.shared), EdgeOutcome::Ignored);
    }
    assert_eq!(badge.shared.animation().get(), 5);
    assert!(!button.pending);
    assert!(!button.masked);
}

#[test]
fn test_presses_cycle_through_all_animations() {
    let mut badge = Badge::new();
    let mut visited = [0u8; 10];

    for i in 0..(2 * MAX_ANIM as usize) {
        badge.press();
        let index = badge.shared.animation().get();
        assert!((1..=MAX_ANIM).contains(&index));
        visited[i % MAX_ANIM as usize] = index;
    }
    // Nach 9 → 1
    assert_eq!(&visited[..9], &[3, 4, 5, 6, 7, 8, 9, 1, 2]);
}

// ============================================================================
// Tests: Idle
// ============================================================================

#[test]
fn test_idle_stops_tick_and_releases_pins() {
    let mut badge = Badge::with_animation(9);
    badge.poll();
    assert!(badge.tick.is_running());

    badge.press();
    assert!(badge.shared.animation().is_idle());
    assert_eq!(badge.poll(), LoopStep::Sleep);
    assert!(!badge.tick.is_running());
    assert_eq!(badge.pins.directions, Some(ALL_PINS_RELEASED));

    // Aufwachen durch den nächsten Tastendruck
    badge.press();
    badge.poll();
    assert!(badge.tick.is_running());
}

#[test]
fn test_non_idle_animations_keep_tick_running() {
    for animation in 2..=MAX_ANIM {
        let mut badge = Badge::with_animation(animation);
        badge.poll();
        badge.poll();
        assert!(badge.tick.is_running(), "animation {animation}");
        assert_eq!(badge.tick.start_count, 1);
    }
}

#[test]
fn test_tick_start_failure_is_reported() {
    let mut badge = Badge::new();
    badge.tick.fail_next_start = true;

    let result = badge
        .engine
        .poll(&badge.shared, &mut badge.pins, &mut badge.tick, &mut badge.rng);
    assert_eq!(result, Err(BadgeError::TickStartFailed));

    // Nächster Durchlauf versucht es erneut
    assert_eq!(badge.frame_mask(), 0b1111_1111);
    assert!(badge.tick.is_running());
}

// ============================================================================
// Tests: Multiplexer
// ============================================================================

const PIN_TABLE: [(u8, u8); 8] = [
    (0b0010_1011, 0b0000_0100),
    (0b0000_1111, 0b0001_0000),
    (0b0010_1011, 0b0001_0000),
    (0b0000_1111, 0b0010_0000),
    (0b0001_1011, 0b0000_0100),
    (0b0001_1011, 0b0010_0000),
    (0b0011_1100, 0b0000_0001),
    (0b0011_1100, 0b0000_0010),
];

#[test]
fn test_multiplexer_energizes_each_position() {
    let shared = SharedState::new();
    shared.write_bitmap(DisplayBitmap::from_mask(0xFF));
    let mut pins = MockPinBank::new();

    // Start auf Position 1, der erste Tick geht auf 2
    for i in 0..8 {
        on_tick(&shared, &mut pins);
        let position = shared.scan_position().get();
        assert_eq!(position, (i + 1) % 8 + 1);

        let (directions, levels) = PIN_TABLE[(position - 1) as usize];
        assert_eq!(pins.directions, Some(directions));
        assert_eq!(pins.levels, Some(levels));
    }
}

#[test]
fn test_multiplexer_releases_pins_for_dark_led() {
    let shared = SharedState::new();
    // nur L1 an
    shared.write_bitmap(DisplayBitmap::from_mask(0b1000_0000));
    let mut pins = MockPinBank::new();

    render_current_position(&shared, &mut pins);
    assert_eq!(pins.levels, Some(0b0000_0100));

    let mut pins = MockPinBank::new();
    on_tick(&shared, &mut pins);
    assert_eq!(shared.scan_position().get(), 2);
    assert_eq!(pins.directions, Some(ALL_PINS_RELEASED));
    assert_eq!(pins.levels, None);
    assert_eq!(pins.write_count, 1);
}

#[test]
fn test_scan_position_stays_in_range() {
    let shared = SharedState::new();
    let mut pins = MockPinBank::new();
    let mut position = ScanPosition::FIRST;

    for _ in 0..100 {
        on_tick(&shared, &mut pins);
        position = position.next();
        assert_eq!(shared.scan_position(), position);
        assert!((1..=8).contains(&shared.scan_position().get()));
    }
}

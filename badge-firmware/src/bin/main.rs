// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Flex, Input, InputConfig, Io, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;

// Logging
use defmt::info;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use badge_firmware::config::POV_TICK_MICROS;
use badge_firmware::hal::{ButtonLine, GpioPinBank, HardwareRandom, PovTimer};
use badge_firmware::interrupts::{self, SHARED, button_handler, pov_tick_handler};
use badge_firmware::tasks::badge_loop_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, registriert die Interrupt-Handler, startet die
/// Embassy Runtime und spawnt die Hauptschleife.
/// Danach schläft main() - alle Arbeit läuft in Task und Interrupts.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("Badge: booting");

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Einschaltzustand: Position 1, Animation 2, Display aus
    SHARED.reset();

    // LED-Leitungen (Bit 0, 1, 2, 4, 5 der Pin-Bank), alle hochohmig
    let pins = GpioPinBank::new([
        Flex::new(peripherals.GPIO0),
        Flex::new(peripherals.GPIO1),
        Flex::new(peripherals.GPIO2),
        Flex::new(peripherals.GPIO3),
        Flex::new(peripherals.GPIO4),
    ]);

    // POV-Tick auf TIMG1 (TIMG0 gehört esp-rtos)
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    let pov_timer = PovTimer::new(
        PeriodicTimer::new(timg1.timer0),
        POV_TICK_MICROS,
        pov_tick_handler,
    );

    // Button: fallende Flanke mit internem Pull-up
    let mut io = Io::new(peripherals.IO_MUX);
    io.set_interrupt_handler(button_handler);
    let button = ButtonLine::new(Input::new(
        peripherals.GPIO9,
        InputConfig::default().with_pull(Pull::Up),
    ));

    // Ab hier können die Handler feuern
    interrupts::install(pins, pov_timer, button);
    info!("Badge: interrupts installed, starting animation {}", SHARED.animation());

    // Hauptschleife spawnen
    spawner
        .spawn(badge_loop_task(HardwareRandom::new(Rng::new())))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Task und Interrupts)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}

// Task-Modul: Enthält die Embassy Tasks
//
// Tick und Button laufen als Interrupt-Handler (siehe interrupts.rs),
// hier läuft nur die Hauptschleife.

pub mod badge_loop;

// Re-export Tasks für einfachen Import
pub use badge_loop::badge_loop_logic;
#[cfg(not(test))]
pub use badge_loop::badge_loop_task;

//! Binary clock for the ATtiny85
//!
//! The time is shown on a 4x4 LED matrix, one column per digit of `HH:MM`
//! and one row per binary place. The matrix is multiplexed one row per
//! 2 ms timer tick through an 8-bit shift register, and two buttons set the
//! hours and minutes.
//!
//! Everything except `hal` is hardware independent and talks to pins
//! through `embedded-hal`, so it runs (and is tested) on the host too.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod error;
pub mod logger;
pub mod time;

#[cfg(feature = "rt")]
pub mod hal;

pub use application::{BinaryClock, TickOutcome, Timing};
pub use drivers::{Button, ButtonEvent, ButtonHandler, Debouncer, Frame, RowScanner, ShiftOut, ShiftRegister, WiringTable};
pub use error::{Error, TimeError, WiringError};
pub use logger::{Event, LogEntry, LogType, Logger};
pub use time::ClockTime;

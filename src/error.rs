//! Error types
//!
//! Time keeping itself cannot fail. What can fail is pin I/O behind the
//! `embedded-hal` traits, an invalid start time, or a malformed wiring table
//! (caught while compiling the shipped configuration).

use core::fmt;

/// Failure of one of the lines driven or sampled during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<D, B> {
    /// Data, clock or latch line of the shift register
    Display(D),
    /// Hours or minutes button input
    Button(B),
}

impl<D: fmt::Debug, B: fmt::Debug> fmt::Display for Error<D, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Display(e) => write!(f, "shift register line failed: {:?}", e),
            Error::Button(e) => write!(f, "button input failed: {:?}", e),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeError {
    HourOutOfRange(u8),
    MinuteOutOfRange(u8),
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::HourOutOfRange(h) => write!(f, "hour {} is not in 0..=23", h),
            TimeError::MinuteOutOfRange(m) => write!(f, "minute {} is not in 0..=59", m),
        }
    }
}

/// Malformed row/column wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WiringError {
    /// A pin index does not fit in the 8-bit output word
    BitOutOfRange(u8),
    /// Two lines share the same output bit
    Collision(u8),
}

impl fmt::Display for WiringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WiringError::BitOutOfRange(bit) => {
                write!(f, "output bit {} does not exist on an 8-bit register", bit)
            }
            WiringError::Collision(bit) => {
                write!(f, "output bit {} is wired to more than one line", bit)
            }
        }
    }
}

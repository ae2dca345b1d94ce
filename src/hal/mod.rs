//! ATtiny85 peripherals used by the firmware

pub mod gpio;
pub mod power;
pub mod timer;

// Re-export commonly used types
pub use gpio::{Input, Output, Pin, Pins};
pub use power::{Power, SleepMode};
pub use timer::{Prescaler, Timer0};

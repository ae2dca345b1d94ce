pub mod button_handler;
pub mod led_matrix;
pub mod shift_register;
pub mod wiring;

pub use button_handler::{Button, ButtonEvent, ButtonHandler, Debouncer};
pub use led_matrix::Frame;
pub use shift_register::{RowScanner, ShiftOut, ShiftRegister};
pub use wiring::WiringTable;

//! Configuration constants for the ATtiny85 binary clock

use crate::drivers::wiring::WiringTable;

/// CPU frequency in Hz (internal RC oscillator, CKDIV8 fuse set)
pub const CPU_FREQ_HZ: u32 = 1_000_000;

/// Timer 0 clock divider
pub const TIMER_PRESCALER: u32 = 8;

/// Timer 0 compare value in CTC mode; the counter runs 0..=TIMER_COMPARE
pub const TIMER_COMPARE: u8 = 249;

/// Period of the compare-match interrupt in milliseconds
pub const TICK_MS: u16 =
    (TIMER_PRESCALER * (TIMER_COMPARE as u32 + 1) * 1000 / CPU_FREQ_HZ) as u16;

/// Milliseconds between two natural minute advances
pub const MINUTE_MS: u16 = 60_000;

/// Number of multiplexed rows (and columns) of the LED matrix
pub const NB_ROWS: usize = 4;
pub const NB_COLS: usize = 4;

/// PORTB bit positions
pub const DATA_PIN: u8 = 0;
pub const LATCH_PIN: u8 = 1;
pub const CLK_PIN: u8 = 2;
pub const BUTTON_HOURS_PIN: u8 = 3;
pub const BUTTON_MINUTES_PIN: u8 = 4;

/// Shift register output bits strobing each row
pub const ROW_PINS: [u8; NB_ROWS] = [1, 3, 5, 7];

/// Shift register output bits sinking each column (active low)
pub const COL_PINS: [u8; NB_COLS] = [2, 4, 6, 0];

/// Board wiring, validated while compiling
pub const WIRING: WiringTable = match WiringTable::new(ROW_PINS, COL_PINS) {
    Ok(wiring) => wiring,
    Err(_) => panic!("ROW_PINS and COL_PINS must be distinct bits in 0..8"),
};

/// Most recent events kept in the log
pub const LOG_CAPACITY: usize = 8;

const _: () = assert!(TICK_MS > 0, "timer period rounds down to 0 ms");
const _: () = assert!(
    MINUTE_MS % TICK_MS == 0,
    "timer period must divide a minute exactly"
);
const _: () = assert!(
    TIMER_PRESCALER * (TIMER_COMPARE as u32 + 1) * 1000 % CPU_FREQ_HZ == 0,
    "timer period is not a whole number of milliseconds"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_timer_gives_two_ms_ticks() {
        assert_eq!(CPU_FREQ_HZ, 1_000_000);
        assert_eq!(TICK_MS, 2);
        assert_eq!(MINUTE_MS / TICK_MS, 30_000);
    }
}

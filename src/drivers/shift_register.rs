//! Bit-banged 8-bit serial-in/parallel-out register and the row scanner
//! that multiplexes the matrix through it

use crate::config::NB_ROWS;
use embedded_hal::digital::v2::OutputPin;

/// Something that can present an 8-bit word on the matrix lines.
pub trait ShiftOut {
    type Error;

    fn shift_out(&mut self, word: u8) -> Result<(), Self::Error>;
}

/// 74HC595-style register on three GPIO lines.
///
/// Outputs only change on the rising edge of the latch line, so no partial
/// word is ever visible on the LEDs.
pub struct ShiftRegister<DATA, CLOCK, LATCH> {
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
}

impl<DATA, CLOCK, LATCH, E> ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    pub fn release(self) -> (DATA, CLOCK, LATCH) {
        (self.data, self.clock, self.latch)
    }
}

impl<DATA, CLOCK, LATCH, E> ShiftOut for ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    type Error = E;

    /// Sends `word` MSB first, then commits it to the outputs.
    fn shift_out(&mut self, word: u8) -> Result<(), E> {
        self.latch.set_low()?;

        for bit_pos in (0..8).rev() {
            if (word >> bit_pos) & 1 != 0 {
                self.data.set_high()?;
            } else {
                self.data.set_low()?;
            }

            self.clock.set_high()?;
            self.clock.set_low()?;
        }

        self.latch.set_high()
    }
}

/// Cursor over the matrix rows; one row is refreshed per tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowScanner {
    row_id: u8,
}

impl RowScanner {
    pub const fn new() -> Self {
        Self { row_id: 0 }
    }

    /// Row that the next call to [`refresh`](Self::refresh) will show
    #[inline]
    pub fn current_row(&self) -> usize {
        self.row_id as usize
    }

    /// Shifts out the current row's word and moves on to the next row.
    ///
    /// Returns the row that was shown. The cursor only advances once the
    /// word has been latched.
    pub fn refresh<S: ShiftOut>(
        &mut self,
        words: &[u8; NB_ROWS],
        register: &mut S,
    ) -> Result<usize, S::Error> {
        let shown = self.current_row();
        register.shift_out(words[shown])?;
        self.row_id = ((shown + 1) % NB_ROWS) as u8;
        Ok(shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Default)]
    struct Recorder {
        words: [u8; 8],
        len: usize,
    }

    impl ShiftOut for Recorder {
        type Error = Infallible;

        fn shift_out(&mut self, word: u8) -> Result<(), Infallible> {
            self.words[self.len] = word;
            self.len += 1;
            Ok(())
        }
    }

    #[test]
    fn scanner_cycles_through_rows() {
        let words = [0x10, 0x20, 0x30, 0x40];
        let mut scanner = RowScanner::new();
        let mut recorder = Recorder::default();

        let shown: [usize; 6] = core::array::from_fn(|_| scanner.refresh(&words, &mut recorder).unwrap());

        assert_eq!(shown, [0, 1, 2, 3, 0, 1]);
        assert_eq!(&recorder.words[..6], &[0x10, 0x20, 0x30, 0x40, 0x10, 0x20]);
        assert_eq!(scanner.current_row(), 2);
    }
}

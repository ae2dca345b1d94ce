//! Mapping from matrix rows to shift register output words
//!
//! The register's parallel outputs are wired to rows and columns in no
//! particular order, so every line's bit position comes from a lookup table.
//! A row line is driven high to select it. A column line is driven low to
//! light the LED where it meets the selected row.

use super::led_matrix::Frame;
use crate::config::{NB_COLS, NB_ROWS};
use crate::error::WiringError;

/// Output bit position of every row and column line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WiringTable {
    rows: [u8; NB_ROWS],
    cols: [u8; NB_COLS],
}

impl WiringTable {
    /// Checks that every line has its own bit inside the 8-bit word.
    pub const fn new(rows: [u8; NB_ROWS], cols: [u8; NB_COLS]) -> Result<Self, WiringError> {
        let mut used: u8 = 0;

        let mut i = 0;
        while i < NB_ROWS + NB_COLS {
            let bit = if i < NB_ROWS { rows[i] } else { cols[i - NB_ROWS] };
            if bit >= 8 {
                return Err(WiringError::BitOutOfRange(bit));
            }
            if used & (1 << bit) != 0 {
                return Err(WiringError::Collision(bit));
            }
            used |= 1 << bit;
            i += 1;
        }

        Ok(Self { rows, cols })
    }

    /// Word that selects `row_id` and lights the columns set in `row_bits`.
    ///
    /// Bit `3 - col` of `row_bits` drives column `col`. Bits above 3 are
    /// ignored.
    pub fn encode_row(&self, row_id: usize, row_bits: u8) -> u8 {
        let mut word = 1 << self.rows[row_id];

        // An on LED means a LOW column
        let inv_row_bits = !row_bits;

        for (col_id, &pin) in self.cols.iter().enumerate() {
            let bit_pos = NB_COLS - 1 - col_id;
            word |= ((inv_row_bits >> bit_pos) & 1) << pin;
        }

        word
    }

    /// One word per row, in scan order
    pub fn encode_frame(&self, frame: &Frame) -> [u8; NB_ROWS] {
        let mut words = [0u8; NB_ROWS];
        for (row_id, word) in words.iter_mut().enumerate() {
            *word = self.encode_row(row_id, frame.row(row_id));
        }
        words
    }

    /// Recovers the row index and 4-bit row value from an encoded word.
    ///
    /// Returns `None` unless exactly one row line is high.
    pub fn decode_row(&self, word: u8) -> Option<(usize, u8)> {
        let mut selected = None;
        for (row_id, &pin) in self.rows.iter().enumerate() {
            if (word >> pin) & 1 != 0 {
                if selected.is_some() {
                    return None;
                }
                selected = Some(row_id);
            }
        }

        let row_id = selected?;
        let mut row_bits = 0;
        for (col_id, &pin) in self.cols.iter().enumerate() {
            let lit = (word >> pin) & 1 == 0;
            row_bits |= (lit as u8) << (NB_COLS - 1 - col_id);
        }

        Some((row_id, row_bits))
    }
}

use crate::config::{NB_COLS, NB_ROWS};
use crate::time::ClockTime;

/// Lit/unlit state of the 4x4 matrix.
///
/// Each column shows one digit of the time (hours tens, hours ones, minutes
/// tens, minutes ones from left to right) and each row one binary place of
/// those digits, most significant bit on row 0. A row is stored as a 4-bit
/// value whose bit 3 is column 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    rows: [u8; NB_ROWS],
}

impl Frame {
    pub const BLANK: Self = Self { rows: [0; NB_ROWS] };

    pub fn render(time: &ClockTime) -> Self {
        let digits = time.digits();
        let mut rows = [0u8; NB_ROWS];

        for (row_id, row) in rows.iter_mut().enumerate() {
            // Row 0 carries the MSB of every digit
            let bit_pos = (NB_ROWS - 1 - row_id) as u8;
            for (col_id, digit) in digits.iter().enumerate() {
                let bit = (digit >> bit_pos) & 1;
                *row |= bit << (NB_COLS - 1 - col_id);
            }
        }

        Self { rows }
    }

    pub const fn from_rows(rows: [u8; NB_ROWS]) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> [u8; NB_ROWS] {
        self.rows
    }

    #[inline]
    pub fn row(&self, row_id: usize) -> u8 {
        self.rows[row_id]
    }

    pub fn is_lit(&self, row_id: usize, col_id: usize) -> bool {
        (self.rows[row_id] >> (NB_COLS - 1 - col_id)) & 1 != 0
    }

    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }
}

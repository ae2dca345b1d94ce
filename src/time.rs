//! Time of day kept as four decimal digits

use crate::error::TimeError;
use ufmt::{uDisplay, uWrite, Formatter};

/// 24-hour time of day, one counter per displayed digit.
///
/// Every reachable value is a valid `HH:MM` between 00:00 and 23:59. The
/// digits are mutated only through [`advance_minute`](Self::advance_minute)
/// and [`advance_hour`](Self::advance_hour), whose rollover rules keep each
/// digit inside its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTime {
    h1: u8,
    h0: u8,
    min1: u8,
    min0: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self::new();

    pub const fn new() -> Self {
        Self {
            h1: 0,
            h0: 0,
            min1: 0,
            min0: 0,
        }
    }

    pub fn from_hm(hours: u8, minutes: u8) -> Result<Self, TimeError> {
        if hours > 23 {
            return Err(TimeError::HourOutOfRange(hours));
        }
        if minutes > 59 {
            return Err(TimeError::MinuteOutOfRange(minutes));
        }
        Ok(Self {
            h1: hours / 10,
            h0: hours % 10,
            min1: minutes / 10,
            min0: minutes % 10,
        })
    }

    #[inline]
    pub fn hours(&self) -> u8 {
        self.h1 * 10 + self.h0
    }

    #[inline]
    pub fn minutes(&self) -> u8 {
        self.min1 * 10 + self.min0
    }

    /// Digits in display order: hours tens, hours ones, minutes tens, minutes ones
    #[inline]
    pub fn digits(&self) -> [u8; 4] {
        [self.h1, self.h0, self.min1, self.min0]
    }

    /// True when both minute digits are zero
    #[inline]
    pub fn is_top_of_hour(&self) -> bool {
        self.min1 == 0 && self.min0 == 0
    }

    /// Adds one minute. 59 wraps to 00 without touching the hours; the
    /// caller decides whether that wrap carries.
    pub fn advance_minute(&mut self) {
        self.min0 += 1;
        if self.min0 == 10 {
            self.min0 = 0;
            self.min1 += 1;
            if self.min1 == 6 {
                self.min1 = 0;
            }
        }
    }

    /// Adds one hour, wrapping 23 to 00.
    pub fn advance_hour(&mut self) {
        self.h0 += 1;
        if self.h0 == 10 {
            self.h0 = 0;
            self.h1 += 1;
        } else if self.h1 == 2 && self.h0 == 4 {
            self.h0 = 0;
            self.h1 = 0;
        }
    }
}

impl uDisplay for ClockTime {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let [h1, h0, min1, min0] = self.digits();
        f.write_char((b'0' + h1) as char)?;
        f.write_char((b'0' + h0) as char)?;
        f.write_char(':')?;
        f.write_char((b'0' + min1) as char)?;
        f.write_char((b'0' + min0) as char)
    }
}

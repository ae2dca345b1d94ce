//! Event log kept in RAM
//!
//! Entries are recorded from the tick interrupt, so recording never formats
//! or blocks: it copies a small record into a fixed ring. Formatting happens
//! later, when somebody drains the ring into a `ufmt` writer.
//!
//! The firmware itself has no serial line to drain to, so a full ring
//! overwrites its oldest entry. RAM always holds the latest events, which is
//! what a debugger reading memory wants to see.

use crate::drivers::Button;
use crate::time::ClockTime;
use ufmt::{uWrite, uwrite, uwriteln};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    System = 0,
    Time = 1,
    Input = 2,
}

impl LogType {
    fn tag(self) -> &'static str {
        match self {
            LogType::System => "SYSTEM",
            LogType::Time => "TIME",
            LogType::Input => "INPUT",
        }
    }
}

/// Something worth reporting, with the time shown after it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Started(ClockTime),
    TimeSet(ClockTime),
    MinuteRollover(ClockTime),
    HourRollover(ClockTime),
    ButtonPressed(Button, ClockTime),
}

impl Event {
    pub fn log_type(&self) -> LogType {
        match self {
            Event::Started(_) | Event::TimeSet(_) => LogType::System,
            Event::MinuteRollover(_) | Event::HourRollover(_) => LogType::Time,
            Event::ButtonPressed(..) => LogType::Input,
        }
    }

    pub fn time(&self) -> ClockTime {
        match *self {
            Event::Started(t)
            | Event::TimeSet(t)
            | Event::MinuteRollover(t)
            | Event::HourRollover(t)
            | Event::ButtonPressed(_, t) => t,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Event::Started(_) => "started",
            Event::TimeSet(_) => "time set",
            Event::MinuteRollover(_) => "minute rollover",
            Event::HourRollover(_) => "hour rollover",
            Event::ButtonPressed(Button::Hours, _) => "hours button",
            Event::ButtonPressed(Button::Minutes, _) => "minutes button",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub uptime_ticks: u32,
    pub event: Event,
}

/// Fixed-capacity FIFO of log entries. When full, the oldest entry is
/// overwritten and counted as dropped.
pub struct Logger<const N: usize> {
    buffer: [Option<LogEntry>; N],
    head: usize,
    len: usize,
    dropped: u16,
}

impl<const N: usize> Logger<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [None; N],
            head: 0,
            len: 0,
            dropped: 0,
        }
    }

    pub fn log(&mut self, uptime_ticks: u32, event: Event) {
        if N == 0 {
            self.dropped = self.dropped.saturating_add(1);
            return;
        }

        self.buffer[(self.head + self.len) % N] = Some(LogEntry {
            uptime_ticks,
            event,
        });

        if self.len == N {
            // tail landed on the oldest entry
            self.head = (self.head + 1) % N;
            self.dropped = self.dropped.saturating_add(1);
        } else {
            self.len += 1;
        }
    }

    /// Oldest pending entry
    pub fn pop(&mut self) -> Option<LogEntry> {
        if self.len == 0 {
            return None;
        }

        let entry = self.buffer[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        entry
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entries overwritten since the last drain
    #[inline]
    pub fn dropped(&self) -> u16 {
        self.dropped
    }

    /// Writes every pending entry as one line and empties the log.
    /// Returns the number of entries written.
    pub fn drain<W>(&mut self, w: &mut W) -> Result<usize, W::Error>
    where
        W: uWrite + ?Sized,
    {
        let mut written = 0;
        while let Some(entry) = self.pop() {
            write_entry(w, &entry)?;
            written += 1;
        }

        if self.dropped > 0 {
            uwriteln!(&mut *w, "[{}] {} events dropped", LogType::System.tag(), self.dropped)?;
            self.dropped = 0;
        }

        Ok(written)
    }
}

impl<const N: usize> Default for Logger<N> {
    fn default() -> Self {
        Self::new()
    }
}

fn write_entry<W>(w: &mut W, entry: &LogEntry) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    uwrite!(&mut *w, "[{}] t={} ", entry.event.log_type().tag(), entry.uptime_ticks)?;
    uwriteln!(&mut *w, "{} {}", entry.event.time(), entry.event.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sink(String);

    impl uWrite for Sink {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn keeps_fifo_order() {
        let mut log = Logger::<4>::new();
        log.log(1, Event::Started(ClockTime::MIDNIGHT));
        log.log(2, Event::MinuteRollover(ClockTime::from_hm(0, 1).unwrap()));

        assert_eq!(log.len(), 2);
        assert_eq!(log.pop().map(|e| e.uptime_ticks), Some(1));
        assert_eq!(log.pop().map(|e| e.uptime_ticks), Some(2));
        assert!(log.pop().is_none());
    }

    #[test]
    fn full_ring_keeps_latest_entries() {
        let mut log = Logger::<2>::new();
        for tick in 0..5 {
            log.log(tick, Event::HourRollover(ClockTime::MIDNIGHT));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.dropped(), 3);
        assert_eq!(log.pop().map(|e| e.uptime_ticks), Some(3));
        assert_eq!(log.pop().map(|e| e.uptime_ticks), Some(4));
        assert!(log.pop().is_none());

        // Room again after popping
        log.log(5, Event::Started(ClockTime::MIDNIGHT));
        assert_eq!(log.pop().map(|e| e.uptime_ticks), Some(5));
    }

    #[test]
    fn zero_capacity_only_counts() {
        let mut log = Logger::<0>::new();
        log.log(1, Event::Started(ClockTime::MIDNIGHT));
        assert!(log.is_empty());
        assert_eq!(log.dropped(), 1);
    }

    #[test]
    fn wraps_around_the_ring() {
        let mut log = Logger::<3>::new();
        for tick in 0..10 {
            log.log(tick, Event::Started(ClockTime::MIDNIGHT));
            assert_eq!(log.pop().map(|e| e.uptime_ticks), Some(tick));
        }
        assert!(log.is_empty());
    }

    #[test]
    fn drain_formats_lines() {
        let mut log = Logger::<1>::new();
        log.log(
            30_000,
            Event::ButtonPressed(Button::Minutes, ClockTime::from_hm(9, 5).unwrap()),
        );
        log.log(30_001, Event::Started(ClockTime::MIDNIGHT));

        let mut sink = Sink(String::new());
        assert_eq!(log.drain(&mut sink), Ok(1));
        assert_eq!(
            sink.0,
            "[SYSTEM] t=30001 00:00 started\n[SYSTEM] 1 events dropped\n"
        );
        assert_eq!(log.dropped(), 0);
    }
}

//! The clock itself: all state touched by the timer interrupt, and the tick
//! handler that advances it.

use crate::config::{LOG_CAPACITY, MINUTE_MS, NB_ROWS, TICK_MS, WIRING};
use crate::drivers::{Button, ButtonEvent, ButtonHandler, Frame, RowScanner, ShiftOut, WiringTable};
use crate::error::Error;
use crate::logger::{Event, Logger};
use crate::time::ClockTime;
use embedded_hal::digital::v2::InputPin;

/// Timing of the tick interrupt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Milliseconds added per tick
    pub tick_ms: u16,
    /// Accumulated milliseconds that make a minute
    pub minute_ms: u16,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            minute_ms: MINUTE_MS,
        }
    }
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Row shifted out this tick
    pub row: usize,
    /// The minute advanced on its own
    pub minute_elapsed: bool,
    pub hours_pressed: bool,
    pub minutes_pressed: bool,
}

/// Binary clock driven by a periodic timer.
///
/// There is one instance for the life of the firmware. It owns the display
/// register and the buttons, and only [`tick`](Self::tick) mutates it once
/// running.
pub struct BinaryClock<SR, HOURS, MINUTES> {
    time: ClockTime,
    millis: u16,
    timing: Timing,
    wiring: WiringTable,
    frame: Frame,
    words: [u8; NB_ROWS],
    scanner: RowScanner,
    register: SR,
    buttons: ButtonHandler<HOURS, MINUTES>,
    uptime_ticks: u32,
    log: Logger<LOG_CAPACITY>,
}

impl<SR, HOURS, MINUTES, E> BinaryClock<SR, HOURS, MINUTES>
where
    SR: ShiftOut,
    HOURS: InputPin<Error = E>,
    MINUTES: InputPin<Error = E>,
{
    /// Clock at 00:00 with the board wiring and timer period.
    pub fn new(register: SR, buttons: ButtonHandler<HOURS, MINUTES>) -> Self {
        Self::with_config(register, buttons, WIRING, Timing::default())
    }

    pub fn with_config(
        register: SR,
        buttons: ButtonHandler<HOURS, MINUTES>,
        wiring: WiringTable,
        timing: Timing,
    ) -> Self {
        let mut clock = Self {
            time: ClockTime::MIDNIGHT,
            millis: 0,
            timing,
            wiring,
            frame: Frame::BLANK,
            words: [0; NB_ROWS],
            scanner: RowScanner::new(),
            register,
            buttons,
            uptime_ticks: 0,
            log: Logger::new(),
        };
        clock.update_display();
        clock.log.log(0, Event::Started(clock.time));
        clock
    }

    /// Timer interrupt body. Runs in a fixed order and never waits:
    ///
    /// 1. count the tick period,
    /// 2. shift out the next row (every tick, whatever else happens),
    /// 3. advance the minute if a full minute has accumulated, carrying
    ///    into the hour at :00,
    /// 4. apply the hours button,
    /// 5. apply the minutes button, which never carries into the hour.
    ///
    /// A change made here shows from the next row refresh on.
    pub fn tick(&mut self) -> Result<TickOutcome, Error<SR::Error, E>> {
        let mut outcome = TickOutcome::default();

        self.uptime_ticks = self.uptime_ticks.wrapping_add(1);
        self.millis = self.millis.saturating_add(self.timing.tick_ms);

        outcome.row = self
            .scanner
            .refresh(&self.words, &mut self.register)
            .map_err(Error::Display)?;

        // handling full minute
        if self.millis >= self.timing.minute_ms {
            self.millis = 0;
            self.time.advance_minute();
            self.log.log(self.uptime_ticks, Event::MinuteRollover(self.time));
            if self.time.is_top_of_hour() {
                self.time.advance_hour();
                self.log.log(self.uptime_ticks, Event::HourRollover(self.time));
            }
            self.update_display();
            outcome.minute_elapsed = true;
        }

        if self.poll_press(Button::Hours)? {
            self.millis = 0;
            self.time.advance_hour();
            self.update_display();
            self.log
                .log(self.uptime_ticks, Event::ButtonPressed(Button::Hours, self.time));
            outcome.hours_pressed = true;
        }

        if self.poll_press(Button::Minutes)? {
            self.millis = 0;
            self.time.advance_minute();
            self.update_display();
            self.log
                .log(self.uptime_ticks, Event::ButtonPressed(Button::Minutes, self.time));
            outcome.minutes_pressed = true;
        }

        Ok(outcome)
    }

    /// Sets the time of day and restarts the current minute.
    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
        self.millis = 0;
        self.update_display();
        self.log.log(self.uptime_ticks, Event::TimeSet(time));
    }

    #[inline]
    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Milliseconds accumulated toward the next minute
    #[inline]
    pub fn millis(&self) -> u16 {
        self.millis
    }

    #[inline]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Cached register words, one per row
    #[inline]
    pub fn words(&self) -> &[u8; NB_ROWS] {
        &self.words
    }

    /// Row shown by the next tick
    #[inline]
    pub fn next_row(&self) -> usize {
        self.scanner.current_row()
    }

    #[inline]
    pub fn uptime_ticks(&self) -> u32 {
        self.uptime_ticks
    }

    #[inline]
    pub fn wiring(&self) -> &WiringTable {
        &self.wiring
    }

    pub fn log_mut(&mut self) -> &mut Logger<LOG_CAPACITY> {
        &mut self.log
    }

    pub fn release(self) -> (SR, ButtonHandler<HOURS, MINUTES>) {
        (self.register, self.buttons)
    }

    fn poll_press(&mut self, button: Button) -> Result<bool, Error<SR::Error, E>> {
        let event = self.buttons.poll(button).map_err(Error::Button)?;
        Ok(event == Some(ButtonEvent::Pressed(button)))
    }

    fn update_display(&mut self) {
        self.frame = Frame::render(&self.time);
        self.words = self.wiring.encode_frame(&self.frame);
    }
}

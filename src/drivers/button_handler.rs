use embedded_hal::digital::v2::InputPin;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Hours,
    Minutes,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed(Button),
    Released(Button),
}

/// Edge detector with a toggle latch.
///
/// The first change of level fires a press and arms the latch; the next
/// change is taken as the matching release and only disarms it. A press of
/// any length therefore fires once, on its leading edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    prev_reading: bool,
    was_pressed: bool,
}

impl Debouncer {
    /// `idle_level` is the pin level with the button up (high with a pull-up).
    pub const fn new(idle_level: bool) -> Self {
        Self {
            prev_reading: idle_level,
            was_pressed: false,
        }
    }

    /// Feeds one pin sample. Returns `Some(true)` on a press edge and
    /// `Some(false)` on a release edge.
    pub fn update(&mut self, reading: bool) -> Option<bool> {
        if reading == self.prev_reading {
            return None;
        }

        self.prev_reading = reading;
        self.was_pressed = !self.was_pressed;
        Some(self.was_pressed)
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}

/// The two time-setting buttons, sampled once per tick.
pub struct ButtonHandler<HOURS, MINUTES> {
    hours_pin: HOURS,
    minutes_pin: MINUTES,
    hours: Debouncer,
    minutes: Debouncer,
}

impl<HOURS, MINUTES, E> ButtonHandler<HOURS, MINUTES>
where
    HOURS: InputPin<Error = E>,
    MINUTES: InputPin<Error = E>,
{
    /// Buttons pull their line to ground, so the idle level is high.
    pub fn new(hours_pin: HOURS, minutes_pin: MINUTES) -> Self {
        Self {
            hours_pin,
            minutes_pin,
            hours: Debouncer::new(true),
            minutes: Debouncer::new(true),
        }
    }

    /// Samples one button and reports an edge if there was one.
    pub fn poll(&mut self, button: Button) -> Result<Option<ButtonEvent>, E> {
        let (reading, debouncer) = match button {
            Button::Hours => (self.hours_pin.is_high()?, &mut self.hours),
            Button::Minutes => (self.minutes_pin.is_high()?, &mut self.minutes),
        };

        Ok(debouncer.update(reading).map(|pressed| {
            if pressed {
                ButtonEvent::Pressed(button)
            } else {
                ButtonEvent::Released(button)
            }
        }))
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Hours => self.hours.is_pressed(),
            Button::Minutes => self.minutes.is_pressed(),
        }
    }

    pub fn release(self) -> (HOURS, MINUTES) {
        (self.hours_pin, self.minutes_pin)
    }
}

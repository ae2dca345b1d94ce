//! Test doubles shared by the integration tests
#![allow(dead_code)]

use binary_clock::{BinaryClock, ButtonHandler, ShiftRegister, Timing, WiringTable};
use core::convert::Infallible;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Software model of a 74HC595: shifts on clock rising edges, copies the
/// shift stage to the outputs on latch rising edges.
#[derive(Default)]
pub struct Hc595 {
    data: bool,
    clock: bool,
    latch: bool,
    shift: u8,
    outputs: u8,
    pub latched: Vec<u8>,
    /// Clock edges seen while the latch line was low
    pub bits_shifted: u32,
}

impl Hc595 {
    fn drive(&mut self, line: Line, level: bool) {
        match line {
            Line::Data => self.data = level,
            Line::Clock => {
                if level && !self.clock {
                    self.shift = (self.shift << 1) | self.data as u8;
                    if !self.latch {
                        self.bits_shifted += 1;
                    }
                }
                self.clock = level;
            }
            Line::Latch => {
                if level && !self.latch {
                    self.outputs = self.shift;
                    self.latched.push(self.outputs);
                }
                self.latch = level;
            }
        }
    }

    pub fn outputs(&self) -> u8 {
        self.outputs
    }
}

#[derive(Clone, Copy)]
enum Line {
    Data,
    Clock,
    Latch,
}

pub struct BusPin {
    line: Line,
    chip: Rc<RefCell<Hc595>>,
}

impl OutputPin for BusPin {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.chip.borrow_mut().drive(self.line, true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.chip.borrow_mut().drive(self.line, false);
        Ok(())
    }
}

pub type FakeRegister = ShiftRegister<BusPin, BusPin, BusPin>;

pub fn fake_register() -> (FakeRegister, Rc<RefCell<Hc595>>) {
    let chip = Rc::new(RefCell::new(Hc595::default()));
    let pin = |line| BusPin {
        line,
        chip: chip.clone(),
    };
    let register = ShiftRegister::new(pin(Line::Data), pin(Line::Clock), pin(Line::Latch));
    (register, chip)
}

/// Button line whose level the test sets; high means released.
#[derive(Clone)]
pub struct ScriptedInput {
    level: Rc<Cell<bool>>,
}

impl ScriptedInput {
    pub fn released() -> Self {
        Self {
            level: Rc::new(Cell::new(true)),
        }
    }

    pub fn press(&self) {
        self.level.set(false);
    }

    pub fn release(&self) {
        self.level.set(true);
    }
}

impl InputPin for ScriptedInput {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(self.level.get())
    }

    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(!self.level.get())
    }
}

pub type TestClock = BinaryClock<FakeRegister, ScriptedInput, ScriptedInput>;

pub struct Rig {
    pub clock: TestClock,
    pub chip: Rc<RefCell<Hc595>>,
    pub hours: ScriptedInput,
    pub minutes: ScriptedInput,
}

impl Rig {
    pub fn new() -> Self {
        Self::with_timing(Timing::default())
    }

    pub fn with_timing(timing: Timing) -> Self {
        Self::with_config(binary_clock::config::WIRING, timing)
    }

    pub fn with_config(wiring: WiringTable, timing: Timing) -> Self {
        let (register, chip) = fake_register();
        let hours = ScriptedInput::released();
        let minutes = ScriptedInput::released();
        let buttons = ButtonHandler::new(hours.clone(), minutes.clone());
        let clock = BinaryClock::with_config(register, buttons, wiring, timing);
        Self {
            clock,
            chip,
            hours,
            minutes,
        }
    }

    pub fn run(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.clock.tick().unwrap();
        }
    }

    /// Holds a button down for one tick and lets go on the next.
    pub fn tap(&mut self, button: &ScriptedInput) {
        button.press();
        self.clock.tick().unwrap();
        button.release();
        self.clock.tick().unwrap();
    }

    /// Drops everything latched so far; keeps memory flat on long runs.
    pub fn clear_latched(&self) {
        self.chip.borrow_mut().latched.clear();
    }
}

/// `ufmt` writer collecting into a `String`
#[derive(Default)]
pub struct StringSink(pub String);

impl ufmt::uWrite for StringSink {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Infallible> {
        self.0.push_str(s);
        Ok(())
    }
}

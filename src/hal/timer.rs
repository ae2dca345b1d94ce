use avr_device::attiny85::TC0;

const WGM01: u8 = 1;
const OCIE0A: u8 = 4;
const PRESCALER_MASK: u8 = 0x07;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    pub const fn from_divider(divider: u32) -> Option<Self> {
        match divider {
            1 => Some(Prescaler::Direct),
            8 => Some(Prescaler::Div8),
            64 => Some(Prescaler::Div64),
            256 => Some(Prescaler::Div256),
            1024 => Some(Prescaler::Div1024),
            _ => None,
        }
    }
}

/// Timer/Counter 0 used as the periodic tick source.
pub struct Timer0 {
    tc0: TC0,
}

impl Timer0 {
    /// Takes the timer and stops it.
    pub fn new(tc0: TC0) -> Self {
        // clearing registers
        tc0.tccr0a.write(|w| unsafe { w.bits(0) });
        tc0.tccr0b.write(|w| unsafe { w.bits(0) });
        tc0.ocr0a.write(|w| w.bits(0));
        tc0.timsk.write(|w| unsafe { w.bits(0) });
        Self { tc0 }
    }

    /// Clear Timer on Compare: the counter runs `0..=compare` and restarts,
    /// raising compare match A every `prescaler * (compare + 1)` CPU cycles.
    pub fn start_ctc(&mut self, prescaler: Prescaler, compare: u8) {
        self.tc0.tccr0a.write(|w| unsafe { w.bits(1 << WGM01) });
        self.tc0.ocr0a.write(|w| w.bits(compare));
        self.tc0.tcnt0.write(|w| w.bits(0));
        self.tc0.tccr0b.modify(|r, w| unsafe {
            w.bits((r.bits() & !PRESCALER_MASK) | (prescaler as u8 & PRESCALER_MASK))
        });
    }

    pub fn enable_compare_interrupt(&mut self) {
        self.tc0
            .timsk
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << OCIE0A)) });
    }
}

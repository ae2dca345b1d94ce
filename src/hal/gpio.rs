use avr_device::attiny85::{portb::RegisterBlock, PORTB};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// PORTB pin `P` in mode `MODE`
#[derive(Debug)]
pub struct Pin<const P: u8, MODE> {
    _mode: PhantomData<MODE>,
}

#[inline]
fn port() -> &'static RegisterBlock {
    unsafe { &*PORTB::ptr() }
}

impl<const P: u8, MODE: PinMode> Pin<P, MODE> {
    const fn new() -> Self {
        Pin { _mode: PhantomData }
    }

    pub fn into_output(self) -> Pin<P, Output> {
        // Set DDRB bit
        port().ddrb.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
        Pin::new()
    }

    /// Input with the internal pull-up enabled, so an open button reads high.
    pub fn into_pull_up_input(self) -> Pin<P, Input> {
        port().ddrb.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
        port().portb.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
        Pin::new()
    }
}

impl<const P: u8> OutputPin for Pin<P, Output> {
    type Error = Infallible;

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        port().portb.modify(|r, w| unsafe { w.bits(r.bits() | (1 << P)) });
        Ok(())
    }

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        port().portb.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << P)) });
        Ok(())
    }
}

impl<const P: u8> InputPin for Pin<P, Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        Ok(port().pinb.read().bits() & (1 << P) != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        Ok(port().pinb.read().bits() & (1 << P) == 0)
    }
}

/// The usable PORTB pins (PB5 is RESET), all floating inputs after reset.
pub struct Pins {
    pub pb0: Pin<0, Input>,
    pub pb1: Pin<1, Input>,
    pub pb2: Pin<2, Input>,
    pub pb3: Pin<3, Input>,
    pub pb4: Pin<4, Input>,
}

impl Pins {
    pub fn new(_portb: PORTB) -> Self {
        // clearing registers
        port().ddrb.write(|w| unsafe { w.bits(0) });
        port().portb.write(|w| unsafe { w.bits(0) });

        Self {
            pb0: Pin::new(),
            pb1: Pin::new(),
            pb2: Pin::new(),
            pb3: Pin::new(),
            pb4: Pin::new(),
        }
    }
}

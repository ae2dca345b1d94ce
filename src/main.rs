#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use panic_halt as _;
use avr_device::attiny85::Peripherals;
use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;

use binary_clock::config::{
    BUTTON_HOURS_PIN, BUTTON_MINUTES_PIN, CLK_PIN, DATA_PIN, LATCH_PIN, TIMER_COMPARE,
    TIMER_PRESCALER,
};
use binary_clock::hal::{Input, Output, Pin, Pins, Power, Prescaler, Timer0};
use binary_clock::{BinaryClock, ButtonHandler, Error, ShiftRegister};

type Register = ShiftRegister<
    Pin<{ DATA_PIN }, Output>,
    Pin<{ CLK_PIN }, Output>,
    Pin<{ LATCH_PIN }, Output>,
>;
type Clock = BinaryClock<Register, Pin<{ BUTTON_HOURS_PIN }, Input>, Pin<{ BUTTON_MINUTES_PIN }, Input>>;

const PRESCALER: Prescaler = match Prescaler::from_divider(TIMER_PRESCALER) {
    Some(prescaler) => prescaler,
    None => panic!("TIMER_PRESCALER is not available on Timer 0"),
};

// Only the timer interrupt touches the clock once interrupts are enabled
static CLOCK: Mutex<RefCell<Option<Clock>>> = Mutex::new(RefCell::new(None));

#[avr_device::entry]
fn main() -> ! {
    interrupt::disable();

    let dp = Peripherals::take().unwrap();
    let pins = Pins::new(dp.PORTB);

    // setting shift register pins as outputs, buttons as pulled-up inputs
    let register = ShiftRegister::new(
        pins.pb0.into_output(),
        pins.pb2.into_output(),
        pins.pb1.into_output(),
    );
    let buttons = ButtonHandler::new(pins.pb3.into_pull_up_input(), pins.pb4.into_pull_up_input());

    let clock: Clock = BinaryClock::new(register, buttons);
    interrupt::free(|cs| {
        CLOCK.borrow(cs).replace(Some(clock));
    });

    let mut timer = Timer0::new(dp.TC0);
    timer.start_ctc(PRESCALER, TIMER_COMPARE);
    timer.enable_compare_interrupt();

    let mut power = Power::new(dp.CPU);

    // Enable interrupts globally
    unsafe { interrupt::enable() };

    loop {
        power.enter_idle_mode();
    }
}

#[avr_device::interrupt(attiny85)]
fn TIMER0_COMPA() {
    interrupt::free(|cs| {
        if let Some(clock) = CLOCK.borrow(cs).borrow_mut().as_mut() {
            match clock.tick() {
                Ok(_) => {}
                Err(Error::Display(never)) | Err(Error::Button(never)) => match never {},
            }
        }
    });
}

use avr_device::attiny85::CPU;

const SE: u8 = 5;
const SM_MASK: u8 = 0x18;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0,
}

pub struct Power {
    cpu: CPU,
}

impl Power {
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }

    #[inline]
    fn set_sleep_mode(&mut self, mode: SleepMode) {
        self.cpu.mcucr.modify(|r, w| unsafe {
            w.bits((r.bits() & !SM_MASK) | ((mode as u8) << 3))
        });
    }

    /// Sleeps until the next interrupt. Timer 0 keeps running in idle mode.
    pub fn enter_idle_mode(&mut self) {
        self.set_sleep_mode(SleepMode::Idle);
        self.cpu.mcucr.modify(|r, w| unsafe { w.bits(r.bits() | (1 << SE)) });
        avr_device::asm::sleep();
        self.cpu.mcucr.modify(|r, w| unsafe { w.bits(r.bits() & !(1 << SE)) });
    }
}

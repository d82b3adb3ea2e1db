// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! PWM module 0 generators via direct PAC register access.
//!
//! The PWM clock is the system clock divided by 16 (3.125 MHz at 50 MHz), shared by every
//! generator. Each generator runs in count-down mode with output A driven low on the LOAD event
//! and high on the comparator-A match, so the high time equals the compare count.
//!
//! | Generator | Output | Pin | ENABLE bit |
//! | --------- | ------ | --- | ---------- |
//! | 0 | M0PWM0 | PB6 | 0 |
//! | 1 | M0PWM2 | PB4 | 2 |
//!
//! Example:
//! ```ignore
//! let (gen0, gen1) = Pwm0::new(dp.PWM0, &sc.power_control).split();
//! let mut drive = gen0.configure(DRIVE_PWM)?;
//! drive.set_duty(20_000);
//! ```

use core::marker::PhantomData;

use embedded_hal::PwmPin;
use tm4c123x_hal::{
    pac,
    sysctl::{self, Domain, PowerControl, PowerState, RunMode},
};

use crate::config::PwmConfig;

// RCC fields controlling the shared PWM clock.
const RCC_USEPWMDIV: u32 = 1 << 20;
const RCC_PWMDIV_MASK: u32 = 0b111 << 17;
const RCC_PWMDIV_16: u32 = 0x3 << 17;

// GENA: ACTCMPAD = drive high (bits 7:6), ACTLOAD = drive low (bits 3:2).
const GEN_HIGH_ON_CMPA_DOWN_LOW_ON_LOAD: u32 = 0xC8;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Initial duty must be strictly below the period.
    DutyOutOfRange,
}

/// Generator 0 (M0PWM0, PB6).
pub struct Gen0;
/// Generator 1 (M0PWM2, PB4).
pub struct Gen1;

/// Owner of PWM0. Powers the module and sets up the clock divider.
pub struct Pwm0 {
    _pwm: pac::PWM0,
}

impl Pwm0 {
    pub fn new(pwm: pac::PWM0, pc: &PowerControl) -> Self {
        sysctl::control_power(pc, Domain::Pwm0, RunMode::Run, PowerState::On);
        sysctl::reset(pc, Domain::Pwm0);
        init_clock_divider();
        Self { _pwm: pwm }
    }

    /// Hand out the two generators used on this board.
    pub fn split(self) -> (Generator<Gen0>, Generator<Gen1>) {
        (
            Generator { _gen: PhantomData },
            Generator { _gen: PhantomData },
        )
    }
}

/// Route the divided clock to the PWM modules: PWMCLK = SysClk / 16.
fn init_clock_divider() {
    let sysctl = unsafe { &*pac::SYSCTL::ptr() };
    sysctl.rcc.modify(|r, w| unsafe {
        w.bits((r.bits() & !RCC_PWMDIV_MASK) | RCC_USEPWMDIV | RCC_PWMDIV_16)
    });
}

/// An unconfigured generator.
pub struct Generator<GEN> {
    _gen: PhantomData<GEN>,
}

/// A running generator exposed as a PWM output.
pub struct PwmChannel<GEN> {
    period: u16,
    duty: u16,
    _gen: PhantomData<GEN>,
}

#[inline]
fn pwm0() -> &'static pac::pwm0::RegisterBlock {
    unsafe { &*pac::PWM0::ptr() }
}

/// Compare value for a duty count. A duty of 0 wraps to 0xFFFF, which never matches, so the
/// output is held low.
#[inline]
fn cmpa_for(duty: u16) -> u32 {
    duty.wrapping_sub(1) as u32
}

macro_rules! generator {
    ($GEN:ident, $ctl:ident, $gena:ident, $load:ident, $cmpa:ident, $enable_bit:expr) => {
        impl Generator<$GEN> {
            /// Program period and duty, then start the generator with its output enabled.
            pub fn configure(self, cfg: PwmConfig) -> Result<PwmChannel<$GEN>, Error> {
                if cfg.duty >= cfg.period {
                    return Err(Error::DutyOutOfRange);
                }
                let pwm = pwm0();

                // Stop the generator and select count-down mode
                pwm.$ctl.write(|w| unsafe { w.bits(0) });

                pwm.$gena
                    .write(|w| unsafe { w.bits(GEN_HIGH_ON_CMPA_DOWN_LOW_ON_LOAD) });
                pwm.$load
                    .write(|w| unsafe { w.bits((cfg.period - 1) as u32) });
                pwm.$cmpa.write(|w| unsafe { w.bits(cmpa_for(cfg.duty)) });

                // Start the generator and enable its output
                pwm.$ctl.modify(|r, w| unsafe { w.bits(r.bits() | 0x01) });
                pwm.enable
                    .modify(|r, w| unsafe { w.bits(r.bits() | $enable_bit) });

                Ok(PwmChannel {
                    period: cfg.period,
                    duty: cfg.duty,
                    _gen: PhantomData,
                })
            }
        }

        impl PwmPin for PwmChannel<$GEN> {
            type Duty = u16;

            fn disable(&mut self) {
                pwm0()
                    .enable
                    .modify(|r, w| unsafe { w.bits(r.bits() & !$enable_bit) });
            }

            fn enable(&mut self) {
                pwm0()
                    .enable
                    .modify(|r, w| unsafe { w.bits(r.bits() | $enable_bit) });
            }

            fn get_duty(&self) -> u16 {
                self.duty
            }

            fn get_max_duty(&self) -> u16 {
                self.period
            }

            fn set_duty(&mut self, duty: u16) {
                let duty = duty.min(self.period);
                pwm0().$cmpa.write(|w| unsafe { w.bits(cmpa_for(duty)) });
                self.duty = duty;
            }
        }
    };
}

generator!(Gen0, _0_ctl, _0_gena, _0_load, _0_cmpa, 1 << 0);
generator!(Gen1, _1_ctl, _1_gena, _1_load, _1_cmpa, 1 << 2);

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! HC-SR04 ultrasonic ranging driver.
//!
//! One ranging cycle:
//! 1. Drive the trigger high for 10 µs, then low.
//! 2. Poll the echo line until it rises, spending at most `rise_budget` polls. The poll loop does
//!    not sleep, so the budget is an iteration count, not a time.
//! 3. While the echo is high, count one tick per microsecond delay, up to `max_pulse_us`.
//! 4. Convert the tick count to centimeters with a truncating divide by 58.
//!
//! Wiring (board):
//! - Trigger: PC4, push-pull output
//! - Echo:    PC5, input with pull-down so an unplugged sensor reads low

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::RangingConfig;

/// Echo microseconds per centimeter of range (speed of sound, round trip).
pub const CM_DIVISOR: u32 = 58;

/// Pulse width to centimeters at the standard divisor, truncating.
#[inline]
pub const fn distance_cm(pulse_us: u32) -> u32 {
    pulse_to_cm(pulse_us, CM_DIVISOR)
}

/// Pulse width to centimeters at a given divisor, truncating. `divisor` is non-zero by
/// construction of [`RangingConfig`].
#[inline]
const fn pulse_to_cm(pulse_us: u32, divisor: u32) -> u32 {
    pulse_us / divisor
}

/// A completed ranging cycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Measurement {
    pub pulse_us: u32,
    pub distance_cm: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Echo never rose within the poll budget.
    NoEcho,
    /// Echo stayed high past `max_pulse_us`.
    EchoStuck,
    /// Trigger or echo GPIO reported a fault.
    Pin,
}

/// Anything that can produce one distance measurement per call.
pub trait Rangefinder {
    fn measure(&mut self) -> Result<Measurement, Error>;
}

pub struct Hcsr04<Trig, Echo, Delay> {
    trigger: Trig,
    echo: Echo,
    delay: Delay,
    cfg: RangingConfig,
}

impl<Trig, Echo, Delay> Hcsr04<Trig, Echo, Delay>
where
    Trig: OutputPin,
    Echo: InputPin,
    Delay: DelayUs<u32>,
{
    /// Take ownership of the configured pins and park the trigger low.
    ///
    /// The delay must already be running (SysTick started) before the first `measure()`.
    pub fn new(mut trigger: Trig, echo: Echo, delay: Delay, cfg: RangingConfig) -> Self {
        trigger.set_low().ok();
        Self {
            trigger,
            echo,
            delay,
            cfg,
        }
    }

    /// Run one ranging cycle.
    pub fn measure(&mut self) -> Result<Measurement, Error> {
        let pulse_us = self.read_pulse()?;
        Ok(Measurement {
            pulse_us,
            distance_cm: pulse_to_cm(pulse_us, self.cfg.cm_divisor()),
        })
    }

    /// Echo pulse width in microseconds, or 0 if the cycle failed for any reason.
    pub fn read_pulse_us(&mut self) -> u32 {
        self.read_pulse().unwrap_or(0)
    }

    /// Distance in centimeters, or 0 if the cycle failed for any reason.
    ///
    /// A 0 here is ambiguous (nothing in range vs. something closer than 1 cm); use
    /// [`Hcsr04::measure`] to tell them apart.
    pub fn read_distance_cm(&mut self) -> u32 {
        self.measure().map(|m| m.distance_cm).unwrap_or(0)
    }

    fn read_pulse(&mut self) -> Result<u32, Error> {
        self.trigger.set_high().map_err(|_| Error::Pin)?;
        self.delay.delay_us(self.cfg.trigger_pulse_us);
        self.trigger.set_low().map_err(|_| Error::Pin)?;

        // Wait for the rising edge
        let mut budget = self.cfg.rise_budget;
        while !self.echo_high()? {
            if budget == 0 {
                return Err(Error::NoEcho);
            }
            budget -= 1;
        }

        // Measure high time
        let mut pulse_us = 0;
        while self.echo_high()? {
            if pulse_us >= self.cfg.max_pulse_us {
                return Err(Error::EchoStuck);
            }
            pulse_us += 1;
            self.delay.delay_us(1);
        }

        Ok(pulse_us)
    }

    #[inline]
    fn echo_high(&self) -> Result<bool, Error> {
        self.echo.is_high().map_err(|_| Error::Pin)
    }

    #[inline]
    pub fn config(&self) -> &RangingConfig {
        &self.cfg
    }

    pub fn free(self) -> (Trig, Echo, Delay) {
        (self.trigger, self.echo, self.delay)
    }
}

impl<Trig, Echo, Delay> Rangefinder for Hcsr04<Trig, Echo, Delay>
where
    Trig: OutputPin,
    Echo: InputPin,
    Delay: DelayUs<u32>,
{
    fn measure(&mut self) -> Result<Measurement, Error> {
        Hcsr04::measure(self)
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Rear drive motor: one PWM channel sets speed, one GPIO line sets direction.
//!
//! Wiring (board):
//! - PB6: M0PWM0 speed signal
//! - PB7: direction (high = forward)

use embedded_hal::digital::v2::OutputPin;
use embedded_hal::PwmPin;

/// What the motor is currently doing.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Motion {
    Forward,
    Reverse,
    Stopped,
}

pub struct DriveMotor<Pwm, Dir> {
    pwm: Pwm,
    dir: Dir,
    motion: Motion,
}

impl<Pwm, Dir> DriveMotor<Pwm, Dir>
where
    Pwm: PwmPin<Duty = u16>,
    Dir: OutputPin,
{
    /// Wrap an initialized PWM channel and direction line. Starts stopped.
    pub fn new(pwm: Pwm, dir: Dir) -> Self {
        let mut motor = Self {
            pwm,
            dir,
            motion: Motion::Stopped,
        };
        motor.stop();
        motor
    }

    /// Drive forward at the current duty.
    pub fn forward(&mut self) {
        self.pwm.enable();
        self.dir.set_high().ok();
        self.motion = Motion::Forward;
    }

    /// Drive backward at the current duty.
    pub fn reverse(&mut self) {
        self.pwm.enable();
        self.dir.set_low().ok();
        self.motion = Motion::Reverse;
    }

    /// Cut the PWM output and release the direction line.
    pub fn stop(&mut self) {
        self.pwm.disable();
        self.dir.set_low().ok();
        self.motion = Motion::Stopped;
    }

    /// Change the speed duty, clamped to the channel's period.
    pub fn set_duty(&mut self, duty: u16) {
        let max = self.pwm.get_max_duty();
        self.pwm.set_duty(duty.min(max));
    }

    #[inline]
    pub fn duty(&self) -> u16 {
        self.pwm.get_duty()
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.motion != Motion::Stopped
    }

    pub fn free(self) -> (Pwm, Dir) {
        (self.pwm, self.dir)
    }
}

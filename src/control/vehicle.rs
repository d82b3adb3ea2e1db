// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Remote-control loop for the vehicle.
//!
//! Each call to [`VehicleController::step`] takes one range reading, applies the obstacle policy,
//! then handles at most one command byte from the console.
//!
//! Obstacle policy:
//! - a measured distance inside `obstacle_min_cm..obstacle_max_cm` stops the motor;
//! - while driving forward, any measured distance at or below `forward_clearance_cm` stops it;
//! - a failed reading (no echo, stuck echo) leaves motion already under way running, but a
//!   forward command is refused until a measurement shows enough clearance.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! vehicle.start();
//!
//! loop {
//!     vehicle.step();
//! }
//! ```

use embedded_hal::digital::v2::OutputPin;
use embedded_hal::serial::{Read, Write};
use embedded_hal::PwmPin;

use crate::config::VehicleConfig;
use crate::drivers::drive_motor::{DriveMotor, Motion};
use crate::drivers::hcsr04::{Error, Measurement, Rangefinder};
use crate::drivers::steering::Steering;
use crate::hw::usart::Console;
use crate::protocol::Command;

pub struct VehicleController<R, MotorPwm, Dir, SteerPwm, TX, RX> {
    sonar: R,
    motor: DriveMotor<MotorPwm, Dir>,
    steering: Steering<SteerPwm>,
    console: Console<TX, RX>,
    cfg: VehicleConfig,

    /// Most recent ranging result, `None` before the first step.
    last_reading: Option<Result<Measurement, Error>>,
    /// Currently inside the obstacle band (edge detection for the log line).
    obstacle: bool,
    /// Last reading failed (edge detection for the log line).
    echo_lost: bool,
}

impl<R, MotorPwm, Dir, SteerPwm, TX, RX> VehicleController<R, MotorPwm, Dir, SteerPwm, TX, RX>
where
    R: Rangefinder,
    MotorPwm: PwmPin<Duty = u16>,
    Dir: OutputPin,
    SteerPwm: PwmPin<Duty = u16>,
    TX: Write<u8>,
    RX: Read<u8>,
{
    pub fn new(
        sonar: R,
        motor: DriveMotor<MotorPwm, Dir>,
        steering: Steering<SteerPwm>,
        console: Console<TX, RX>,
        cfg: VehicleConfig,
    ) -> Self {
        Self {
            sonar,
            motor,
            steering,
            console,
            cfg,
            last_reading: None,
            obstacle: false,
            echo_lost: false,
        }
    }

    /// Announce readiness on the console and make sure the motor is stopped.
    pub fn start(&mut self) {
        self.console.println("RC Ready to Control");
        self.motor.stop();
    }

    /// Run one iteration of the control loop. The reading it acted on is kept in
    /// [`last_reading`](Self::last_reading).
    pub fn step(&mut self) {
        let reading = self.sonar.measure();
        self.apply_reading(reading);
        self.last_reading = Some(reading);

        if let Some(byte) = self.console.try_read_byte() {
            self.console.write_byte(byte);
            self.console.newline();
            if let Some(cmd) = Command::from_byte(byte) {
                self.execute(cmd);
            }
        }
    }

    fn apply_reading(&mut self, reading: Result<Measurement, Error>) {
        let m = match reading {
            Ok(m) => m,
            Err(_) => {
                if !self.echo_lost {
                    self.console.println("No echo");
                }
                self.echo_lost = true;
                self.obstacle = false;
                return;
            }
        };
        self.echo_lost = false;

        let d = m.distance_cm;
        let in_band = d >= self.cfg.obstacle_min_cm && d < self.cfg.obstacle_max_cm;
        let blocks_forward =
            self.motor.motion() == Motion::Forward && d <= self.cfg.forward_clearance_cm;

        if in_band || blocks_forward {
            let was_moving = self.motor.is_moving();
            self.motor.stop();
            if was_moving || !self.obstacle {
                self.console.println("Motion Detected");
            }
            self.obstacle = true;
        } else {
            self.obstacle = false;
        }
    }

    /// Apply one decoded command.
    pub fn execute(&mut self, cmd: Command) {
        match cmd {
            Command::Forward => {
                if self.path_blocked() {
                    self.motor.stop();
                    self.console.println("Path Blocked");
                } else {
                    self.motor.forward();
                    self.console.println("Motor in Drive");
                }
            }
            Command::Reverse => {
                self.motor.reverse();
                self.console.println("Reverse");
            }
            Command::Stop => {
                self.motor.stop();
                self.console.println("Motor Stopped");
            }
            Command::SteerLeft => {
                self.steering.left();
                self.console.println("Turning Left");
            }
            Command::SteerCenter => {
                self.steering.center();
                self.console.println("Steering in the Middle");
            }
            Command::SteerRight => {
                self.steering.right();
                self.console.println("Turning Right");
            }
        }
    }

    /// Forward needs a measurement above the clearance. No echo counts as zero distance.
    fn path_blocked(&self) -> bool {
        match self.last_reading {
            Some(Ok(m)) => m.distance_cm <= self.cfg.forward_clearance_cm,
            Some(Err(_)) => true,
            None => false,
        }
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motor.motion()
    }

    #[inline]
    pub fn last_reading(&self) -> Option<Result<Measurement, Error>> {
        self.last_reading
    }

    pub fn steering(&self) -> &Steering<SteerPwm> {
        &self.steering
    }
}

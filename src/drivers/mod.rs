// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains device-specific drivers that sit above the raw `hw/` layer and below the
//! application logic. Every driver is generic over `embedded-hal` traits so it runs against host
//! mocks as well as the TM4C123 peripherals.
//!
//! ## Existing drivers
//!
//! - [`hcsr04`] – HC-SR04 ultrasonic rangefinder (trigger pulse, echo timing, centimeters)
//! - [`drive_motor`] – Rear DC motor with PWM speed and a direction line
//! - [`steering`] – Front steering servo with three preset positions

pub mod drive_motor;
pub mod hcsr04;
pub mod steering;

pub use drive_motor::{DriveMotor, Motion};
pub use hcsr04::{Hcsr04, Measurement, Rangefinder};
pub use steering::{Position, Steering};

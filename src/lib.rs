// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # RC Vehicle Firmware
//!
//! This crate contains the firmware for a remote-controlled car with ultrasonic obstacle stop,
//! written in Rust, targeting a TM4C123GH6PM MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`time`] | 1 µs tick counter and busy-wait delays driven by SysTick |
//! | [`hw`] | MCU-level wrappers around SysTick, PWM, GPIO and the UART console |
//! | [`drivers`] | Device-level drivers (HC-SR04, drive motor, steering servo) |
//! | [`protocol`] | Single-byte remote commands |
//! | [`control`] | Remote-control loop with obstacle stop |
//! | [`config`] | Board constants and tunables |
//!
//! ## Getting Started
//!
//! Build docs:
//!
//! ```bash
//! cargo doc --no-deps --open
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --target thumbv7em-none-eabihf
//! ```
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test --lib
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod drivers;
pub mod hw;
pub mod protocol;
pub mod time;

#[cfg(test)]
mod mock;

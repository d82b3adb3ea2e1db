// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Control
//!
//! Application-level logic that ties the rangefinder, drive motor, steering servo and console
//! together.
//!
//! ## Modules
//!
//! - [`vehicle`] - Remote-control loop with obstacle stop.

pub mod vehicle;

pub use vehicle::VehicleController;

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! MCU-level wrappers. `pins` and `pwm` touch TM4C123 registers and only build for the target.

#[cfg(target_os = "none")]
pub mod pins;
#[cfg(target_os = "none")]
pub mod pwm;
pub mod systick;
pub mod usart;

#[cfg(target_os = "none")]
pub use pins::BoardPins;
#[cfg(target_os = "none")]
pub use pwm::Pwm0;
pub use systick::SysTick;
pub use usart::Console;

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Elapsed-Time Service
//!
//! A free-running microsecond tick counter advanced by the SysTick exception, plus blocking delay
//! primitives built on it.
//!
//! - [`ticks`] - the counters shared between the exception handler and the foreground loop.
//! - [`delay`] - busy-wait `delay_us` / `delay_ms` that poll those counters.
//!
//! The hardware half (configuring SysTick to fire once per microsecond) lives in `hw::systick`.

pub mod delay;
pub mod ticks;

pub use delay::TickDelay;
pub use ticks::TickCounter;

/// Process-wide tick counter. Only the SysTick handler calls [`TickCounter::on_tick`] on it.
pub static TICKS: TickCounter = TickCounter::new();

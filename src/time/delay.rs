// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Busy-wait delays driven by the SysTick tick counter.
//!
//! Each wait resets the counter it polls and spins until the interrupt has advanced it far enough.
//! The `Idle` hook runs once per spin; on hardware it is just a spin-loop hint, in tests it fires
//! simulated ticks.
//!
//! Neither wait has a timeout. With interrupts masked, or before `hw::systick` has been started,
//! they never return.

use embedded_hal::blocking::delay::{DelayMs, DelayUs};

use crate::time::TickCounter;

/// Blocking delay provider over a [`TickCounter`].
pub struct TickDelay<'a, Idle = fn()> {
    ticks: &'a TickCounter,
    idle: Idle,
}

impl<'a> TickDelay<'a> {
    /// Delay that spins with a plain spin-loop hint.
    pub fn new(ticks: &'a TickCounter) -> Self {
        Self {
            ticks,
            idle: core::hint::spin_loop as fn(),
        }
    }
}

impl<'a, Idle: FnMut()> TickDelay<'a, Idle> {
    /// Delay that calls `idle` on every pass of the wait loops.
    pub fn with_idle(ticks: &'a TickCounter, idle: Idle) -> Self {
        Self { ticks, idle }
    }

    /// Block until at least `us` ticks have elapsed.
    pub fn delay_us(&mut self, us: u32) {
        self.ticks.reset_micros();
        while self.ticks.micros() < us {
            (self.idle)();
        }
    }

    /// Block until `ms` millisecond rollovers have been counted.
    ///
    /// The millisecond-active flag is set for the duration of the call and cleared on return.
    pub fn delay_ms(&mut self, ms: u32) {
        self.ticks.begin_millis();
        while self.ticks.millis() < ms {
            (self.idle)();
        }
        self.ticks.end_millis();
    }
}

impl<Idle: FnMut()> DelayUs<u32> for TickDelay<'_, Idle> {
    fn delay_us(&mut self, us: u32) {
        TickDelay::delay_us(self, us);
    }
}

impl<Idle: FnMut()> DelayUs<u16> for TickDelay<'_, Idle> {
    fn delay_us(&mut self, us: u16) {
        TickDelay::delay_us(self, us as u32);
    }
}

impl<Idle: FnMut()> DelayUs<u8> for TickDelay<'_, Idle> {
    fn delay_us(&mut self, us: u8) {
        TickDelay::delay_us(self, us as u32);
    }
}

impl<Idle: FnMut()> DelayMs<u32> for TickDelay<'_, Idle> {
    fn delay_ms(&mut self, ms: u32) {
        TickDelay::delay_ms(self, ms);
    }
}

impl<Idle: FnMut()> DelayMs<u16> for TickDelay<'_, Idle> {
    fn delay_ms(&mut self, ms: u16) {
        TickDelay::delay_ms(self, ms as u32);
    }
}

impl<Idle: FnMut()> DelayMs<u8> for TickDelay<'_, Idle> {
    fn delay_ms(&mut self, ms: u8) {
        TickDelay::delay_ms(self, ms as u32);
    }
}

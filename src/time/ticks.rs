// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tick and millisecond counters shared with the SysTick exception.
//!
//! Ownership is split by context:
//! - the exception handler is the only caller of [`TickCounter::on_tick`], the only code that
//!   increments either counter;
//! - the foreground only reads the counters, resets them, and owns the millisecond-active flag.
//!
//! The handler preempts the foreground and never the other way round, so its load/store pair on
//! `micros` cannot interleave with a foreground reset.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Microseconds per millisecond rollover.
pub const MICROS_PER_MILLI: u32 = 1_000;

pub struct TickCounter {
    micros: AtomicU32,
    millis: AtomicU32,
    ms_active: AtomicBool,
}

impl TickCounter {
    pub const fn new() -> Self {
        Self {
            micros: AtomicU32::new(0),
            millis: AtomicU32::new(0),
            ms_active: AtomicBool::new(false),
        }
    }

    /// Advance by one tick. Call from the periodic interrupt only.
    ///
    /// While a millisecond wait is active, every 1000th tick folds into the millisecond counter.
    #[inline]
    pub fn on_tick(&self) {
        let us = self.micros.load(Ordering::Relaxed).wrapping_add(1);

        if us == MICROS_PER_MILLI && self.ms_active.load(Ordering::Relaxed) {
            self.micros.store(0, Ordering::Relaxed);
            let ms = self.millis.load(Ordering::Relaxed);
            self.millis.store(ms.wrapping_add(1), Ordering::Relaxed);
        } else {
            self.micros.store(us, Ordering::Relaxed);
        }
    }

    /// Ticks since the last reset.
    #[inline]
    pub fn micros(&self) -> u32 {
        self.micros.load(Ordering::SeqCst)
    }

    /// Milliseconds accumulated since the current millisecond wait began.
    #[inline]
    pub fn millis(&self) -> u32 {
        self.millis.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn is_ms_active(&self) -> bool {
        self.ms_active.load(Ordering::SeqCst)
    }

    /// Zero the tick counter.
    #[inline]
    pub fn reset_micros(&self) {
        self.micros.store(0, Ordering::SeqCst);
    }

    /// Zero both counters and start accumulating milliseconds.
    pub fn begin_millis(&self) {
        self.micros.store(0, Ordering::SeqCst);
        self.millis.store(0, Ordering::SeqCst);
        self.ms_active.store(true, Ordering::SeqCst);
    }

    /// Stop accumulating milliseconds.
    #[inline]
    pub fn end_millis(&self) {
        self.ms_active.store(false, Ordering::SeqCst);
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}

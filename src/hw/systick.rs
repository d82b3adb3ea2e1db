//! SysTick as the 1 µs time base for [`crate::time`].
//!
//! On the TM4C123 the SysTick "external" reference is PIOSC / 4 = 4 MHz, which does not move when
//! the PLL is reconfigured. A reload of 3 therefore gives one interrupt per microsecond.
//!
//! The exception handler itself is defined by the binary and must call
//! [`TickCounter::on_tick`](crate::time::TickCounter::on_tick) on [`TICKS`](crate::time::TICKS).

use cortex_m::peripheral::{syst::SystClkSource, SYST};

use crate::config::TimingConfig;

pub struct SysTick {
    syst: SYST,
}

impl SysTick {
    /// Program the reload value and start counting with the interrupt enabled.
    pub fn start(mut syst: SYST, cfg: &TimingConfig) -> Self {
        // Disable counter while configuring
        syst.disable_counter();

        syst.set_clock_source(SystClkSource::External);
        syst.set_reload(cfg.reload());

        // Any write clears the current value
        syst.clear_current();

        syst.enable_interrupt();
        syst.enable_counter();

        Self { syst }
    }

    /// Stop the timer and return the peripheral. Pending delays will never complete.
    pub fn free(mut self) -> SYST {
        self.syst.disable_interrupt();
        self.syst.disable_counter();
        self.syst
    }
}

// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board constants and tunable parameters.
//!
//! Everything that depends on the clock tree or on the wiring of the vehicle lives here, so the
//! drivers themselves only see plain numbers.

/// System clock after PLL setup (16 MHz crystal, PLL divided down to 50 MHz).
pub const SYSCLK_HZ: u32 = 50_000_000;

/// SysTick "external" reference on the TM4C123: PIOSC (16 MHz) / 4.
pub const SYSTICK_SOURCE_HZ: u32 = 4_000_000;

/// Console baud rate (UART0, 8N1).
pub const CONSOLE_BAUD: u32 = 115_200;

/// Largest value the 24-bit SysTick reload register holds.
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// A rejected configuration value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Tick rate is zero or leaves fewer than two source cycles per tick.
    TickRateTooHigh,
    /// Source cycles per tick exceed the SysTick reload range.
    TickRateTooLow,
    /// Centimeter divisor of zero.
    ZeroDivisor,
}

/// Clock input and tick rate of the elapsed-time service.
///
/// Only constructible through [`TimingConfig::new`], so [`reload`](TimingConfig::reload) is always
/// a valid SysTick value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TimingConfig {
    source_hz: u32,
    tick_hz: u32,
}

impl TimingConfig {
    pub const fn new(source_hz: u32, tick_hz: u32) -> Result<Self, ConfigError> {
        if tick_hz == 0 || source_hz / tick_hz < 2 {
            return Err(ConfigError::TickRateTooHigh);
        }
        if source_hz / tick_hz - 1 > SYSTICK_MAX_RELOAD {
            return Err(ConfigError::TickRateTooLow);
        }
        Ok(Self { source_hz, tick_hz })
    }

    /// Frequency of the clock feeding SysTick.
    #[inline]
    pub const fn source_hz(&self) -> u32 {
        self.source_hz
    }

    /// Interrupt rate; one tick per period.
    #[inline]
    pub const fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    /// SysTick reload value for one interrupt per tick (e.g. 4 MHz / 1 MHz → 3).
    pub const fn reload(&self) -> u32 {
        self.source_hz / self.tick_hz - 1
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            source_hz: SYSTICK_SOURCE_HZ,
            tick_hz: 1_000_000,
        }
    }
}

/// Ultrasonic ranging parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RangingConfig {
    /// Width of the trigger pulse in microseconds. HC-SR04 needs at least 10.
    pub trigger_pulse_us: u32,
    /// Number of polls spent waiting for the echo line to rise.
    pub rise_budget: u32,
    /// Longest echo pulse accepted before the reading is abandoned.
    pub max_pulse_us: u32,
    /// Microseconds of echo per centimeter of range (round trip). Never zero.
    cm_divisor: u32,
}

impl RangingConfig {
    pub fn with_rise_budget(mut self, polls: u32) -> Self {
        self.rise_budget = polls;
        self
    }

    pub fn with_max_pulse_us(mut self, us: u32) -> Self {
        self.max_pulse_us = us;
        self
    }

    pub fn with_cm_divisor(mut self, divisor: u32) -> Result<Self, ConfigError> {
        if divisor == 0 {
            return Err(ConfigError::ZeroDivisor);
        }
        self.cm_divisor = divisor;
        Ok(self)
    }

    #[inline]
    pub fn cm_divisor(&self) -> u32 {
        self.cm_divisor
    }
}

impl Default for RangingConfig {
    fn default() -> Self {
        Self {
            trigger_pulse_us: 10,
            rise_budget: 30_000,
            max_pulse_us: 30_000,
            cm_divisor: crate::drivers::hcsr04::CM_DIVISOR,
        }
    }
}

/// Period and initial duty of one PWM generator, in PWM clock counts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PwmConfig {
    pub period: u16,
    pub duty: u16,
}

impl PwmConfig {
    pub const fn new(period: u16, duty: u16) -> Self {
        Self { period, duty }
    }
}

/// 50 Hz at the 3.125 MHz PWM clock (50 MHz / 16).
pub const PWM_PERIOD_50HZ: u16 = 62_500;

/// Drive motor: 50 Hz, half duty.
pub const DRIVE_PWM: PwmConfig = PwmConfig::new(PWM_PERIOD_50HZ, 31_250);

/// Steering servo: 50 Hz, output held low until the first position is commanded.
pub const STEERING_PWM: PwmConfig = PwmConfig::new(PWM_PERIOD_50HZ, 0);

/// Servo compare counts for the three steering positions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SteeringPositions {
    pub left: u16,
    pub center: u16,
    pub right: u16,
}

impl Default for SteeringPositions {
    fn default() -> Self {
        Self {
            left: 1_500,
            center: 4_688,
            right: 7_812,
        }
    }
}

/// Obstacle-avoidance thresholds used by the control loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VehicleConfig {
    /// Readings in `obstacle_min_cm..obstacle_max_cm` stop the vehicle.
    pub obstacle_min_cm: u32,
    pub obstacle_max_cm: u32,
    /// Forward motion needs more than this much clearance.
    pub forward_clearance_cm: u32,
}

impl VehicleConfig {
    pub fn with_obstacle_band(mut self, min_cm: u32, max_cm: u32) -> Self {
        self.obstacle_min_cm = min_cm;
        self.obstacle_max_cm = max_cm;
        self
    }

    pub fn with_forward_clearance(mut self, cm: u32) -> Self {
        self.forward_clearance_cm = cm;
        self
    }
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            obstacle_min_cm: 1,
            obstacle_max_cm: 10,
            forward_clearance_cm: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn systick_reload_for_one_microsecond() {
        assert_eq!(TimingConfig::default().reload(), 3);
        assert_eq!(TimingConfig::new(SYSCLK_HZ, 1_000_000).unwrap().reload(), 49);
    }

    #[test]
    fn timing_rejects_unreachable_tick_rates() {
        assert_eq!(TimingConfig::new(1_000, 1_000_000), Err(ConfigError::TickRateTooHigh));
        assert_eq!(TimingConfig::new(4_000_000, 0), Err(ConfigError::TickRateTooHigh));
        // One source cycle per tick would program a reload of 0.
        assert_eq!(TimingConfig::new(1_000_000, 1_000_000), Err(ConfigError::TickRateTooHigh));
        assert_eq!(TimingConfig::new(SYSCLK_HZ, 1), Err(ConfigError::TickRateTooLow));

        let slowest = TimingConfig::new(SYSCLK_HZ, 3).unwrap();
        assert!(slowest.reload() <= SYSTICK_MAX_RELOAD);
        assert_eq!(TimingConfig::new(2, 1).unwrap().reload(), 1);
    }

    #[test]
    fn zero_divisor_is_rejected() {
        assert_eq!(
            RangingConfig::default().with_cm_divisor(0),
            Err(ConfigError::ZeroDivisor)
        );
        let cfg = RangingConfig::default().with_cm_divisor(148).unwrap();
        assert_eq!(cfg.cm_divisor(), 148);
    }

    #[test]
    fn ranging_builders_override_defaults() {
        let cfg = RangingConfig::default()
            .with_rise_budget(100)
            .with_max_pulse_us(500);
        assert_eq!(cfg.rise_budget, 100);
        assert_eq!(cfg.max_pulse_us, 500);
        assert_eq!(cfg.cm_divisor(), 58);
        assert_eq!(cfg.trigger_pulse_us, 10);
    }
}

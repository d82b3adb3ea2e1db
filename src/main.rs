// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use core::fmt::Write as _;

    use cortex_m_rt::{entry, exception};
    use panic_halt as _;

    use tm4c123x_hal::{
        pac,
        prelude::*,
        serial::{NewlineMode, Serial},
        sysctl::{CrystalFrequency, Oscillator, PllOutputFrequency, SystemClock},
    };

    use rc_vehicle::{
        config::{
            RangingConfig, SteeringPositions, TimingConfig, VehicleConfig, CONSOLE_BAUD, DRIVE_PWM,
            STEERING_PWM,
        },
        control::VehicleController,
        drivers::{DriveMotor, Hcsr04, Steering},
        hw::{pwm::Error as PwmError, systick, BoardPins, Console, Pwm0},
        time::{TickDelay, TICKS},
    };

    #[exception]
    fn SysTick() {
        TICKS.on_tick();
    }

    #[entry]
    fn main() -> ! {
        // Peripherals
        let dp = pac::Peripherals::take().unwrap();
        let cp = cortex_m::Peripherals::take().unwrap();

        // Clocks: 16 MHz crystal, PLL to 50 MHz
        let mut sc = dp.SYSCTL.constrain();
        sc.clock_setup.oscillator = Oscillator::Main(
            CrystalFrequency::_16mhz,
            SystemClock::UsePll(PllOutputFrequency::_50_00mhz),
        );
        let clocks = sc.clock_setup.freeze();

        // GPIO
        let pins = BoardPins::new(
            dp.GPIO_PORTA,
            dp.GPIO_PORTB,
            dp.GPIO_PORTC,
            &sc.power_control,
        );

        // UART0 (DBG)
        let serial = Serial::uart0(
            dp.UART0,
            pins.console.tx,
            pins.console.rx,
            (),
            (),
            CONSOLE_BAUD.bps(),
            NewlineMode::Binary,
            &clocks,
            &sc.power_control,
        );
        let (tx, rx) = serial.split();
        let mut console = Console::new(tx, rx);

        // 1 µs time base
        let _systick = systick::SysTick::start(cp.SYST, &TimingConfig::default());

        // PWM0: drive motor on generator 0, steering servo on generator 1
        let (gen0, gen1) = Pwm0::new(dp.PWM0, &sc.power_control).split();
        let drive_pwm = match gen0.configure(DRIVE_PWM) {
            Ok(ch) => ch,
            Err(e) => halt(&mut console, "drive PWM", e),
        };
        let steering_pwm = match gen1.configure(STEERING_PWM) {
            Ok(ch) => ch,
            Err(e) => halt(&mut console, "steering PWM", e),
        };

        // Devices
        let sonar = Hcsr04::new(
            pins.sonar.trigger,
            pins.sonar.echo,
            TickDelay::new(&TICKS),
            RangingConfig::default(),
        );
        let motor = DriveMotor::new(drive_pwm, pins.drive.dir);
        let steering = Steering::new(steering_pwm, SteeringPositions::default());

        let mut vehicle =
            VehicleController::new(sonar, motor, steering, console, VehicleConfig::default());

        vehicle.start();

        loop {
            vehicle.step();
        }
    }

    fn halt<TX, RX>(console: &mut Console<TX, RX>, what: &str, e: PwmError) -> !
    where
        TX: embedded_hal::serial::Write<u8>,
        RX: embedded_hal::serial::Read<u8>,
    {
        let _ = write!(console, "{} init failed: {:?}\r\n", what, e);
        loop {
            cortex_m::asm::wfi();
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}

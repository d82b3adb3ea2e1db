// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the TM4C123GH6PM vehicle board.

use tm4c123x_hal::{
    gpio::{
        gpioa, gpiob, gpioc, AlternateFunction, Input, Output, PullDown, PushPull, AF1, AF4,
    },
    pac,
    prelude::*,
    sysctl::PowerControl,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIO_PORTA, dp.GPIO_PORTB, dp.GPIO_PORTC, &sc.power_control);
/// ```
pub struct BoardPins {
    pub console: ConsolePins,
    pub sonar: SonarPins,
    pub drive: DrivePins,
    pub steering: SteeringPins,
}

/// UART0 through the debug USB bridge.
pub struct ConsolePins {
    pub tx: gpioa::PA1<AlternateFunction<AF1, PushPull>>,
    pub rx: gpioa::PA0<AlternateFunction<AF1, PushPull>>,
}

/// HC-SR04 ultrasonic sensor.
pub struct SonarPins {
    pub trigger: gpioc::PC4<Output<PushPull>>,
    pub echo: gpioc::PC5<Input<PullDown>>,
}

/// Rear drive motor.
pub struct DrivePins {
    pub pwm: gpiob::PB6<AlternateFunction<AF4, PushPull>>, // M0PWM0
    pub dir: gpiob::PB7<Output<PushPull>>,
}

/// Front steering servo.
pub struct SteeringPins {
    pub pwm: gpiob::PB4<AlternateFunction<AF4, PushPull>>, // M0PWM2
}

impl BoardPins {
    /// Power the GPIO ports and put every named pin in its working mode.
    pub fn new(
        gpioa: pac::GPIO_PORTA,
        gpiob: pac::GPIO_PORTB,
        gpioc: pac::GPIO_PORTC,
        pc: &PowerControl,
    ) -> Self {
        let mut porta = gpioa.split(pc);
        let mut portb = gpiob.split(pc);
        let portc = gpioc.split(pc);

        Self {
            console: ConsolePins {
                tx: porta.pa1.into_af_push_pull::<AF1>(&mut porta.control),
                rx: porta.pa0.into_af_push_pull::<AF1>(&mut porta.control),
            },

            sonar: SonarPins {
                trigger: portc.pc4.into_push_pull_output(),
                echo: portc.pc5.into_pull_down_input(),
            },

            drive: DrivePins {
                pwm: portb.pb6.into_af_push_pull::<AF4>(&mut portb.control),
                dir: portb.pb7.into_push_pull_output(),
            },

            steering: SteeringPins {
                pwm: portb.pb4.into_af_push_pull::<AF4>(&mut portb.control),
            },
        }
    }
}

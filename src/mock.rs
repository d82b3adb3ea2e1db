//! Host-side stand-ins for pins, delays, PWM channels, the serial port and the rangefinder.
//!
//! Everything here shares state through `Rc<RefCell<_>>` so a test can keep a handle and inspect
//! what the driver under test did after handing the mock over.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::serial;
use embedded_hal::PwmPin;

use crate::drivers::hcsr04::{self, Measurement, Rangefinder};

// ---------------------------------------------------------------------------------------------
// Ultrasonic sensor simulation
// ---------------------------------------------------------------------------------------------

/// How the simulated sensor answers a trigger pulse.
#[derive(Copy, Clone, Debug)]
pub enum EchoScript {
    /// Echo never rises.
    Silent,
    /// Echo rises on poll number `after_polls + 1` and stays high for `width_us` of simulated time.
    Pulse { after_polls: u32, width_us: u64 },
    /// Echo rises on poll number `after_polls + 1` and never falls.
    StuckHigh { after_polls: u32 },
}

struct SonarState {
    now_us: u64,
    script: EchoScript,
    trigger_high: bool,
    trigger_rose_at: u64,
    trigger_widths: Vec<u64>,
    armed: bool,
    rise_polls: u32,
    echo_rose_at: Option<u64>,
}

/// Simulated HC-SR04 with a shared microsecond clock.
///
/// The clock only advances through [`SimDelay`], so a tight polling loop sees frozen time, the same
/// way the sensor driver counts polls rather than microseconds while waiting for the echo.
#[derive(Clone)]
pub struct Sonar(Rc<RefCell<SonarState>>);

impl Sonar {
    pub fn new(script: EchoScript) -> Self {
        Self(Rc::new(RefCell::new(SonarState {
            now_us: 0,
            script,
            trigger_high: false,
            trigger_rose_at: 0,
            trigger_widths: Vec::new(),
            armed: false,
            rise_polls: 0,
            echo_rose_at: None,
        })))
    }

    pub fn trigger(&self) -> SonarTrigger {
        SonarTrigger(self.clone())
    }

    pub fn echo(&self) -> SonarEcho {
        SonarEcho(self.clone())
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(self.clone())
    }

    pub fn set_script(&self, script: EchoScript) {
        self.0.borrow_mut().script = script;
    }

    /// Width of every completed trigger pulse, in simulated microseconds.
    pub fn trigger_widths(&self) -> Vec<u64> {
        self.0.borrow().trigger_widths.clone()
    }

    /// Polls spent waiting for the echo to rise during the last cycle.
    pub fn rise_polls(&self) -> u32 {
        self.0.borrow().rise_polls
    }

    pub fn now_us(&self) -> u64 {
        self.0.borrow().now_us
    }
}

pub struct SonarTrigger(Sonar);

impl OutputPin for SonarTrigger {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut s = (self.0).0.borrow_mut();
        if !s.trigger_high {
            s.trigger_high = true;
            s.trigger_rose_at = s.now_us;
        }
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut s = (self.0).0.borrow_mut();
        if s.trigger_high {
            s.trigger_high = false;
            let width = s.now_us - s.trigger_rose_at;
            s.trigger_widths.push(width);
            s.armed = true;
            s.rise_polls = 0;
            s.echo_rose_at = None;
        }
        Ok(())
    }
}

pub struct SonarEcho(Sonar);

impl InputPin for SonarEcho {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        let mut s = (self.0).0.borrow_mut();
        if !s.armed {
            return Ok(false);
        }

        if let Some(rose) = s.echo_rose_at {
            return Ok(match s.script {
                EchoScript::Pulse { width_us, .. } => s.now_us < rose + width_us,
                EchoScript::StuckHigh { .. } => true,
                EchoScript::Silent => false,
            });
        }

        s.rise_polls += 1;
        let after = match s.script {
            EchoScript::Silent => return Ok(false),
            EchoScript::Pulse { after_polls, .. } => after_polls,
            EchoScript::StuckHigh { after_polls } => after_polls,
        };
        if s.rise_polls > after {
            let now = s.now_us;
            s.echo_rose_at = Some(now);
            return Ok(true);
        }
        Ok(false)
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|h| !h)
    }
}

/// Delay that advances the simulated clock instead of sleeping.
pub struct SimDelay(Sonar);

impl DelayUs<u32> for SimDelay {
    fn delay_us(&mut self, us: u32) {
        (self.0).0.borrow_mut().now_us += us as u64;
    }
}

// ---------------------------------------------------------------------------------------------
// Plain GPIO
// ---------------------------------------------------------------------------------------------

/// Output pin that remembers its level.
#[derive(Clone, Default)]
pub struct MockPin(Rc<RefCell<bool>>);

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        *self.0.borrow()
    }
}

impl OutputPin for MockPin {
    type Error = Infallible;

    fn set_high(&mut self) -> Result<(), Self::Error> {
        *self.0.borrow_mut() = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        *self.0.borrow_mut() = false;
        Ok(())
    }
}

// ---------------------------------------------------------------------------------------------
// PWM
// ---------------------------------------------------------------------------------------------

#[derive(Default)]
struct PwmState {
    enabled: bool,
    duty: u16,
    writes: u32,
}

/// PWM channel that records duty writes and the enable state.
#[derive(Clone)]
pub struct MockPwm {
    state: Rc<RefCell<PwmState>>,
    max: u16,
}

impl MockPwm {
    pub fn new(max: u16) -> Self {
        Self {
            state: Rc::new(RefCell::new(PwmState::default())),
            max,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    pub fn duty(&self) -> u16 {
        self.state.borrow().duty
    }

    pub fn writes(&self) -> u32 {
        self.state.borrow().writes
    }
}

impl PwmPin for MockPwm {
    type Duty = u16;

    fn disable(&mut self) {
        self.state.borrow_mut().enabled = false;
    }

    fn enable(&mut self) {
        self.state.borrow_mut().enabled = true;
    }

    fn get_duty(&self) -> u16 {
        self.state.borrow().duty
    }

    fn get_max_duty(&self) -> u16 {
        self.max
    }

    fn set_duty(&mut self, duty: u16) {
        let mut s = self.state.borrow_mut();
        s.duty = duty;
        s.writes += 1;
    }
}

// ---------------------------------------------------------------------------------------------
// Serial
// ---------------------------------------------------------------------------------------------

#[derive(Default)]
struct SerialState {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

/// Serial port with a scripted receive queue and a captured transmit log.
#[derive(Clone, Default)]
pub struct MockSerial(Rc<RefCell<SerialState>>);

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&self, bytes: &[u8]) {
        self.0.borrow_mut().rx.extend(bytes.iter().copied());
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().rx.len()
    }

    /// Everything transmitted so far, as text.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow().tx).into_owned()
    }

    pub fn clear_output(&self) {
        self.0.borrow_mut().tx.clear();
    }
}

impl serial::Read<u8> for MockSerial {
    type Error = Infallible;

    fn read(&mut self) -> nb::Result<u8, Self::Error> {
        self.0
            .borrow_mut()
            .rx
            .pop_front()
            .ok_or(nb::Error::WouldBlock)
    }
}

impl serial::Write<u8> for MockSerial {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        self.0.borrow_mut().tx.push(word);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------------------------
// Rangefinder
// ---------------------------------------------------------------------------------------------

/// Rangefinder that replays a fixed list of results, repeating the last one when exhausted.
pub struct ScriptedRanger {
    script: VecDeque<Result<Measurement, hcsr04::Error>>,
    last: Result<Measurement, hcsr04::Error>,
}

impl ScriptedRanger {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            last: Err(hcsr04::Error::NoEcho),
        }
    }

    /// Queue a reading of `cm` centimeters.
    pub fn cm(mut self, cm: u32) -> Self {
        self.script.push_back(Ok(Measurement {
            pulse_us: cm * hcsr04::CM_DIVISOR,
            distance_cm: cm,
        }));
        self
    }

    pub fn err(mut self, e: hcsr04::Error) -> Self {
        self.script.push_back(Err(e));
        self
    }
}

impl Rangefinder for ScriptedRanger {
    fn measure(&mut self) -> Result<Measurement, hcsr04::Error> {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
    }
}

//! Front steering servo on a 50 Hz PWM channel.
//!
//! Positions are raw compare counts at the 3.125 MHz PWM clock; see
//! [`SteeringPositions`](crate::config::SteeringPositions) for the defaults.

use embedded_hal::PwmPin;

use crate::config::SteeringPositions;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Position {
    Left,
    Center,
    Right,
}

pub struct Steering<Pwm> {
    pwm: Pwm,
    positions: SteeringPositions,
    position: Option<Position>,
}

impl<Pwm> Steering<Pwm>
where
    Pwm: PwmPin<Duty = u16>,
{
    /// Wrap an initialized PWM channel. The wheel is left wherever it is until commanded.
    pub fn new(mut pwm: Pwm, positions: SteeringPositions) -> Self {
        pwm.enable();
        Self {
            pwm,
            positions,
            position: None,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        let pulse = match position {
            Position::Left => self.positions.left,
            Position::Center => self.positions.center,
            Position::Right => self.positions.right,
        };
        self.set_pulse(pulse);
        self.position = Some(position);
    }

    #[inline]
    pub fn left(&mut self) {
        self.set_position(Position::Left);
    }

    #[inline]
    pub fn center(&mut self) {
        self.set_position(Position::Center);
    }

    #[inline]
    pub fn right(&mut self) {
        self.set_position(Position::Right);
    }

    /// Write a raw compare count. Forgets the named position.
    pub fn set_pulse(&mut self, pulse: u16) {
        let max = self.pwm.get_max_duty();
        self.pwm.set_duty(pulse.min(max));
        self.position = None;
    }

    /// Last named position, `None` before the first command or after a raw write.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[inline]
    pub fn pulse(&self) -> u16 {
        self.pwm.get_duty()
    }

    pub fn free(self) -> Pwm {
        self.pwm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPwm;

    #[test]
    fn named_positions_map_to_compare_counts() {
        let pwm = MockPwm::new(62_500);
        let mut s = Steering::new(pwm.clone(), SteeringPositions::default());
        assert!(pwm.is_enabled());
        assert_eq!(s.position(), None);

        s.left();
        assert_eq!(pwm.duty(), 1_500);
        assert_eq!(s.position(), Some(Position::Left));

        s.center();
        assert_eq!(pwm.duty(), 4_688);

        s.right();
        assert_eq!(s.pulse(), 7_812);
        assert_eq!(s.position(), Some(Position::Right));
    }

    #[test]
    fn raw_pulse_clears_named_position() {
        let pwm = MockPwm::new(10_000);
        let mut s = Steering::new(pwm.clone(), SteeringPositions::default());

        s.center();
        s.set_pulse(20_000);
        assert_eq!(pwm.duty(), 10_000);
        assert_eq!(s.position(), None);
    }
}

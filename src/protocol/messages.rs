// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Single-byte commands typed at the serial terminal.

// Command bytes
pub const CMD_FORWARD: u8 = b'A';
pub const CMD_REVERSE: u8 = b'B';
pub const CMD_STEER_RIGHT: u8 = b'C';
pub const CMD_STEER_LEFT: u8 = b'D';
pub const CMD_STEER_CENTER: u8 = b'm';
pub const CMD_STOP: u8 = b' ';

/// Vehicle commands.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Forward,
    Reverse,
    Stop,
    SteerLeft,
    SteerCenter,
    SteerRight,
}

impl Command {
    /// Decode one received byte. Unknown bytes yield `None`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            CMD_FORWARD => Some(Command::Forward),
            CMD_REVERSE => Some(Command::Reverse),
            CMD_STOP => Some(Command::Stop),
            CMD_STEER_LEFT => Some(Command::SteerLeft),
            CMD_STEER_CENTER => Some(Command::SteerCenter),
            CMD_STEER_RIGHT => Some(Command::SteerRight),
            _ => None,
        }
    }
}

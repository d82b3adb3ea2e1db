// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! UART console.
//!
//! Wraps the TX/RX halves of a configured serial port and provides printing helpers plus the
//! line-editing input routines used from a serial terminal. It is also the firmware's only log
//! sink: status lines go out through [`Console::println`] or `writeln!`.
//!
//! Note: When using `writeln!`, be sure to include `\r` (CR) in the format string to ensure correct
//! line endings on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/ttyACM0 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use core::fmt;
use nb::block;

use embedded_hal::serial::{Read, Write};

pub const CR: u8 = 0x0D;
pub const LF: u8 = 0x0A;
pub const BS: u8 = 0x08;

pub struct Console<TX, RX> {
    tx: TX,
    rx: RX,
    /// Byte pulled off the receiver by `available()` but not yet consumed.
    pending: Option<u8>,
}

impl<TX, RX> Console<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    pub fn new(tx: TX, rx: RX) -> Self {
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    pub fn write_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
    }

    /// Write string and CRLF terminator.
    #[inline]
    pub fn println(&mut self, s: &str) {
        self.write_str(s);
        self.newline();
    }

    #[inline]
    pub fn newline(&mut self) {
        self.write_byte(CR);
        self.write_byte(LF);
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    pub fn flush(&mut self) {
        let _ = block!(self.tx.flush());
    }

    pub fn print_hex_u32(&mut self, n: u32) {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        self.write_str("0x");
        for shift in (0..=28).rev().step_by(4) {
            self.write_byte(HEX[((n >> shift) & 0xF) as usize]);
        }
    }

    pub fn print_u32(&mut self, mut n: u32) {
        let mut buf = [0u8; 10];
        let mut i = buf.len();
        if n == 0 {
            self.write_byte(b'0');
            return;
        }
        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        for &b in &buf[i..] {
            self.write_byte(b);
        }
    }

    /// True if a received byte is waiting. Never blocks.
    pub fn available(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        match self.rx.read() {
            Ok(b) => {
                self.pending = Some(b);
                true
            }
            Err(_) => false,
        }
    }

    /// Take a received byte if there is one.
    pub fn try_read_byte(&mut self) -> Option<u8> {
        if self.available() {
            self.pending.take()
        } else {
            None
        }
    }

    /// Block until a byte arrives.
    pub fn read_byte(&mut self) -> u8 {
        loop {
            if let Some(b) = self.try_read_byte() {
                return b;
            }
        }
    }

    /// Read a CR-terminated line into `buf`, echoing as it goes.
    ///
    /// Backspace removes the last character (and is echoed); characters past the end of `buf` are
    /// dropped without echo. Returns the number of bytes stored.
    pub fn read_line(&mut self, buf: &mut [u8]) -> usize {
        let mut len = 0;
        loop {
            let c = self.read_byte();
            match c {
                CR => return len,
                BS => {
                    if len > 0 {
                        len -= 1;
                        self.write_byte(BS);
                    }
                }
                _ if len < buf.len() => {
                    buf[len] = c;
                    len += 1;
                    self.write_byte(c);
                }
                _ => {}
            }
        }
    }

    /// Read an unsigned decimal number terminated by CR. Non-digits are ignored.
    pub fn read_u32_decimal(&mut self) -> u32 {
        let mut number: u32 = 0;
        let mut digits = 0;
        loop {
            let c = self.read_byte();
            match c {
                CR => return number,
                b'0'..=b'9' => {
                    number = number.wrapping_mul(10).wrapping_add((c - b'0') as u32);
                    digits += 1;
                    self.write_byte(c);
                }
                BS if digits > 0 => {
                    number /= 10;
                    digits -= 1;
                    self.write_byte(c);
                }
                _ => {}
            }
        }
    }

    /// Read an unsigned hexadecimal number (no prefix) terminated by CR.
    pub fn read_u32_hex(&mut self) -> u32 {
        let mut number: u32 = 0;
        let mut digits = 0;
        loop {
            let c = self.read_byte();
            if c == CR {
                return number;
            }
            if let Some(d) = hex_digit(c) {
                number = number.wrapping_mul(0x10).wrapping_add(d);
                digits += 1;
                self.write_byte(c);
            } else if c == BS && digits > 0 {
                number /= 0x10;
                digits -= 1;
                self.write_byte(c);
            }
        }
    }

    pub fn free(self) -> (TX, RX) {
        (self.tx, self.rx)
    }
}

fn hex_digit(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some((c - b'0') as u32),
        b'A'..=b'F' => Some((c - b'A' + 0xA) as u32),
        b'a'..=b'f' => Some((c - b'a' + 0xA) as u32),
        _ => None,
    }
}

// Implement `core::fmt::Write` so we can use `write!` / `writeln!` on `Console`.
impl<TX, RX> fmt::Write for Console<TX, RX>
where
    TX: Write<u8>,
    RX: Read<u8>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}

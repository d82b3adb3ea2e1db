// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod messages;

pub use messages::Command;

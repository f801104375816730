#![allow(clippy::uninlined_format_args)]

//! Error related data structures shared across the emulator crate.
//!
//! The core treats the simulated machine as a total function (every address
//! produces a value, every opcode maps to a handler), so this enum is small
//! and only covers load-time/host-facing misuse, never mid-emulation
//! failures from the CPU, PPU, APU or DMA.

use std::fmt::{self, Display, Formatter};
use std::io;

/// Top level enum for error handling within the emulator domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// ROM shorter than 0x0150 bytes, unrecognized cartridge-type byte, or
    /// declared ROM/RAM size inconsistent with the buffer length.
    InvalidRom(String),
    /// `set_ram` called with a byte count that doesn't match the
    /// cartridge's declared RAM size. Not fatal, the host may retry.
    PersistenceMismatch(String),
    /// A documented "locks the CPU" opcode was fetched while the CPU is
    /// configured to raise rather than silently lock.
    IllegalOpcode(u8),
    InvalidParameter(String),
    CustomError(String),
}

impl Error {
    pub fn description(&self) -> String {
        match self {
            Error::InvalidRom(message) => format!("Invalid ROM: {}", message),
            Error::PersistenceMismatch(message) => format!("Persistence mismatch: {}", message),
            Error::IllegalOpcode(opcode) => format!("Illegal CPU opcode: 0x{:02x}", opcode),
            Error::InvalidParameter(message) => format!("Invalid parameter: {}", message),
            Error::CustomError(message) => String::from(message),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::CustomError(format!("I/O error: {}", value))
    }
}

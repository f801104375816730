//! Implementation of serial (Link Cable) peer devices.
//!
//! These are virtual devices used mostly for testing purposes: [`buffer::BufferDevice`]
//! accumulates bytes written by the Game Boy so test ROMs that report results over the
//! serial port can be inspected, and [`stdout::StdoutDevice`] mirrors them to the console.

pub mod buffer;
pub mod stdout;

//! Host-facing output/input seams: framebuffer, audio and pad polling.
//!
//! These traits let a host embed the core without the core ever needing
//! to know about windowing, an audio back-end, or how input is sourced.
//! They're independent of the flat buffer accessors already exposed by
//! [`crate::ppu::Ppu`] and [`crate::apu::Apu`]; a host can use either or
//! both.

use crate::pad::PadKey;

/// Receives one pixel at a time for a completed video frame.
///
/// Called once per pixel, in raster order, after a frame has finished
/// rendering. Color values are already resolved to 8-bit RGB regardless
/// of the underlying Game Boy or Game Boy Color palette in use.
pub trait FramebufferSink {
    fn put_pixel(&mut self, x: usize, y: usize, r: u8, g: u8, b: u8);
}

/// Receives mixed stereo audio samples produced by the APU.
pub trait AudioSink {
    /// Pushes a single stereo sample pair, normalized to `[-1.0, 1.0]`.
    fn push_sample(&mut self, left: f32, right: f32);

    /// Signals that no further samples will arrive for the current
    /// batch. Sinks that buffer internally (e.g. to hand off to an
    /// audio thread) can use this to flush; the default is a no-op.
    fn flush(&mut self) {}
}

/// No-op [`AudioSink`], used as the default when a host attaches no
/// audio back-end.
#[derive(Default)]
pub struct NullAudioSink;

impl AudioSink for NullAudioSink {
    fn push_sample(&mut self, _left: f32, _right: f32) {}
}

/// Snapshot of which buttons are currently held, polled once per frame
/// from an [`InputSource`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ButtonSet {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub start: bool,
    pub select: bool,
    pub a: bool,
    pub b: bool,
}

impl ButtonSet {
    /// Iterates the keys currently marked as pressed.
    pub fn pressed(&self) -> impl Iterator<Item = PadKey> + '_ {
        let keys: [(bool, PadKey); 8] = [
            (self.up, PadKey::Up),
            (self.down, PadKey::Down),
            (self.left, PadKey::Left),
            (self.right, PadKey::Right),
            (self.start, PadKey::Start),
            (self.select, PadKey::Select),
            (self.a, PadKey::A),
            (self.b, PadKey::B),
        ];
        keys.into_iter()
            .filter(|(pressed, _)| *pressed)
            .map(|(_, key)| key)
    }
}

/// Polled once per frame by the host run-loop to update the pad state,
/// as an alternative to calling `key_press`/`key_lift` directly.
pub trait InputSource {
    fn poll(&mut self) -> ButtonSet;
}

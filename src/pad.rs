#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub struct Pad {
    down: bool,
    up: bool,
    left: bool,
    right: bool,
    start: bool,
    select: bool,
    b: bool,
    a: bool,
    selection: PadSelection,
    int_pad: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub enum PadSelection {
    Action,
    Direction,
}

#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadKey {
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    A,
    B,
}

impl Pad {
    pub fn new() -> Self {
        Self {
            down: false,
            up: false,
            left: false,
            right: false,
            start: false,
            select: false,
            b: false,
            a: false,
            selection: PadSelection::Action,
            int_pad: false,
        }
    }

    /// Computes the lower nibble of the joypad register (the actual
    /// button state for the currently selected group), without the
    /// selection bits. Active-low: 0 means pressed.
    fn output_bits(&self) -> u8 {
        match self.selection {
            PadSelection::Action => {
                (if self.a { 0x00 } else { 0x01 })
                    | if self.b { 0x00 } else { 0x02 }
                    | if self.select { 0x00 } else { 0x04 }
                    | if self.start { 0x00 } else { 0x08 }
            }
            PadSelection::Direction => {
                (if self.right { 0x00 } else { 0x01 })
                    | if self.left { 0x00 } else { 0x02 }
                    | if self.up { 0x00 } else { 0x04 }
                    | if self.down { 0x00 } else { 0x08 }
            }
        }
    }

    /// Requests a Joypad interrupt whenever `before` had a high bit
    /// (released) that `after` reports low (pressed), matching the
    /// real hardware's falling-edge detection on the selected lines.
    fn detect_edge(&mut self, before: u8) {
        let after = self.output_bits();
        if before & !after & 0x0f != 0 {
            self.int_pad = true;
        }
    }

    pub fn read(&mut self, addr: u16) -> u8 {
        match addr & 0x00ff {
            0x0000 => {
                let mut value = self.output_bits();
                value |= if self.selection == PadSelection::Direction {
                    0x10
                } else {
                    0x00
                } | if self.selection == PadSelection::Action {
                    0x20
                } else {
                    0x00
                };
                value
            }
            addr => panic!("Reading from unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        match addr & 0x00ff {
            0x0000 => {
                let before = self.output_bits();
                self.selection = if value & 0x10 == 0x00 {
                    PadSelection::Direction
                } else {
                    PadSelection::Action
                };
                self.detect_edge(before);
            }
            addr => panic!("Writing to unknown Pad location 0x{:04x}", addr),
        }
    }

    pub fn key_press(&mut self, key: PadKey) {
        let before = self.output_bits();
        match key {
            PadKey::Up => self.up = true,
            PadKey::Down => self.down = true,
            PadKey::Left => self.left = true,
            PadKey::Right => self.right = true,
            PadKey::Start => self.start = true,
            PadKey::Select => self.select = true,
            PadKey::A => self.a = true,
            PadKey::B => self.b = true,
        }
        self.detect_edge(before);
    }

    pub fn key_lift(&mut self, key: PadKey) {
        match key {
            PadKey::Up => self.up = false,
            PadKey::Down => self.down = false,
            PadKey::Left => self.left = false,
            PadKey::Right => self.right = false,
            PadKey::Start => self.start = false,
            PadKey::Select => self.select = false,
            PadKey::A => self.a = false,
            PadKey::B => self.b = false,
        }
    }

    #[inline(always)]
    pub fn int_pad(&self) -> bool {
        self.int_pad
    }

    #[inline(always)]
    pub fn set_int_pad(&mut self, value: bool) {
        self.int_pad = value;
    }

    #[inline(always)]
    pub fn ack_pad(&mut self) {
        self.set_int_pad(false);
    }
}

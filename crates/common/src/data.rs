//! Little-endian primitive read/write helpers shared by every component's
//! `StateComponent` implementation.

use std::io::{Read, Write};

use crate::error::Error;

#[inline(always)]
pub fn read_u8<R: Read>(data: &mut R) -> Result<u8, Error> {
    let mut buffer = [0x00; size_of::<u8>()];
    data.read_exact(&mut buffer)?;
    Ok(u8::from_le_bytes(buffer))
}

#[inline(always)]
pub fn read_u16<R: Read>(data: &mut R) -> Result<u16, Error> {
    let mut buffer = [0x00; size_of::<u16>()];
    data.read_exact(&mut buffer)?;
    Ok(u16::from_le_bytes(buffer))
}

#[inline(always)]
pub fn read_u32<R: Read>(data: &mut R) -> Result<u32, Error> {
    let mut buffer = [0x00; size_of::<u32>()];
    data.read_exact(&mut buffer)?;
    Ok(u32::from_le_bytes(buffer))
}

#[inline(always)]
pub fn write_u8<W: Write>(data: &mut W, value: u8) -> Result<(), Error> {
    data.write_all(&value.to_le_bytes())?;
    Ok(())
}

#[inline(always)]
pub fn write_u16<W: Write>(data: &mut W, value: u16) -> Result<(), Error> {
    data.write_all(&value.to_le_bytes())?;
    Ok(())
}

#[inline(always)]
pub fn write_u32<W: Write>(data: &mut W, value: u32) -> Result<(), Error> {
    data.write_all(&value.to_le_bytes())?;
    Ok(())
}

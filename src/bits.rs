//! Bit-level helpers: masks, single bits, bit fields and text rendering.
//!
//! Offsets count from the least significant bit, so in `0b1111_0000` the
//! rightmost zero sits at offset 0 and the leftmost one at offset 7.

use crate::error::{ArithError, ArithResult};
use crate::types::IntWidth;

pub const MAX_BIT_WIDTH: u32 = 32;

/// `2^width - 1`, for widths `1..=32`.
pub fn width_mask(width: u32) -> ArithResult<u32> {
    match width {
        1..=31 => Ok((1u32 << width) - 1),
        MAX_BIT_WIDTH => Ok(u32::MAX),
        _ => Err(ArithError::BitWidthOutOfRange(width)),
    }
}

/// Clears every bit at or above `width`.
pub fn truncate(x: u32, width: u32) -> ArithResult<u32> {
    Ok(x & width_mask(width)?)
}

pub fn nand(a: u32, b: u32) -> u32 {
    !(a & b)
}

pub fn nor(a: u32, b: u32) -> u32 {
    !(a | b)
}

pub fn xnor(a: u32, b: u32) -> u32 {
    !(a ^ b)
}

fn check_field(offset: u32, width: u32) -> ArithResult<()> {
    width_mask(width)?;
    if offset.checked_add(width).map_or(true, |end| end > MAX_BIT_WIDTH) {
        return Err(ArithError::BitFieldOutOfRange { offset, width });
    }
    Ok(())
}

pub fn get_bit(x: u32, offset: u32) -> ArithResult<bool> {
    check_field(offset, 1)?;
    Ok(x & (1 << offset) != 0)
}

pub fn set_bit(x: u32, offset: u32, bit: bool) -> ArithResult<u32> {
    check_field(offset, 1)?;
    let res = if bit {
        x | (1 << offset)
    } else {
        x & !(1 << offset)
    };
    Ok(res)
}

/// Reads the `width`-bit field starting at `offset`.
pub fn get_bits(x: u32, offset: u32, width: u32) -> ArithResult<u32> {
    check_field(offset, width)?;
    Ok((x >> offset) & width_mask(width)?)
}

/// Overwrites the `width`-bit field starting at `offset` with the low bits of `field`.
pub fn set_bits(x: u32, field: u32, offset: u32, width: u32) -> ArithResult<u32> {
    check_field(offset, width)?;
    let mask = width_mask(width)? << offset;
    Ok((x & !mask) | ((field << offset) & mask))
}

fn check_render_width(width: u32) -> ArithResult<()> {
    match width {
        1..=64 => Ok(()),
        _ => Err(ArithError::BitWidthOutOfRange(width)),
    }
}

/// Renders the low `width` bits (`1..=64`), most significant first.
/// Leading zeros are kept, so the result is always `width` characters long.
pub fn to_binary_string(x: u64, width: u32) -> ArithResult<String> {
    check_render_width(width)?;
    Ok(render_binary(x, width))
}

fn render_binary(x: u64, width: u32) -> String {
    (0..width)
        .rev()
        .map(|i| if x & (1 << i) != 0 { '1' } else { '0' })
        .collect()
}

/// The full bit pattern of a value of the given width.
pub fn pattern_string(x: u64, width: IntWidth) -> String {
    render_binary(x, width.bits())
}

/// The 32-character form used for printing 32-bit patterns.
pub fn bits_to_string(x: u32) -> String {
    pattern_string(x as u64, IntWidth::Int32)
}

/// Renders the low `width` bits (`1..=64`) as lowercase hex, one digit per
/// started nibble. Leading zeros are kept, as in [`to_binary_string`].
pub fn to_hex_string(x: u64, width: u32) -> ArithResult<String> {
    check_render_width(width)?;
    let digits = ((width + 3) / 4) as usize;
    let value = if width == 64 { x } else { x & ((1u64 << width) - 1) };
    Ok(format!("{:0digits$x}", value, digits = digits))
}

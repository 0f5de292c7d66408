//! Small shared helpers for the compression core.

/// Rotate a 32-bit word left by `n` bits.
#[inline(always)]
pub const fn rotl32(x: u32, n: u32) -> u32 {
  x.rotate_left(n)
}

/// Rotate a 32-bit word right by `n` bits.
#[inline(always)]
pub const fn rotr32(x: u32, n: u32) -> u32 {
  x.rotate_right(n)
}

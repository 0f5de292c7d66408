#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use traits::Digest;
use zeroize::Zeroize;

use crate::util::{rotl32, rotr32};

const BLOCK_LEN: usize = 64;

const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

/// Round constants, one per group of twenty rounds.
const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn parity(x: u32, y: u32, z: u32) -> u32 {
  x ^ y ^ z
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

/// Streaming SHA-1 hasher.
///
/// The context is the classic `h` / `count` / `buffer` triple: five chaining
/// words, a two-word bit counter, and one partial block of buffered input.
#[derive(Clone)]
pub struct Sha1 {
  h: [u32; 5],
  count: [u32; 2],
  buffer: [u8; BLOCK_LEN],
}

impl Default for Sha1 {
  #[inline]
  fn default() -> Self {
    Self {
      h: H0,
      count: [0, 0],
      buffer: [0u8; BLOCK_LEN],
    }
  }
}

impl Sha1 {
  /// Compute the digest of `data` in one shot.
  ///
  /// This specializes inputs that fit in ≤ 2 compression blocks to avoid the
  /// streaming buffer and finalize overhead for tiny messages.
  #[inline]
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 20] {
    // Two-block limit:
    // - If `len < 64`, padding uses 1 or 2 blocks.
    // - If `64 <= len < 64 + 56`, we have exactly one full block + a final block (remainder < 56), i.e.
    //   2 blocks total.
    if data.len() < 120 {
      let mut state = H0;

      let total_len = data.len() as u64;
      let bit_len = total_len.wrapping_mul(8);

      let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
      if !blocks.is_empty() {
        // For `len < 120`, there can be at most one full block here.
        Self::compress_block(&mut state, &blocks[0]);
      }

      let mut block0 = [0u8; BLOCK_LEN];
      block0[..rest.len()].copy_from_slice(rest);
      block0[rest.len()] = 0x80;

      if data.len() < 56 {
        block0[56..64].copy_from_slice(&bit_len.to_be_bytes());
        Self::compress_block(&mut state, &block0);
      } else if blocks.is_empty() {
        // `56 <= len < 64`: padding spills into a second block.
        Self::compress_block(&mut state, &block0);
        let mut block1 = [0u8; BLOCK_LEN];
        block1[56..64].copy_from_slice(&bit_len.to_be_bytes());
        Self::compress_block(&mut state, &block1);
        block1.zeroize();
      } else {
        // `64 <= len < 120`: remainder < 56, so length fits in the final block.
        block0[56..64].copy_from_slice(&bit_len.to_be_bytes());
        Self::compress_block(&mut state, &block0);
      }
      block0.zeroize();

      let mut out = [0u8; 20];
      for (i, word) in state.iter().copied().enumerate() {
        let offset = i * 4;
        out[offset..offset + 4].copy_from_slice(&word.to_be_bytes());
      }
      out
    } else {
      let mut h = Self::new();
      h.update(data);
      h.finalize_scrub()
    }
  }

  #[inline(always)]
  fn compress_block(state: &mut [u32; 5], block: &[u8; BLOCK_LEN]) {
    // 16-word ring buffer message schedule, recomputed in place (mod 16)
    // instead of materializing all 80 expanded words.
    //
    // The rounds are fully unrolled to avoid bounds checks and allow better
    // instruction scheduling in the scalar core.
    let mut w = [0u32; 16];
    let (chunks, _) = block.as_chunks::<4>();
    for (i, c) in chunks.iter().enumerate() {
      w[i] = u32::from_be_bytes(*c);
    }

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! sched {
      ($i:expr) => {{
        w[$i & 15] = rotl32(w[($i + 13) & 15] ^ w[($i + 8) & 15] ^ w[($i + 2) & 15] ^ w[$i & 15], 1);
        w[$i & 15]
      }};
    }

    // Round groups per FIPS 180-1: rounds 0-15 consume the message words
    // directly, 16-19 switch to the schedule recurrence, then three more
    // groups of twenty with their own boolean function and constant.
    macro_rules! r0 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $i:expr) => {{
        $e = $e
          .wrapping_add(ch($b, $c, $d))
          .wrapping_add(w[$i])
          .wrapping_add(K[0])
          .wrapping_add(rotl32($a, 5));
        $b = rotr32($b, 2);
      }};
    }

    macro_rules! r1 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $i:expr) => {{
        $e = $e
          .wrapping_add(ch($b, $c, $d))
          .wrapping_add(sched!($i))
          .wrapping_add(K[0])
          .wrapping_add(rotl32($a, 5));
        $b = rotr32($b, 2);
      }};
    }

    macro_rules! r2 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $i:expr) => {{
        $e = $e
          .wrapping_add(parity($b, $c, $d))
          .wrapping_add(sched!($i))
          .wrapping_add(K[1])
          .wrapping_add(rotl32($a, 5));
        $b = rotr32($b, 2);
      }};
    }

    macro_rules! r3 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $i:expr) => {{
        $e = $e
          .wrapping_add(maj($b, $c, $d))
          .wrapping_add(sched!($i))
          .wrapping_add(K[2])
          .wrapping_add(rotl32($a, 5));
        $b = rotr32($b, 2);
      }};
    }

    macro_rules! r4 {
      ($a:ident, $b:ident, $c:ident, $d:ident, $e:ident, $i:expr) => {{
        $e = $e
          .wrapping_add(parity($b, $c, $d))
          .wrapping_add(sched!($i))
          .wrapping_add(K[3])
          .wrapping_add(rotl32($a, 5));
        $b = rotr32($b, 2);
      }};
    }

    r0!(a, b, c, d, e, 0);
    r0!(e, a, b, c, d, 1);
    r0!(d, e, a, b, c, 2);
    r0!(c, d, e, a, b, 3);
    r0!(b, c, d, e, a, 4);
    r0!(a, b, c, d, e, 5);
    r0!(e, a, b, c, d, 6);
    r0!(d, e, a, b, c, 7);
    r0!(c, d, e, a, b, 8);
    r0!(b, c, d, e, a, 9);
    r0!(a, b, c, d, e, 10);
    r0!(e, a, b, c, d, 11);
    r0!(d, e, a, b, c, 12);
    r0!(c, d, e, a, b, 13);
    r0!(b, c, d, e, a, 14);
    r0!(a, b, c, d, e, 15);
    r1!(e, a, b, c, d, 16);
    r1!(d, e, a, b, c, 17);
    r1!(c, d, e, a, b, 18);
    r1!(b, c, d, e, a, 19);
    r2!(a, b, c, d, e, 20);
    r2!(e, a, b, c, d, 21);
    r2!(d, e, a, b, c, 22);
    r2!(c, d, e, a, b, 23);
    r2!(b, c, d, e, a, 24);
    r2!(a, b, c, d, e, 25);
    r2!(e, a, b, c, d, 26);
    r2!(d, e, a, b, c, 27);
    r2!(c, d, e, a, b, 28);
    r2!(b, c, d, e, a, 29);
    r2!(a, b, c, d, e, 30);
    r2!(e, a, b, c, d, 31);
    r2!(d, e, a, b, c, 32);
    r2!(c, d, e, a, b, 33);
    r2!(b, c, d, e, a, 34);
    r2!(a, b, c, d, e, 35);
    r2!(e, a, b, c, d, 36);
    r2!(d, e, a, b, c, 37);
    r2!(c, d, e, a, b, 38);
    r2!(b, c, d, e, a, 39);
    r3!(a, b, c, d, e, 40);
    r3!(e, a, b, c, d, 41);
    r3!(d, e, a, b, c, 42);
    r3!(c, d, e, a, b, 43);
    r3!(b, c, d, e, a, 44);
    r3!(a, b, c, d, e, 45);
    r3!(e, a, b, c, d, 46);
    r3!(d, e, a, b, c, 47);
    r3!(c, d, e, a, b, 48);
    r3!(b, c, d, e, a, 49);
    r3!(a, b, c, d, e, 50);
    r3!(e, a, b, c, d, 51);
    r3!(d, e, a, b, c, 52);
    r3!(c, d, e, a, b, 53);
    r3!(b, c, d, e, a, 54);
    r3!(a, b, c, d, e, 55);
    r3!(e, a, b, c, d, 56);
    r3!(d, e, a, b, c, 57);
    r3!(c, d, e, a, b, 58);
    r3!(b, c, d, e, a, 59);
    r4!(a, b, c, d, e, 60);
    r4!(e, a, b, c, d, 61);
    r4!(d, e, a, b, c, 62);
    r4!(c, d, e, a, b, 63);
    r4!(b, c, d, e, a, 64);
    r4!(a, b, c, d, e, 65);
    r4!(e, a, b, c, d, 66);
    r4!(d, e, a, b, c, 67);
    r4!(c, d, e, a, b, 68);
    r4!(b, c, d, e, a, 69);
    r4!(a, b, c, d, e, 70);
    r4!(e, a, b, c, d, 71);
    r4!(d, e, a, b, c, 72);
    r4!(c, d, e, a, b, 73);
    r4!(b, c, d, e, a, 74);
    r4!(a, b, c, d, e, 75);
    r4!(e, a, b, c, d, 76);
    r4!(d, e, a, b, c, 77);
    r4!(c, d, e, a, b, 78);
    r4!(b, c, d, e, a, 79);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);

    // Wipe the schedule and the working copies of the chain value.
    w.zeroize();
    a.zeroize();
    b.zeroize();
    c.zeroize();
    d.zeroize();
    e.zeroize();
  }

  /// Advance the bit counter for `len` incoming bytes.
  ///
  /// `count[0]` holds the low 32 bits of the message bit length and carries
  /// into `count[1]` on overflow. The `len >> 29` term accounts for single
  /// calls longer than 2^29 bytes, whose bit length does not fit in 32 bits.
  #[inline]
  fn advance_count(&mut self, len: usize) {
    let (low, carry) = self.count[0].overflowing_add((len as u32) << 3);
    self.count[0] = low;
    self.count[1] = self.count[1].wrapping_add(u32::from(carry)).wrapping_add((len >> 29) as u32);
  }

  /// Finalize in place: returns the digest, scrubs the block buffer and bit
  /// counter, and keeps the chaining value `h`.
  ///
  /// Keeping `h` is deliberate: derivative constructions can read it back
  /// through [`Sha1::state`] after the buffered message bytes and the length
  /// are gone. The hasher is not ready for a new message afterwards; call
  /// [`Digest::reset`] first.
  pub fn finalize_scrub(&mut self) -> [u8; 20] {
    // Capture the length before padding advances the counter.
    let mut finalcount = [0u8; 8];
    finalcount[..4].copy_from_slice(&self.count[1].to_be_bytes());
    finalcount[4..].copy_from_slice(&self.count[0].to_be_bytes());

    self.update(&[0x80]);
    while (self.count[0] & 504) != 448 {
      self.update(&[0]);
    }
    // Feeding the length always completes (and compresses) the final block.
    self.update(&finalcount);

    let mut out = [0u8; 20];
    for (i, word) in self.h.iter().copied().enumerate() {
      let offset = i * 4;
      out[offset..offset + 4].copy_from_slice(&word.to_be_bytes());
    }

    self.buffer.zeroize();
    self.count.zeroize();
    finalcount.zeroize();

    out
  }

  /// Current chaining value, `h[0..5]`.
  ///
  /// This survives [`Sha1::finalize_scrub`], which wipes the message buffer
  /// and length counter but not `h`.
  #[inline]
  #[must_use]
  pub fn state(&self) -> [u32; 5] {
    self.h
  }
}

impl Digest for Sha1 {
  const OUTPUT_SIZE: usize = 20;
  type Output = [u8; 20];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    // Offset into the partial block, derived from the bit counter.
    let j = ((self.count[0] >> 3) & 63) as usize;
    self.advance_count(data.len());

    if j + data.len() > 63 {
      let fill = BLOCK_LEN - j;
      self.buffer[j..].copy_from_slice(&data[..fill]);
      Self::compress_block(&mut self.h, &self.buffer);
      data = &data[fill..];

      let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
      for block in blocks {
        Self::compress_block(&mut self.h, block);
      }
      self.buffer[..rest.len()].copy_from_slice(rest);
    } else {
      self.buffer[j..j + data.len()].copy_from_slice(data);
    }
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.clone().finalize_scrub()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}

#[cfg(test)]
mod tests {
  use traits::Digest as _;

  use super::{BLOCK_LEN, H0, Sha1};

  extern crate alloc;

  use alloc::vec::Vec;

  fn hex20(bytes: &[u8; 20]) -> alloc::string::String {
    use alloc::string::String;
    use core::fmt::Write;
    let mut s = String::new();
    for &b in bytes {
      write!(&mut s, "{:02x}", b).unwrap();
    }
    s
  }

  #[test]
  fn known_vectors() {
    // FIPS 180-1 test vectors (short messages).
    assert_eq!(hex20(&Sha1::digest(b"")), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(hex20(&Sha1::digest(b"abc")), "a9993e364706816aba3e25717850c26c9cd0d89d");
    assert_eq!(
      hex20(&Sha1::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq")),
      "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
    );

    // 1,000,000 repetitions of 'a'.
    let mut million_a = alloc::vec![b'a'; 1_000_000];
    assert_eq!(hex20(&Sha1::digest(&million_a)), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
    million_a.clear();
  }

  #[test]
  fn streaming_matches_one_shot() {
    let data: Vec<u8> = (0u32..4096).map(|i| (i.wrapping_mul(31).wrapping_add(7)) as u8).collect();

    for &len in &[0usize, 1, 3, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 256, 1000, 4096] {
      let msg = &data[..len];
      let expected = Sha1::digest(msg);

      for &chunk in &[1usize, 7, 63, 64, 65, 256] {
        let mut hasher = Sha1::new();
        for piece in msg.chunks(chunk) {
          hasher.update(piece);
        }
        assert_eq!(hasher.finalize(), expected, "len={len} chunk={chunk}");
      }
    }
  }

  #[test]
  fn empty_update_is_a_no_op() {
    let mut hasher = Sha1::new();
    hasher.update(b"abc");
    let snapshot = (hasher.h, hasher.count, hasher.buffer);

    hasher.update(b"");
    assert_eq!(hasher.h, snapshot.0);
    assert_eq!(hasher.count, snapshot.1);
    assert_eq!(hasher.buffer, snapshot.2);
    assert_eq!(hex20(&hasher.finalize()), "a9993e364706816aba3e25717850c26c9cd0d89d");
  }

  #[test]
  fn finalize_does_not_consume() {
    let mut hasher = Sha1::new();
    hasher.update(b"hello ");
    let first = hasher.finalize();
    assert_eq!(hasher.finalize(), first);

    hasher.update(b"world");
    assert_eq!(hasher.finalize(), Sha1::digest(b"hello world"));
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut hasher = Sha1::new();
    hasher.update(b"garbage");
    hasher.reset();
    hasher.update(b"abc");
    assert_eq!(hex20(&hasher.finalize()), "a9993e364706816aba3e25717850c26c9cd0d89d");
  }

  #[test]
  fn finalize_scrub_wipes_buffer_and_counter_but_keeps_state() {
    let mut hasher = Sha1::new();
    hasher.update(b"abc");
    let digest = hasher.finalize_scrub();
    assert_eq!(hex20(&digest), "a9993e364706816aba3e25717850c26c9cd0d89d");

    assert_eq!(hasher.count, [0, 0]);
    assert_eq!(hasher.buffer, [0u8; BLOCK_LEN]);

    // The chaining value survives and matches the emitted digest words.
    let state = hasher.state();
    for (i, word) in state.iter().enumerate() {
      let mut bytes = [0u8; 4];
      bytes.copy_from_slice(&digest[i * 4..i * 4 + 4]);
      assert_eq!(*word, u32::from_be_bytes(bytes));
    }
    assert_ne!(state, H0);
  }

  #[test]
  fn bit_counter_carries_into_the_high_word() {
    // Carry out of the low word after many small updates.
    let mut hasher = Sha1::new();
    hasher.count = [u32::MAX - 7, 0];
    hasher.advance_count(1);
    assert_eq!(hasher.count, [0, 1]);

    // Single calls past 2^29 bytes land in the high word via `len >> 29`.
    let mut hasher = Sha1::new();
    hasher.advance_count(1usize << 30);
    assert_eq!(hasher.count, [0, 2]);

    let mut hasher = Sha1::new();
    hasher.advance_count((1usize << 29) + 3);
    assert_eq!(hasher.count, [24, 1]);
  }

  #[test]
  fn buffer_offset_tracks_total_length_mod_64() {
    let mut hasher = Sha1::new();
    let mut total = 0usize;
    for len in [1usize, 63, 64, 65, 7, 127] {
      hasher.update(&alloc::vec![0x5a; len]);
      total += len;
      assert_eq!((hasher.count[0] as usize >> 3) & 63, total % 64);
    }
  }

  #[test]
  fn vectored_update_matches_contiguous() {
    let expected = Sha1::digest(b"hello world");
    assert_eq!(Sha1::digest_vectored(&[b"hello ", b"world"]), expected);

    let mut hasher = Sha1::new();
    hasher.update_vectored(&[b"hello", b" ", b"world"]);
    assert_eq!(hasher.finalize(), expected);
  }

  #[test]
  fn reports_output_size() {
    assert_eq!(Sha1::OUTPUT_SIZE, 20);
  }
}

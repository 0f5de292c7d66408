//! Fuzz target for the streaming SHA-1 API.
//!
//! Tests that arbitrary sequences of update calls, with a non-consuming
//! finalize probe mid-stream, agree with the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rsha1::Sha1;
use traits::Digest as _;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
  /// Offset at which to probe a non-consuming finalize
  probe: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = Sha1::digest(data);
  let probe = if data.is_empty() { 0 } else { input.probe % data.len() };

  let mut hasher = Sha1::new();
  let mut offset = 0;
  let mut chunk_idx = 0;
  let mut probed = false;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    offset = end;
    chunk_idx += 1;

    if !probed && offset >= probe {
      assert_eq!(hasher.finalize(), Sha1::digest(&data[..offset]), "midstream finalize mismatch");
      probed = true;
    }
  }

  assert_eq!(hasher.finalize(), expected, "sha1 streaming mismatch");
});

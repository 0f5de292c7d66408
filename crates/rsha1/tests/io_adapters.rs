#![cfg(feature = "std")]

use std::io::{Read, Write};

use rsha1::{Digest as _, Sha1};

#[test]
fn reader_hashes_bytes_read() {
  let data = b"the quick brown fox jumps over the lazy dog";
  let mut reader = Sha1::reader(&data[..]);

  let mut out = Vec::new();
  reader.read_to_end(&mut out).unwrap();

  assert_eq!(out, data);
  assert_eq!(reader.digest(), Sha1::digest(data));
}

#[test]
fn reader_partial_reads_accumulate() {
  let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
  let mut reader = Sha1::reader(&data[..]);

  // An odd buffer size forces reads that straddle the 64-byte block.
  let mut buf = [0u8; 33];
  loop {
    let n = reader.read(&mut buf).unwrap();
    if n == 0 {
      break;
    }
  }

  assert_eq!(reader.digest(), Sha1::digest(&data));
}

#[test]
fn writer_hashes_bytes_written() {
  let data = b"the quick brown fox jumps over the lazy dog";
  let mut writer = Sha1::writer(Vec::new());

  writer.write_all(data).unwrap();
  let (inner, digest) = writer.into_parts();

  assert_eq!(inner, data);
  assert_eq!(digest, Sha1::digest(data));
}

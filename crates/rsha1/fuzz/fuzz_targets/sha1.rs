#![no_main]

use libfuzzer_sys::fuzz_target;
use rsha1::Sha1;
use traits::Digest as _;

fuzz_target!(|data: &[u8]| {
  let ours = Sha1::digest(data);

  use sha1::Digest as _;
  let ref_out = sha1::Sha1::digest(data);
  let mut expected = [0u8; 20];
  expected.copy_from_slice(&ref_out);

  assert_eq!(ours, expected);
});

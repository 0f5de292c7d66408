//! I/O adapters for hashing data as it moves.
//!
//! This module re-exports [`DigestReader`] and [`DigestWriter`], which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations to compute a
//! digest transparently during I/O.
//!
//! # Performance
//!
//! - All methods are `#[inline]`
//! - Vectored I/O feeds the hasher through `update_vectored`
//! - Only bytes actually transferred are hashed (short reads/writes are fine)
//!
//! # Example
//!
//! ```rust,ignore
//! use rsha1::{Digest as _, Sha1};
//! use std::fs::File;
//! use std::io::Read;
//!
//! let file = File::open("data.bin")?;
//! let mut reader = Sha1::reader(file);
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! println!("SHA-1: {:?}", reader.digest());
//! ```

pub use traits::io::{DigestReader, DigestWriter};

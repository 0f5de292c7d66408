//! SHA-1 for `rsha1`: a small, dependency-light, `no_std`-first implementation.
//!
//! This crate provides the [`Sha1`] hasher behind the [`Digest`] trait from
//! [`traits`], plus a one-shot [`Sha1::digest`] convenience with a short-input
//! fast path.
//!
//! # Security
//!
//! SHA-1 is cryptographically broken: practical collision attacks have been
//! public since 2017. Do not use it for signatures, certificates, or anything
//! that needs collision resistance. It remains in wide use for content
//! addressing, legacy protocol compatibility, and integrity checks against
//! accidental corruption, which is what this crate is for.
//!
//! Internal state scrubbing (the compression schedule, working variables, and
//! on [`Sha1::finalize_scrub`] the buffered message and length counter) goes
//! through [`zeroize`], so the wipes survive optimization. This is best
//! effort: register spills and caller-held copies are outside the crate's
//! control.
//!
//! # Quick start
//!
//! ```
//! use rsha1::{Digest as _, Sha1};
//!
//! // One-shot.
//! let digest = Sha1::digest(b"abc");
//! assert_eq!(digest.len(), 20);
//!
//! // Streaming.
//! let mut hasher = Sha1::new();
//! hasher.update(b"ab");
//! hasher.update(b"c");
//! assert_eq!(hasher.finalize(), digest);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables the [`std::io`] adapters re-exported from
//!   [`traits`]. Disable for `no_std` targets; the hasher itself is pure
//!   `core`.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod io;
mod sha1;
mod util;

pub use sha1::Sha1;
pub use traits::Digest;

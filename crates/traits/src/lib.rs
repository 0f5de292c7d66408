//! Core hashing traits for rsha1.
//!
//! This crate provides the foundational trait that the rsha1 digest
//! implementation conforms to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Cryptographic hash functions | SHA-1 |
//!
//! # I/O Adapters
//!
//! With the `std` feature (default), [`io`] provides [`DigestReader`](io::DigestReader)
//! and [`DigestWriter`](io::DigestWriter), which hash bytes transparently as they
//! pass through `std::io::Read`/`std::io::Write`.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;

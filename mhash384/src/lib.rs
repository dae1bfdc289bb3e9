//! MHash-384 — a simple, portable, streaming 384-bit message digest.
//!
//! The hash engine ingests an arbitrary-length byte sequence incrementally
//! and produces a deterministic 48-byte [`Digest`](prelude::Digest); inputs
//! never need to be held in memory as a whole. The transform is driven by a
//! set of published constant tables which this crate carries as native
//! `const` data, bit-identical to the reference distribution.
//!
//! ```
//! use mhash384::prelude::*;
//!
//! let digest = MHash384::hash("abc");
//! assert_eq!(
//!     "9171D83EE7DEDE36CAF27C2644897F3114A0F67B6E9193AA1AB23462EA815EDE\
//!      A535002671E086493B41A528A26FD8B3",
//!     digest.to_string(),
//! );
//! ```
//!
//! MHash-384 is not a cryptographically vetted primitive; treat it as a
//! fast, stable checksum with strong avalanche behavior, not as a
//! replacement for a vetted cryptographic hash.

#![deny(clippy::shadow_unrelated)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod error;
pub mod hasher;
pub mod prelude;
pub mod self_test;

//! The MHash-384 hash engine.
//!
//! This module contains the streaming implementation of the MHash-384
//! message digest: bytes are pushed into an [`MHash384`] instance as they
//! arrive, and the 48-byte [`Digest`] is derived once the input ends. Every
//! processed byte drives one table-selected round of the state transform;
//! finalization runs 48 further rounds and extracts one digest byte after
//! each of them.
//!
//! ```
//! use mhash384::prelude::*;
//!
//! let mut hasher = MHash384::new();
//! hasher.update("The quick brown fox ")?;
//! hasher.update("jumps over the lazy dog")?;
//! let digest = hasher.digest()?;
//! assert_eq!(
//!     "79F76CA53D529162E632152EDE82A403F8F996DEAA009CC512250BAFF910AC24\
//!      DF1381F7EF1F43DAC26F63EE0CFF3CDF",
//!     digest.to_string(),
//! );
//! # Ok::<(), mhash384::error::HashingError>(())
//! ```

use std::io;
use std::io::Write;

use arbitrary::Arbitrary;
use get_size2::GetSize;
use serde::Deserialize;
use serde::Serialize;

use crate::error::HashingError;

pub mod digest;
pub mod tables;

pub use digest::Digest;

/// The number of 64-bit words in the hash state.
pub const STATE_SIZE: usize = 6;

pub const VERSION_MAJOR: u16 = 2;
pub const VERSION_MINOR: u16 = 0;
pub const VERSION_PATCH: u16 = 0;

/// The multiplier of the mixing function. Identical to the constant of the
/// well-known “128 to 64 bit” multiply-shift hash.
const MIX_MULTIPLIER: u64 = 0x9ddf_ea08_eb38_2d69;

/// Combine two 64-bit words into one. Every bit of the result depends
/// nonlinearly on every bit of both inputs; all arithmetic wraps.
#[inline(always)]
const fn mix_words(u: u64, mut v: u64) -> u64 {
    v = (v ^ u).wrapping_mul(MIX_MULTIPLIER);
    v ^= v >> 47;
    v = (v ^ u).wrapping_mul(MIX_MULTIPLIER);
    v ^= v >> 47;
    v.wrapping_mul(MIX_MULTIPLIER)
}

/// Streaming MHash-384 hasher.
///
/// Each instance owns its state exclusively; hashing two inputs
/// concurrently just means constructing two instances. After [`digest`]
/// has been taken, the instance refuses further input until [`reset`]
/// returns it to the pristine state.
///
/// [`digest`]: Self::digest
/// [`reset`]: Self::reset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, GetSize, Arbitrary)]
pub struct MHash384 {
    state: [u64; STATE_SIZE],
    round: u8,
    finished: bool,
}

impl MHash384 {
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: tables::INITIAL_STATE,
            round: 0,
            finished: false,
        }
    }

    /// The version of the MHash-384 algorithm implemented by this crate, as
    /// `(major, minor, patch)`.
    pub const fn version() -> (u16, u16, u16) {
        (VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH)
    }

    /// Return the instance to the same state as a fresh [`MHash384::new`],
    /// allowing it to be reused for a new input.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Feed bytes into the hash computation, in order.
    ///
    /// Equivalent to calling [`update_byte`](Self::update_byte) once per
    /// byte. Accepts anything byte-like; strings are hashed as their UTF-8
    /// bytes.
    ///
    /// # Errors
    ///
    /// [`HashingError::AlreadyFinished`] if [`digest`](Self::digest) has
    /// been taken and the instance was not [`reset`](Self::reset).
    pub fn update(&mut self, data: impl AsRef<[u8]>) -> Result<(), HashingError> {
        self.ensure_unfinished()?;
        self.absorb(data.as_ref());
        Ok(())
    }

    /// Feed a single byte into the hash computation.
    ///
    /// # Errors
    ///
    /// [`HashingError::AlreadyFinished`] if [`digest`](Self::digest) has
    /// been taken and the instance was not [`reset`](Self::reset).
    pub fn update_byte(&mut self, value: u8) -> Result<(), HashingError> {
        self.ensure_unfinished()?;
        self.iterate(value as usize);
        Ok(())
    }

    /// Feed `len` bytes of `data`, starting at `offset`, into the hash
    /// computation.
    ///
    /// # Errors
    ///
    /// [`HashingError::RangeOutOfBounds`] if `offset + len` exceeds the
    /// buffer, in which case no byte is processed, or
    /// [`HashingError::AlreadyFinished`] on a finished instance.
    pub fn update_range(
        &mut self,
        data: &[u8],
        offset: usize,
        len: usize,
    ) -> Result<(), HashingError> {
        self.ensure_unfinished()?;
        let in_bounds = offset.checked_add(len).is_some_and(|end| end <= data.len());
        if !in_bounds {
            return Err(HashingError::RangeOutOfBounds {
                offset,
                len,
                data_len: data.len(),
            });
        }
        self.absorb(&data[offset..offset + len]);
        Ok(())
    }

    /// Finalize the computation and produce the digest.
    ///
    /// Afterwards the instance accepts no further input until
    /// [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// [`HashingError::AlreadyFinished`] if the digest has already been
    /// taken.
    pub fn digest(&mut self) -> Result<Digest, HashingError> {
        self.ensure_unfinished()?;
        Ok(self.finalize())
    }

    /// Hash a byte sequence in one shot.
    ///
    /// Shorthand for feeding `data` into a fresh instance and taking its
    /// digest, which is why no failure mode exists.
    ///
    /// ```
    /// # use mhash384::prelude::*;
    /// let digest = MHash384::hash("abc");
    /// ```
    pub fn hash(data: impl AsRef<[u8]>) -> Digest {
        let mut hasher = Self::new();
        hasher.absorb(data.as_ref());
        hasher.finalize()
    }

    fn ensure_unfinished(&self) -> Result<(), HashingError> {
        if self.finished {
            return Err(HashingError::AlreadyFinished);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn absorb(&mut self, data: &[u8]) {
        for &byte in data {
            self.iterate(byte as usize);
        }
    }

    pub(crate) fn finalize(&mut self) -> Digest {
        let mut digest = [0; Digest::BYTES];
        let mut row = tables::FINALIZATION_ROW;
        for (position, out) in digest.iter_mut().enumerate() {
            self.iterate(row);
            let index = usize::from(tables::OUTPUT_INDICES[position]);
            *out = (self.state[index / 8] >> ((index % 8) * 8)) as u8;
            // Rounds after the first re-select their table row through the
            // byte just extracted.
            row = usize::from(*out);
        }
        self.finished = true;
        Digest::new(digest)
    }

    /// One application of the state transform, using the given row of the
    /// XOR and ADD tables and the current round's MIX permutation.
    #[inline(always)]
    fn iterate(&mut self, row: usize) {
        let xor = &tables::XOR_CONSTANTS[row];
        let mix = &tables::MIX_PERMUTATIONS[usize::from(self.round)];
        let add = &tables::ADD_CONSTANTS[row];

        // All six outputs must be derived from the same snapshot of the
        // state: a MIX entry may point at any word, including one that an
        // in-place loop would already have overwritten.
        let mut next = [0; STATE_SIZE];
        for i in 0..STATE_SIZE {
            let u = self.state[i].wrapping_add(add[i]);
            let v = self.state[usize::from(mix[i])];
            next[i] = mix_words(u, v) ^ xor[i];
        }
        self.state = next;
        self.round = self.round.wrapping_add(1);
    }
}

impl Default for MHash384 {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming adapter: anything that can write to an [`io::Write`] can hash
/// through an `MHash384`, e.g. via [`io::copy`].
impl Write for MHash384 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use proptest_arbitrary_interop::arb;
    use test_strategy::proptest;

    use super::*;

    fn hash_repeated(input: &str, repetitions: u32) -> Digest {
        let mut hasher = MHash384::new();
        for _ in 0..repetitions {
            hasher.update(input).unwrap();
        }
        hasher.digest().unwrap()
    }

    #[test]
    fn empty_input_snapshot() {
        assert_eq!(
            "4C4B82D07B368E1C22D0DE3759C32D44DA71BE6283E8550A2468DC1FEC38919F\
             7EDB6C1BA08378EC583AE612AB0E02BA",
            MHash384::hash("").to_string(),
        );
    }

    #[test]
    fn abc_snapshot() {
        assert_eq!(
            "9171D83EE7DEDE36CAF27C2644897F3114A0F67B6E9193AA1AB23462EA815EDE\
             A535002671E086493B41A528A26FD8B3",
            MHash384::hash("abc").to_string(),
        );
    }

    #[test]
    fn million_a_snapshot() {
        assert_eq!(
            "56228E9432471B09A7F696D0DEFA15E664D3E7ACD27E2D39F864C05006F1F770\
             12F4F4CCE7450C52B6C1CFAB84FAEC63",
            hash_repeated("aaaaaaaaaa", 100_000).to_string(),
        );
    }

    #[test]
    fn version_is_two_zero_zero() {
        assert_eq!((2, 0, 0), MHash384::version());
    }

    #[test]
    fn default_is_a_fresh_instance() {
        assert_eq!(MHash384::new(), MHash384::default());
    }

    #[proptest]
    fn hashing_is_deterministic(#[strategy(vec(any::<u8>(), 0..512))] input: Vec<u8>) {
        prop_assert_eq!(MHash384::hash(&input), MHash384::hash(&input));
    }

    #[proptest]
    fn byte_wise_update_matches_one_shot(#[strategy(vec(any::<u8>(), 0..512))] input: Vec<u8>) {
        let mut hasher = MHash384::new();
        for &byte in &input {
            hasher.update_byte(byte).unwrap();
        }
        prop_assert_eq!(MHash384::hash(&input), hasher.digest().unwrap());
    }

    #[proptest]
    fn split_update_matches_one_shot(
        #[strategy(vec(any::<u8>(), 0..512))] input: Vec<u8>,
        #[strategy(0_usize..=#input.len())] split_point: usize,
    ) {
        let mut hasher = MHash384::new();
        hasher.update(&input[..split_point]).unwrap();
        hasher.update(&input[split_point..]).unwrap();
        prop_assert_eq!(MHash384::hash(&input), hasher.digest().unwrap());
    }

    #[proptest]
    fn update_range_matches_sub_slice_update(
        #[strategy(vec(any::<u8>(), 1..512))] input: Vec<u8>,
        #[strategy(0_usize..#input.len())] offset: usize,
        #[strategy(0_usize..=#input.len() - #offset)] len: usize,
    ) {
        let mut hasher = MHash384::new();
        hasher.update_range(&input, offset, len).unwrap();
        prop_assert_eq!(
            MHash384::hash(&input[offset..offset + len]),
            hasher.digest().unwrap()
        );
    }

    #[test]
    fn out_of_bounds_range_is_rejected_without_processing() {
        let data = [0_u8; 16];
        let mut hasher = MHash384::new();
        let err = hasher.update_range(&data, 10, 7).unwrap_err();
        assert_eq!(
            HashingError::RangeOutOfBounds {
                offset: 10,
                len: 7,
                data_len: 16,
            },
            err
        );

        // the failed call must not have advanced the state
        assert_eq!(MHash384::new(), hasher);
    }

    #[test]
    fn overflowing_range_is_rejected() {
        let data = [0_u8; 16];
        let mut hasher = MHash384::new();
        let err = hasher.update_range(&data, usize::MAX, 2).unwrap_err();
        assert!(matches!(err, HashingError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn input_order_matters() {
        assert_ne!(MHash384::hash("ab"), MHash384::hash("ba"));
        assert_ne!(MHash384::hash("abc0"), MHash384::hash("cba0"));
    }

    #[test]
    fn finished_instance_rejects_update_and_digest() {
        let mut hasher = MHash384::new();
        hasher.update("abc").unwrap();
        hasher.digest().unwrap();

        assert_eq!(HashingError::AlreadyFinished, hasher.update("x").unwrap_err());
        assert_eq!(
            HashingError::AlreadyFinished,
            hasher.update_byte(0).unwrap_err()
        );
        assert_eq!(HashingError::AlreadyFinished, hasher.digest().unwrap_err());
    }

    #[proptest]
    fn reset_reproduces_the_digest(#[strategy(vec(any::<u8>(), 0..512))] input: Vec<u8>) {
        let mut hasher = MHash384::new();
        hasher.update(&input).unwrap();
        let first = hasher.digest().unwrap();

        hasher.reset();
        hasher.update(&input).unwrap();
        prop_assert_eq!(first, hasher.digest().unwrap());
    }

    #[proptest]
    fn writer_adapter_matches_direct_update(#[strategy(vec(any::<u8>(), 0..512))] input: Vec<u8>) {
        let mut hasher = MHash384::new();
        let mut reader = &input[..];
        std::io::copy(&mut reader, &mut hasher).unwrap();
        prop_assert_eq!(MHash384::hash(&input), hasher.digest().unwrap());
    }

    #[test]
    fn writer_adapter_surfaces_the_finished_error() {
        let mut hasher = MHash384::new();
        hasher.digest().unwrap();
        let err = hasher.write(b"abc").unwrap_err();
        assert_eq!(std::io::ErrorKind::Other, err.kind());
    }

    #[proptest]
    fn serialized_hasher_resumes_mid_stream(
        #[strategy(vec(any::<u8>(), 0..512))] input: Vec<u8>,
        #[strategy(0_usize..=#input.len())] split_point: usize,
    ) {
        let mut hasher = MHash384::new();
        hasher.update(&input[..split_point]).unwrap();

        let frozen = bincode::serialize(&hasher).unwrap();
        let mut thawed: MHash384 = bincode::deserialize(&frozen).unwrap();

        thawed.update(&input[split_point..]).unwrap();
        prop_assert_eq!(MHash384::hash(&input), thawed.digest().unwrap());
    }

    #[proptest]
    fn digest_guard_holds_for_arbitrary_instances(#[strategy(arb())] mut hasher: MHash384) {
        let was_finished = hasher.finished;
        match hasher.digest() {
            Ok(_) => prop_assert!(!was_finished),
            Err(err) => {
                prop_assert!(was_finished);
                prop_assert_eq!(HashingError::AlreadyFinished, err);
            }
        }
    }

    #[test]
    fn mixing_function_diffuses_single_bit_flips() {
        // Not a statistical avalanche test, just a guard against the mixing
        // function degenerating into something that ignores one operand.
        for bit in 0..64 {
            assert_ne!(mix_words(0, 0), mix_words(1 << bit, 0));
            assert_ne!(mix_words(0, 0), mix_words(0, 1 << bit));
        }
    }
}

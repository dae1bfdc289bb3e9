use core::fmt;
use std::str::FromStr;

use arbitrary::Arbitrary;
use get_size2::GetSize;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_big_array::BigArray;

use crate::error::TryFromDigestError;
use crate::error::TryFromHexDigestError;

/// The result of hashing a byte sequence, for example using
/// [`MHash384`](super::MHash384). Sometimes called a “hash”.
// note: Serialize and Deserialize have custom implementations below
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, GetSize, Arbitrary)]
pub struct Digest(pub [u8; Digest::BYTES]);

impl Digest {
    /// The number of bytes in a digest.
    pub const BYTES: usize = 48;

    /// The number of bits in a digest.
    pub const BITS: usize = 8 * Self::BYTES;

    /// The all-zero digest.
    pub(crate) const ALL_ZERO: Self = Self([0; Self::BYTES]);

    pub const fn new(digest: [u8; Self::BYTES]) -> Self {
        Self(digest)
    }

    pub const fn values(self) -> [u8; Self::BYTES] {
        self.0
    }
}

impl Default for Digest {
    fn default() -> Self {
        Self::ALL_ZERO
    }
}

/// Formats the digest the way the reference tooling prints it: uppercase
/// hex, no separators.
impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl Distribution<Digest> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Digest {
        Digest::new(rng.random())
    }
}

impl FromStr for Digest {
    type Err = TryFromHexDigestError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(string)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; Digest::BYTES]> for Digest {
    fn from(bytes: [u8; Self::BYTES]) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for [u8; Digest::BYTES] {
    fn from(Digest(innards): Digest) -> Self {
        innards
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Self {
        digest.0.to_vec()
    }
}

impl TryFrom<&[u8]> for Digest {
    type Error = TryFromDigestError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let array = <[u8; Self::BYTES]>::try_from(slice)
            .map_err(|_e| TryFromDigestError::InvalidLength(slice.len()))?;
        Ok(Self::new(array))
    }
}

impl TryFrom<Vec<u8>> for Digest {
    type Error = TryFromDigestError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Digest::try_from(&value as &[u8])
    }
}

impl Digest {
    /// Encode digest as hex.
    ///
    /// Since `Digest` also implements [`LowerHex`][lo] and [`UpperHex`][up], it is
    /// possible to `{:x}`-format directly, _e.g._, `print!("{digest:x}")`.
    ///
    /// [lo]: fmt::LowerHex
    /// [up]: fmt::UpperHex
    pub fn to_hex(self) -> String {
        format!("{self:x}")
    }

    /// Decode hex string to [`Digest`]. Accepts both upper- and lowercase
    /// digits. Must not include leading “0x”.
    pub fn try_from_hex(data: impl AsRef<[u8]>) -> Result<Self, TryFromHexDigestError> {
        let slice = hex::decode(data)?;
        Ok(Self::try_from(&slice as &[u8])?)
    }
}

// we implement Serialize so that we can serialize as hex for human readable
// formats like JSON but use default serializer for other formats likes bincode
impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            self.to_hex().serialize(serializer)
        } else {
            BigArray::serialize(&self.0, serializer)
        }
    }
}

// we impl Deserialize so that we can deserialize as hex for human readable
// formats like JSON but use default deserializer for other formats like bincode
impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let hex_string = String::deserialize(deserializer)?;
            Self::try_from_hex(hex_string).map_err(serde::de::Error::custom)
        } else {
            let bytes = <[u8; Self::BYTES] as BigArray<'de, u8>>::deserialize(deserializer)?;
            Ok(Self::new(bytes))
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    #[test]
    fn digest_is_all_zero_by_default() {
        assert_eq!(Digest::ALL_ZERO, Digest::default());
    }

    #[proptest]
    fn bytes_in_match_bytes_out(bytes: [u8; Digest::BYTES]) {
        let digest = Digest::new(bytes);
        let bytes_again: [u8; Digest::BYTES] = digest.into();
        prop_assert_eq!(bytes, bytes_again);
    }

    #[proptest]
    fn try_from_slice_of_wrong_length_errors(#[strategy(0_usize..128)] len: usize) {
        prop_assume!(len != Digest::BYTES);
        let slice = vec![0_u8; len];
        let err = Digest::try_from(&slice as &[u8]).unwrap_err();
        prop_assert_eq!(TryFromDigestError::InvalidLength(len), err);
    }

    mod hex_test {
        use super::*;

        pub(super) fn hex_examples() -> Vec<(Digest, &'static str)> {
            let mut ascending = [0_u8; Digest::BYTES];
            for (i, byte) in ascending.iter_mut().enumerate() {
                *byte = i as u8;
            }

            vec![
                (
                    Digest::default(),
                    concat!(
                        "00000000000000000000000000000000",
                        "00000000000000000000000000000000",
                        "00000000000000000000000000000000",
                    ),
                ),
                (
                    Digest::new(ascending),
                    concat!(
                        "000102030405060708090a0b0c0d0e0f",
                        "101112131415161718191a1b1c1d1e1f",
                        "202122232425262728292a2b2c2d2e2f",
                    ),
                ),
            ]
        }

        #[test]
        fn digest_to_hex() {
            for (digest, hex) in hex_examples() {
                assert_eq!(&digest.to_hex(), hex);
            }
        }

        #[test]
        fn digest_from_hex() -> Result<(), TryFromHexDigestError> {
            for (digest, hex) in hex_examples() {
                assert_eq!(digest, Digest::try_from_hex(hex)?);
                assert_eq!(digest, Digest::try_from_hex(hex.to_uppercase())?);
                assert_eq!(digest, hex.parse::<Digest>()?);
            }

            Ok(())
        }

        #[test]
        fn display_is_uppercase_hex() {
            for (digest, hex) in hex_examples() {
                assert_eq!(hex.to_uppercase(), digest.to_string());
                assert_eq!(hex.to_uppercase(), format!("{digest:X}"));
            }
        }

        #[proptest]
        fn to_hex_and_from_hex_are_reciprocal(bytes: [u8; Digest::BYTES]) {
            let digest = Digest::new(bytes);
            let hex = digest.to_hex();
            let digest_again = Digest::try_from_hex(&hex).unwrap();
            prop_assert_eq!(digest, digest_again);

            let upper_hex = format!("{digest:X}");
            let digest_from_upper_hex = Digest::try_from_hex(upper_hex).unwrap();
            prop_assert_eq!(digest, digest_from_upper_hex);
        }

        #[test]
        fn digest_from_invalid_hex_errors() {
            use hex::FromHexError;

            assert!(Digest::try_from_hex("taco").is_err_and(|e| matches!(
                e,
                TryFromHexDigestError::HexDecode(FromHexError::InvalidHexCharacter { .. })
            )));

            assert!(Digest::try_from_hex("0").is_err_and(|e| matches!(
                e,
                TryFromHexDigestError::HexDecode(FromHexError::OddLength)
            )));

            assert!(Digest::try_from_hex("00").is_err_and(|e| matches!(
                e,
                TryFromHexDigestError::Digest(TryFromDigestError::InvalidLength(_))
            )));
        }
    }

    mod serde_test {
        use super::hex_test::hex_examples;
        use super::*;

        mod json_test {
            use super::*;

            #[test]
            fn serialize() -> Result<(), serde_json::Error> {
                for (digest, hex) in hex_examples() {
                    assert_eq!(serde_json::to_string(&digest)?, format!("\"{hex}\""));
                }
                Ok(())
            }

            #[test]
            fn deserialize() -> Result<(), serde_json::Error> {
                for (digest, hex) in hex_examples() {
                    let json_hex = format!("\"{hex}\"");
                    let digest_deserialized = serde_json::from_str::<Digest>(&json_hex)?;
                    assert_eq!(digest_deserialized, digest);
                }
                Ok(())
            }
        }

        mod bincode_test {
            use super::*;

            #[test]
            fn serialized_form_is_the_raw_bytes() {
                for (digest, _) in hex_examples() {
                    let serialized = bincode::serialize(&digest).unwrap();
                    assert_eq!(digest.values().to_vec(), serialized);
                }
            }

            #[test]
            fn deserialize_undoes_serialize() {
                for (digest, _) in hex_examples() {
                    let serialized = bincode::serialize(&digest).unwrap();
                    let deserialized = bincode::deserialize::<Digest>(&serialized).unwrap();
                    assert_eq!(digest, deserialized);
                }
            }
        }
    }
}

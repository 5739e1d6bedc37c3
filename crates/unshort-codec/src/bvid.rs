use crate::alphabet::{AlphabetTable, BILIBILI};
use crate::error::{CodecError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// Length of an encoded token, including the fixed prefix.
pub const TOKEN_LEN: usize = 12;
/// Number of leading characters that never carry digits.
const PREFIX_LEN: usize = 3;
const TEMPLATE: [u8; TOKEN_LEN] = *b"BV1000000000";
/// Template index of each digit; read from the back while encoding and from
/// `PREFIX_LEN` forward while decoding.
const POSITIONS: [usize; TOKEN_LEN] = [0, 1, 2, 9, 7, 5, 6, 4, 8, 3, 10, 11];

const MAX_AID: i64 = 1 << 51;
const MASK: i64 = MAX_AID - 1;
const XOR: i64 = 23_442_827_791_579;

/// Converts numeric video ids (`av` numbers) to and from their `BV` tokens.
///
/// The codec holds nothing but a reference to its alphabet table, so it is
/// `Copy` and can be handed to as many tasks as needed.
#[derive(Debug, Clone, Copy)]
pub struct BvidCodec {
    table: &'static AlphabetTable,
}

impl Default for BvidCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl BvidCodec {
    pub fn new() -> Self {
        Self { table: &BILIBILI }
    }

    /// Encodes `aid` into its 12 character token.
    ///
    /// Only ids in `0..2^51` survive a round trip, anything else is rejected
    /// with [`CodecError::OutOfRange`].
    pub fn encode(&self, aid: i64) -> Result<Bvid> {
        if !(0..MAX_AID).contains(&aid) {
            return Err(CodecError::OutOfRange(aid));
        }

        let base = self.table.base();
        let mut token = TEMPLATE;
        // (aid | 2^51) ^ XOR stays below 2^52 < 58^9, so it never needs more than 9 digits.
        let mut value = ((aid | MAX_AID) ^ XOR) as u64;
        let mut slot = TOKEN_LEN;
        while value != 0 && slot > PREFIX_LEN {
            slot -= 1;
            token[POSITIONS[slot]] = self.table.symbol(value % base);
            value /= base;
        }

        Ok(Bvid(token.iter().map(|&b| b as char).collect()))
    }

    /// Decodes a token back into its numeric id.
    ///
    /// The prefix is not inspected; every digit position must hold a symbol
    /// of the alphabet.
    pub fn decode(&self, token: &str) -> Result<i64> {
        let bytes = token.as_bytes();
        if bytes.len() != TOKEN_LEN {
            return Err(CodecError::InvalidLength {
                expected: TOKEN_LEN,
                len: bytes.len(),
            });
        }

        let base = self.table.base() as i64;
        let mut total: i64 = 0;
        for &position in &POSITIONS[PREFIX_LEN..] {
            let digit = self.table.digit(bytes[position]).ok_or_else(|| {
                CodecError::UnknownSymbol {
                    symbol: symbol_at(token, position),
                    position,
                }
            })?;
            total = total * base + digit as i64;
        }

        Ok((total & MASK) ^ XOR)
    }

    /// Decodes `token` and pairs it with its numeric id.
    pub fn identify(&self, token: &str) -> Result<IdentifierPair> {
        let aid = self.decode(token)?;
        Ok(IdentifierPair {
            bvid: Bvid(SmolStr::new(token)),
            aid,
        })
    }
}

fn symbol_at(token: &str, position: usize) -> char {
    token
        .get(position..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// A `BV` token that is known to decode.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Bvid(SmolStr);

impl Bvid {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the numeric id this token stands for.
    pub fn aid(&self) -> Result<i64> {
        BvidCodec::new().decode(&self.0)
    }
}

impl FromStr for Bvid {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        BvidCodec::new().decode(s)?;
        Ok(Self(SmolStr::new(s)))
    }
}

impl std::fmt::Debug for Bvid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Bvid").field(&self.0).finish()
    }
}

impl Display for Bvid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Bvid {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A token together with the numeric id it decodes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierPair {
    pub bvid: Bvid,
    pub aid: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> BvidCodec {
        BvidCodec::new()
    }

    #[test]
    fn encodes_published_pairs() {
        assert_eq!(codec().encode(170001).unwrap().as_str(), "BV17x411w7KC");
        assert_eq!(codec().encode(2).unwrap().as_str(), "BV1xx411c7mD");
        assert_eq!(codec().encode(1).unwrap().as_str(), "BV1xx411c7mQ");
    }

    #[test]
    fn decodes_published_pairs() {
        assert_eq!(codec().decode("BV17x411w7KC").unwrap(), 170001);
        assert_eq!(codec().decode("BV1xx411c7mD").unwrap(), 2);
        assert_eq!(codec().decode("BV1xx411c7mQ").unwrap(), 1);
    }

    #[test]
    fn round_trips_across_the_encodable_range() {
        let step = MAX_AID / 9973;
        let samples = (0..MAX_AID)
            .step_by(step as usize)
            .chain([0, 1, 58, 170001, MAX_AID - 1]);
        for aid in samples {
            let token = codec().encode(aid).unwrap();
            assert_eq!(token.as_str().len(), TOKEN_LEN);
            assert!(token.as_str().starts_with("BV1"));
            assert_eq!(codec().decode(token.as_str()).unwrap(), aid, "token {token}");
        }
    }

    #[test]
    fn rejects_ids_outside_the_encodable_range() {
        assert_eq!(codec().encode(-1), Err(CodecError::OutOfRange(-1)));
        assert_eq!(codec().encode(MAX_AID), Err(CodecError::OutOfRange(MAX_AID)));
    }

    #[test]
    fn unknown_symbol_is_an_error() {
        assert_eq!(
            codec().decode("BV1xx411c7m0"),
            Err(CodecError::UnknownSymbol {
                symbol: '0',
                position: 11
            })
        );
    }

    #[test]
    fn wrong_length_is_an_error() {
        assert_eq!(
            codec().decode("BV1xx411c7m"),
            Err(CodecError::InvalidLength {
                expected: TOKEN_LEN,
                len: 11
            })
        );
        assert!(codec().decode("").is_err());
    }

    #[test]
    fn decoded_values_stay_below_the_mask() {
        // every digit at its maximum
        let aid = codec().decode("BV1fffffffff").unwrap();
        assert!((0..MAX_AID).contains(&aid));
    }

    #[test]
    fn identify_pairs_token_with_id() {
        let pair = codec().identify("BV17x411w7KC").unwrap();
        assert_eq!(pair.bvid.as_str(), "BV17x411w7KC");
        assert_eq!(pair.aid, 170001);
    }

    #[test]
    fn bvid_parses_only_valid_tokens() {
        let bvid: Bvid = "BV1xx411c7mD".parse().unwrap();
        assert_eq!(bvid.aid().unwrap(), 2);
        assert!("BV1xx411c7m0".parse::<Bvid>().is_err());
    }
}

//! Codec for the video-site identifier tokens (`BV…`) and their numeric ids.
//!
//! Tokens are 12 characters long: a fixed `BV1` type marker followed by nine
//! base-58 digits stored in a fixed, permuted order. The numeric id is masked
//! to 51 bits and XOR-obfuscated before encoding.
//!
//! ```
//! use unshort_codec::{decode, encode};
//!
//! assert_eq!(encode(170001).unwrap().as_str(), "BV17x411w7KC");
//! assert_eq!(decode("BV17x411w7KC").unwrap(), 170001);
//! ```

pub mod alphabet;
pub mod bvid;
pub mod error;

pub use alphabet::AlphabetTable;
pub use bvid::{Bvid, BvidCodec, IdentifierPair, TOKEN_LEN};
pub use error::{CodecError, Result};

/// Encodes `aid` with the default codec.
pub fn encode(aid: i64) -> Result<Bvid> {
    BvidCodec::new().encode(aid)
}

/// Decodes `token` with the default codec.
pub fn decode(token: &str) -> Result<i64> {
    BvidCodec::new().decode(token)
}

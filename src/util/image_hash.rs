//! Efficient parsing and storage of Discord image hashes.
//!
//! Icons, avatars, banners and covers are addressed on the CDN by a 128-bit
//! hash sent as 32 lowercase hex characters, prefixed with `a_` when the
//! image is animated. Storing the bytes keeps entities small and hashable.
//!
//! Parsing accepts either hex case, but a hash is always written back in
//! lowercase, the form the CDN serves. Two hashes differing only in case
//! are equal.

use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    error::Error,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Prefix of an animated hash.
const ANIMATED_PREFIX: &str = "a_";

/// Length of the hex part of a hash.
const HASH_LENGTH: usize = 32;

/// Parsed image hash.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct ImageHash {
    animated: bool,
    bytes: [u8; 16],
}

impl ImageHash {
    /// Create an image hash from raw bytes.
    pub const fn new(bytes: [u8; 16], animated: bool) -> Self {
        Self { animated, bytes }
    }

    /// Parse an image hash from its wire string.
    ///
    /// Uppercase hex digits are accepted and normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ImageHashParseErrorType::Format`] if the hash isn't 32 hex
    /// characters after the optional `a_` prefix, or
    /// [`ImageHashParseErrorType::Range`] if a character isn't a hex digit.
    pub fn parse(value: &str) -> Result<Self, ImageHashParseError> {
        let (animated, hex) = match value.strip_prefix(ANIMATED_PREFIX) {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        if hex.len() != HASH_LENGTH {
            return Err(ImageHashParseError {
                kind: ImageHashParseErrorType::Format,
            });
        }

        let mut bytes = [0; 16];

        for (index, pair) in hex.as_bytes().chunks_exact(2).enumerate() {
            let high = nibble(pair[0])?;
            let low = nibble(pair[1])?;
            bytes[index] = (high << 4) | low;
        }

        Ok(Self { animated, bytes })
    }

    /// Whether the image is animated.
    pub const fn is_animated(self) -> bool {
        self.animated
    }

    /// Raw bytes of the hash.
    pub const fn bytes(self) -> [u8; 16] {
        self.bytes
    }
}

fn nibble(byte: u8) -> Result<u8, ImageHashParseError> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(ImageHashParseError {
            kind: ImageHashParseErrorType::Range,
        }),
    }
}

impl Debug for ImageHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("ImageHash(")?;
        Display::fmt(self, f)?;
        f.write_str(")")
    }
}

impl Display for ImageHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.animated {
            f.write_str(ANIMATED_PREFIX)?;
        }

        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for ImageHash {
    type Err = ImageHashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ImageHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ImageHashVisitor;

        impl Visitor<'_> for ImageHashVisitor {
            type Value = ImageHash;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("a 32 character hex image hash")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                ImageHash::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_str(ImageHashVisitor)
    }
}

impl Serialize for ImageHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Reason that an image hash couldn't be parsed.
#[derive(Debug)]
pub struct ImageHashParseError {
    kind: ImageHashParseErrorType,
}

impl ImageHashParseError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ImageHashParseErrorType {
        &self.kind
    }
}

impl Display for ImageHashParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            ImageHashParseErrorType::Format => f.write_str("image hash is not 32 characters long"),
            ImageHashParseErrorType::Range => f.write_str("image hash contains a non-hex character"),
        }
    }
}

impl Error for ImageHashParseError {}

/// Type of [`ImageHashParseError`] that occurred.
#[derive(Debug)]
#[non_exhaustive]
pub enum ImageHashParseErrorType {
    /// Hash has the wrong length.
    Format,
    /// Hash contains a character outside of `0-9a-fA-F`.
    Range,
}

#[cfg(test)]
mod tests {
    use super::{ImageHash, ImageHashParseErrorType};
    use serde_test::Token;

    const HASH: &str = "1acefe340fafb4ecefae407f3abdb323";

    #[test]
    fn parse_round_trip() {
        let hash = ImageHash::parse(HASH).unwrap();
        assert!(!hash.is_animated());
        assert_eq!(hash.to_string(), HASH);
        serde_test::assert_tokens(&hash, &[Token::Str(HASH)]);
    }

    #[test]
    fn parse_animated() {
        let animated = format!("a_{HASH}");
        let hash = ImageHash::parse(&animated).unwrap();
        assert!(hash.is_animated());
        assert_eq!(hash.to_string(), animated);
    }

    #[test]
    fn uppercase_is_normalized() {
        let upper = ImageHash::parse(&HASH.to_uppercase()).unwrap();
        assert_eq!(upper.to_string(), HASH);
        assert_eq!(upper, ImageHash::parse(HASH).unwrap());
    }

    #[test]
    fn rejects_bad_input() {
        let short = ImageHash::parse("abc").unwrap_err();
        assert!(matches!(short.kind(), ImageHashParseErrorType::Format));

        let bad_char = ImageHash::parse("zacefe340fafb4ecefae407f3abdb323").unwrap_err();
        assert!(matches!(bad_char.kind(), ImageHashParseErrorType::Range));
    }
}

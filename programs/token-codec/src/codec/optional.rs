//! Optional-Field Codec
//!
//! A compact optional type with a fixed wire size, used for every optional
//! field of the state records.
//!
//! # Layout
//!
//! ```text
//! OptionalField<Pubkey>: 36 bytes
//! [tag: 4 bytes, little-endian u32][value: 32 bytes]
//!
//! OptionalField<u64>: 12 bytes
//! [tag: 4 bytes, little-endian u32][value: 8 bytes]
//!
//! Tag = 1: Some (value bytes hold the payload)
//! Tag = anything else: None (value bytes are read and discarded)
//! ```
//!
//! The payload slot is always on the wire, present or not.

use super::{Decoder, Encoder};
use crate::error::CodecResult;
use solana_program::pubkey::{Pubkey, PUBKEY_BYTES};
use std::io::Write;

/// Size of the presence tag in front of every optional payload.
pub const TAG_LEN: usize = 4;

// =============================================================================
// FIXED SIZE PAYLOADS
// =============================================================================

/// A value with a constant encoded size.
///
/// Only types implementing this can sit inside an [`OptionalField`], which
/// is what keeps the optional's wire size constant.
pub trait FixedSize: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    fn decode_fixed(dec: &mut Decoder) -> CodecResult<Self>;

    fn encode_fixed<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()>;
}

impl FixedSize for Pubkey {
    const SIZE: usize = PUBKEY_BYTES;

    fn decode_fixed(dec: &mut Decoder) -> CodecResult<Self> {
        dec.read_pubkey()
    }

    fn encode_fixed<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()> {
        enc.write_pubkey(self)
    }
}

impl FixedSize for u64 {
    const SIZE: usize = 8;

    fn decode_fixed(dec: &mut Decoder) -> CodecResult<Self> {
        dec.read_u64()
    }

    fn encode_fixed<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()> {
        enc.write_u64(*self)
    }
}

// =============================================================================
// OPTIONAL FIELD
// =============================================================================

/// Optional value with a 4-byte presence tag and an always-present payload.
///
/// # Example
///
/// ```ignore
/// let authority: OptionalField<Pubkey> = OptionalField::some(my_pubkey);
/// if let Some(key) = authority.as_ref() {
///     // ...
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionalField<T> {
    value: Option<T>,
}

impl<T> OptionalField<T> {
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn as_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> OptionalField<U> {
        OptionalField {
            value: self.value.map(f),
        }
    }
}

impl<T: FixedSize> OptionalField<T> {
    /// Encoded size: tag plus payload slot, independent of presence.
    pub const WIRE_SIZE: usize = TAG_LEN + T::SIZE;

    /// Decode a tag and its payload slot.
    ///
    /// Only a tag of exactly 1 means present. Any other tag value, including
    /// malformed ones like 2, decodes as `None` rather than failing, matching
    /// records already stored on chain. The payload bytes are consumed either
    /// way.
    pub fn decode(dec: &mut Decoder) -> CodecResult<Self> {
        let tag = dec.read_u32()?;
        if tag == 1 {
            Ok(Self::some(T::decode_fixed(dec)?))
        } else {
            // discard
            dec.read_n_bytes(T::SIZE)?;
            Ok(Self::none())
        }
    }

    /// Write tag 1 and the payload, or tag 0 and a zero-filled slot.
    pub fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()> {
        match self.value.as_ref() {
            Some(value) => {
                enc.write_u32(1)?;
                value.encode_fixed(enc)
            }
            None => {
                enc.write_u32(0)?;
                enc.write_zeros(T::SIZE)
            }
        }
    }
}

impl<T> From<Option<T>> for OptionalField<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<OptionalField<T>> for Option<T> {
    fn from(field: OptionalField<T>) -> Self {
        field.value
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

//! Account State Structures
//!
//! The data layouts stored in token-program accounts.
//!
//! # Account Types
//!
//! | Type | Size | Description |
//! |------|------|-------------|
//! | Mint | 82 bytes | Defines a token type |
//! | Account | 165 bytes | Holds tokens for an owner |
//! | Multisig | 355 bytes | M-of-N multisig authority |
//!
//! # Serialization
//!
//! All structures use fixed-size, deterministic serialization:
//! - Little-endian for integers
//! - No padding between fields
//! - Optional fields always occupy their full slot
//! - No length prefix on the record itself
//!
//! Decoding does not validate field values. A mint with 200 decimals or an
//! account with state byte 9 decodes fine; checks belong to the caller.
//!
//! # The Pack Trait
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&account_data)?;  // Read
//! let bytes = mint.to_vec()?;                          // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod mint;
pub mod multisig;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::{Account, AccountState};
pub use mint::Mint;
pub use multisig::{Multisig, MAX_SIGNERS};

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use std::io::Write;

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Trait for decoding/encoding account state to/from bytes.
///
/// Implementors supply the field-by-field `decode` and `encode`; the slice
/// helpers come for free.
pub trait Pack: Sized {
    /// The fixed size in bytes when serialized.
    const LEN: usize;

    /// Read the record's fields in declaration order from the cursor.
    fn decode(dec: &mut Decoder) -> CodecResult<Self>;

    /// Write the record's fields in declaration order into the sink.
    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()>;

    /// Decode from the front of `input`.
    ///
    /// Fails with `UnexpectedEof` if `input` is shorter than `LEN`.
    /// Trailing bytes are left alone; use `unpack_from_slice` when the length
    /// must match exactly.
    fn unpack(input: &[u8]) -> CodecResult<Self> {
        Self::decode(&mut Decoder::new(input))
    }

    /// Unpack with length validation.
    ///
    /// Checks that `src.len() == Self::LEN` before unpacking.
    fn unpack_from_slice(src: &[u8]) -> CodecResult<Self> {
        if src.len() != Self::LEN {
            return Err(CodecError::InvalidDataLength {
                expected: Self::LEN,
                actual: src.len(),
            });
        }
        Self::unpack(src)
    }

    /// Pack with length validation.
    ///
    /// Checks that `dst.len() == Self::LEN` before packing.
    fn pack_into_slice(&self, dst: &mut [u8]) -> CodecResult<()> {
        if dst.len() != Self::LEN {
            return Err(CodecError::InvalidDataLength {
                expected: Self::LEN,
                actual: dst.len(),
            });
        }
        self.encode(&mut Encoder::new(dst))
    }

    /// Encode into a freshly allocated buffer of exactly `LEN` bytes.
    fn to_vec(&self) -> CodecResult<Vec<u8>> {
        let mut enc = Encoder::new(Vec::with_capacity(Self::LEN));
        self.encode(&mut enc)?;
        Ok(enc.into_inner())
    }
}

/*
=============================================================================
DETAILED EXPLANATION
=============================================================================

WHY FIXED SIZES MATTER
======================

Accounts have fixed sizes set at creation. Client code that reads account
data relies on:
- Mint::LEN = 82 to recognise a mint
- Account::LEN = 165 to recognise a token account
- Multisig::LEN = 355 to recognise a multisig

That is why an absent optional still writes its full payload slot. An
absent delegate is 36 bytes of [0,0,0,0, 0 x 32], not 4 bytes.

DECODE VS UNPACK_FROM_SLICE
===========================

decode / unpack:
    Sequential read from a cursor. Short input = UnexpectedEof.
    Extra input = ignored (the cursor simply stops).

unpack_from_slice:
    Same read, but the slice must be exactly LEN bytes.
    Use it on raw account data where a size mismatch means the account
    is some other type.

ENCODE SINKS
============

encode writes through Encoder<W: Write>:
    Vec<u8>      - grows as needed, never fails
    &mut [u8]    - fails with SinkWriteFailure once full

pack_into_slice checks the length up front, so the slice sink never
runs out of room there.
*/

//! Primitive Codec
//!
//! Cursor-based little-endian reads and sink-based writes.
//! Every record codec in [`crate::state`] is built on these two types.
//!
//! # Reading
//!
//! ```ignore
//! let mut dec = Decoder::new(&data);
//! let supply = dec.read_u64()?;     // 8 bytes, little-endian
//! let decimals = dec.read_u8()?;
//! let initialized = dec.read_bool()?;
//! ```
//!
//! # Writing
//!
//! ```ignore
//! let mut enc = Encoder::new(Vec::new());
//! enc.write_u64(supply)?;
//! enc.write_bool(true)?;
//! let bytes = enc.into_inner();
//! ```

pub mod optional;

pub use optional::{FixedSize, OptionalField};

use crate::error::{CodecError, CodecResult};
use arrayref::array_ref;
use solana_program::pubkey::{Pubkey, PUBKEY_BYTES};
use std::io::{ErrorKind, Write};

// =============================================================================
// DECODER
// =============================================================================

/// Read cursor over a borrowed byte buffer.
///
/// A failed read leaves the cursor where it was.
#[derive(Clone, Debug)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Take the next `n` bytes, or fail with `UnexpectedEof`.
    pub fn read_n_bytes(&mut self, n: usize) -> CodecResult<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(CodecError::UnexpectedEof {
                requested: n,
                remaining,
            });
        }
        let data: &'a [u8] = self.data;
        let bytes = &data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> CodecResult<u8> {
        Ok(self.read_n_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> CodecResult<u16> {
        let bytes = self.read_n_bytes(2)?;
        Ok(u16::from_le_bytes(*array_ref![bytes, 0, 2]))
    }

    pub fn read_u32(&mut self) -> CodecResult<u32> {
        let bytes = self.read_n_bytes(4)?;
        Ok(u32::from_le_bytes(*array_ref![bytes, 0, 4]))
    }

    pub fn read_u64(&mut self) -> CodecResult<u64> {
        let bytes = self.read_n_bytes(8)?;
        Ok(u64::from_le_bytes(*array_ref![bytes, 0, 8]))
    }

    /// 0 = false, anything else = true.
    pub fn read_bool(&mut self) -> CodecResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read a raw 32-byte public key.
    pub fn read_pubkey(&mut self) -> CodecResult<Pubkey> {
        let bytes = self.read_n_bytes(PUBKEY_BYTES)?;
        Ok(Pubkey::new_from_array(*array_ref![bytes, 0, 32]))
    }
}

// =============================================================================
// ENCODER
// =============================================================================

/// Little-endian writer over any [`Write`] sink.
///
/// `Vec<u8>` never rejects a write. A `&mut [u8]` rejects once full, which
/// surfaces as `SinkWriteFailure`.
#[derive(Debug)]
pub struct Encoder<W: Write> {
    sink: W,
    written: usize,
}

impl<W: Write> Encoder<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, written: 0 }
    }

    /// Total bytes accepted by the sink.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Give back the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Write all of `bytes`.
    ///
    /// On `SinkWriteFailure` a prefix may already be in the sink;
    /// `bytes_written` counts it.
    pub fn write_bytes(&mut self, mut bytes: &[u8]) -> CodecResult<()> {
        while !bytes.is_empty() {
            match self.sink.write(bytes) {
                Ok(0) => {
                    return Err(CodecError::SinkWriteFailure {
                        kind: ErrorKind::WriteZero,
                    })
                }
                Ok(n) => {
                    self.written += n;
                    bytes = &bytes[n..];
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> CodecResult<()> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_u64(&mut self, value: u64) -> CodecResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Canonical form: 0x01 for true, 0x00 for false.
    pub fn write_bool(&mut self, value: bool) -> CodecResult<()> {
        self.write_u8(value as u8)
    }

    pub fn write_pubkey(&mut self, key: &Pubkey) -> CodecResult<()> {
        self.write_bytes(key.as_ref())
    }

    /// Write `n` zero bytes (the payload slot of an absent optional field).
    pub fn write_zeros(&mut self, n: usize) -> CodecResult<()> {
        const ZEROS: [u8; 32] = [0; 32];
        let mut left = n;
        while left > 0 {
            let chunk = left.min(ZEROS.len());
            self.write_bytes(&ZEROS[..chunk])?;
            left -= chunk;
        }
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

//! Codec Error Types
//!
//! Every fallible operation in this crate returns [`CodecError`].
//! Each variant maps to a stable numeric code when converted into a
//! [`ProgramError`], so callers living inside a program can use `?` directly.
//!
//! # Error Codes
//!
//! | Code | Variant | Raised by |
//! |------|---------|-----------|
//! | 0 | UnexpectedEof | Decoder (buffer too short) |
//! | 1 | SinkWriteFailure | Encoder (sink rejected bytes) |
//! | 2 | InvalidDataLength | Exact-length pack helpers |
//! | 3 | MissingAccountRole | Instruction builder validation |
//! | 4 | InvalidInstruction | Instruction data parsing |
//! | 5 | InvalidMultisigConfig | Multisig configuration check |

use solana_program::program_error::ProgramError;
use std::io;
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the codec and the instruction builders.
///
/// After release, NEVER reorder these variants: the numeric codes produced by
/// [`CodecError::code`] are part of the public contract.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Error 0: the cursor has fewer bytes left than a fixed-size read needs.
    ///
    /// Never recovered from. A short buffer is never zero-padded.
    #[error("unexpected end of input: requested {requested} bytes, {remaining} remaining")]
    UnexpectedEof {
        /// Bytes the read asked for
        requested: usize,
        /// Bytes still available in the buffer
        remaining: usize,
    },

    /// Error 1: the underlying sink refused a write.
    #[error("sink rejected write: {kind}")]
    SinkWriteFailure {
        /// I/O error kind reported by the sink
        kind: io::ErrorKind,
    },

    /// Error 2: a slice handed to an exact-length helper has the wrong size.
    ///
    /// Mint must be 82 bytes, Account 165 bytes, Multisig 355 bytes.
    #[error("invalid data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength {
        /// Fixed record size
        expected: usize,
        /// Length of the slice that was passed
        actual: usize,
    },

    /// Error 3: an instruction account slot is still unset.
    ///
    /// Validation is fail-fast: `index` is the lowest unset slot.
    #[error("account role at index {index} is not set")]
    MissingAccountRole {
        /// Slot index within the instruction's account list
        index: usize,
    },

    /// Error 4: instruction data could not be parsed.
    #[error("invalid instruction")]
    InvalidInstruction,

    /// Error 5: multisig header is inconsistent (m > n, n > 11, m == 0).
    #[error("invalid multisig configuration")]
    InvalidMultisigConfig,
}

/// Result alias used throughout the crate.
pub type CodecResult<T> = Result<T, CodecError>;

impl CodecError {
    /// Stable numeric code of this error.
    pub fn code(&self) -> u32 {
        match self {
            CodecError::UnexpectedEof { .. } => 0,
            CodecError::SinkWriteFailure { .. } => 1,
            CodecError::InvalidDataLength { .. } => 2,
            CodecError::MissingAccountRole { .. } => 3,
            CodecError::InvalidInstruction => 4,
            CodecError::InvalidMultisigConfig => 5,
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Convert CodecError to ProgramError.
///
/// Allows `?` on codec calls inside functions returning `ProgramResult`.
impl From<CodecError> for ProgramError {
    fn from(e: CodecError) -> Self {
        ProgramError::Custom(e.code())
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        CodecError::SinkWriteFailure { kind: e.kind() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_error_codes_are_stable() {
        let eof = CodecError::UnexpectedEof {
            requested: 8,
            remaining: 3,
        };
        assert_eq!(ProgramError::from(eof), ProgramError::Custom(0));
        assert_eq!(
            ProgramError::from(CodecError::MissingAccountRole { index: 5 }),
            ProgramError::Custom(3)
        );
        assert_eq!(
            ProgramError::from(CodecError::InvalidMultisigConfig),
            ProgramError::Custom(5)
        );
    }

    #[test]
    fn test_io_error_becomes_sink_failure() {
        let err: CodecError = io::Error::from(io::ErrorKind::WriteZero).into();
        assert_eq!(
            err,
            CodecError::SinkWriteFailure {
                kind: io::ErrorKind::WriteZero
            }
        );
    }

    #[test]
    fn test_display_mentions_index() {
        let msg = CodecError::MissingAccountRole { index: 1 }.to_string();
        assert_eq!(msg, "account role at index 1 is not set");
    }
}

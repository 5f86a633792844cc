//! Multisig Account State
//!
//! A Multisig is an M-of-N authority: M signatures out of N registered
//! signers are needed to act as the authority.
//!
//! # Size: 355 bytes

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::state::Pack;
use solana_program::pubkey::Pubkey;
use std::io::Write;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Maximum number of signers allowed in a multisig.
///
/// The signer table always has this many slots on the wire.
pub const MAX_SIGNERS: usize = 11;

// =============================================================================
// MULTISIG STRUCTURE
// =============================================================================

/// Multisig account data structure.
///
/// # Memory Layout (355 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field          │ Type                          │
/// ├────────┼──────┼────────────────┼───────────────────────────────┤
/// │ 0      │ 1    │ m              │ u8 (required signatures)      │
/// │ 1      │ 1    │ n              │ u8 (total signers)            │
/// │ 2      │ 1    │ is_initialized │ bool (as u8)                  │
/// │ 3      │ 352  │ signers        │ [Pubkey; 11] (32 * 11)        │
/// ├────────┼──────┼────────────────┼───────────────────────────────┤
/// │ Total  │ 355  │                │                               │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// The codec does not check `m <= n <= MAX_SIGNERS`; call
/// [`Multisig::check_config`] when that matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Multisig {
    /// Number of signatures required (M in M-of-N)
    pub m: u8,

    /// Number of valid signers (N in M-of-N)
    pub n: u8,

    /// Whether this multisig has been initialized
    pub is_initialized: bool,

    /// Signer public keys; only the first `n` are meaningful
    pub signers: [Pubkey; MAX_SIGNERS],
}

impl Default for Multisig {
    fn default() -> Self {
        Self {
            m: 0,
            n: 0,
            is_initialized: false,
            signers: [Pubkey::default(); MAX_SIGNERS],
        }
    }
}

impl Multisig {
    /// The registered signers (first `n` entries, capped at the table size).
    pub fn signers(&self) -> &[Pubkey] {
        let n = (self.n as usize).min(MAX_SIGNERS);
        &self.signers[..n]
    }

    /// Check the M-of-N header.
    ///
    /// # Errors
    ///
    /// `InvalidMultisigConfig` if n > 11, m > n, or the multisig is
    /// initialized with m == 0.
    pub fn check_config(&self) -> CodecResult<()> {
        if self.n as usize > MAX_SIGNERS
            || self.m > self.n
            || (self.is_initialized && self.m == 0)
        {
            return Err(CodecError::InvalidMultisigConfig);
        }
        Ok(())
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Multisig {
    /// 1 + 1 + 1 + 11 * 32
    const LEN: usize = 3 + 32 * MAX_SIGNERS;

    fn decode(dec: &mut Decoder) -> CodecResult<Self> {
        let m = dec.read_u8()?;
        let n = dec.read_u8()?;
        let is_initialized = dec.read_bool()?;

        // always all 11 slots, whatever n says
        let mut signers = [Pubkey::default(); MAX_SIGNERS];
        for signer in signers.iter_mut() {
            *signer = dec.read_pubkey()?;
        }

        Ok(Multisig {
            m,
            n,
            is_initialized,
            signers,
        })
    }

    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()> {
        enc.write_u8(self.m)?;
        enc.write_u8(self.n)?;
        enc.write_bool(self.is_initialized)?;
        for signer in self.signers.iter() {
            enc.write_pubkey(signer)?;
        }
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

//! Mint Account State
//!
//! A Mint defines a token type: who may mint, the total supply, the display
//! precision and who may freeze holder accounts.
//!
//! # Size: 82 bytes

use crate::codec::{Decoder, Encoder, OptionalField};
use crate::error::CodecResult;
use crate::state::Pack;
use solana_program::pubkey::Pubkey;
use std::io::Write;

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data structure.
///
/// # Memory Layout (82 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ OptionalField<Pubkey>       │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// │ 46     │ 36   │ freeze_authority │ OptionalField<Pubkey>       │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 82   │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mint {
    /// The authority that can mint new tokens.
    ///
    /// `None` means the supply is fixed forever.
    pub mint_authority: OptionalField<Pubkey>,

    /// Total number of tokens currently in existence, in base units.
    pub supply: u64,

    /// Number of base 10 digits to the right of the decimal place.
    ///
    /// Display only; not range checked by the codec.
    pub decimals: u8,

    /// Whether this mint has been initialized.
    pub is_initialized: bool,

    /// The authority that can freeze/thaw token accounts.
    pub freeze_authority: OptionalField<Pubkey>,
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    /// 36 + 8 + 1 + 1 + 36
    const LEN: usize = 82;

    fn decode(dec: &mut Decoder) -> CodecResult<Self> {
        let mint_authority = OptionalField::decode(dec)?;
        let supply = dec.read_u64()?;
        let decimals = dec.read_u8()?;
        let is_initialized = dec.read_bool()?;
        let freeze_authority = OptionalField::decode(dec)?;

        Ok(Mint {
            mint_authority,
            supply,
            decimals,
            is_initialized,
            freeze_authority,
        })
    }

    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()> {
        self.mint_authority.encode(enc)?;
        enc.write_u64(self.supply)?;
        enc.write_u8(self.decimals)?;
        enc.write_bool(self.is_initialized)?;
        self.freeze_authority.encode(enc)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

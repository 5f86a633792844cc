//! Token Account State
//!
//! A Token Account holds tokens of ONE mint for ONE owner.
//!
//! # Size: 165 bytes

use crate::codec::{Decoder, Encoder, OptionalField};
use crate::error::CodecResult;
use crate::state::Pack;
use solana_program::pubkey::Pubkey;
use std::io::Write;

// =============================================================================
// ACCOUNT STATE ENUM
// =============================================================================

/// Lifecycle state of a token account, stored as a single byte.
///
/// | Byte | State |
/// |------|-------|
/// | 0 | Uninitialized |
/// | 1 | Initialized |
/// | 2 | Frozen |
///
/// Any other byte is kept as `Unrecognized` so decoding never rejects or
/// rewrites it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountState {
    /// Account is not yet initialized
    #[default]
    Uninitialized,

    /// Account is initialized; the owner and/or delegate may operate on it
    Initialized,

    /// Account has been frozen by the mint freeze authority
    Frozen,

    /// A state byte outside 0..=2
    Unrecognized(u8),
}

impl AccountState {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => AccountState::Uninitialized,
            1 => AccountState::Initialized,
            2 => AccountState::Frozen,
            other => AccountState::Unrecognized(other),
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            AccountState::Uninitialized => 0,
            AccountState::Initialized => 1,
            AccountState::Frozen => 2,
            AccountState::Unrecognized(other) => other,
        }
    }
}

impl From<u8> for AccountState {
    fn from(value: u8) -> Self {
        AccountState::from_u8(value)
    }
}

impl From<AccountState> for u8 {
    fn from(state: AccountState) -> Self {
        state.to_u8()
    }
}

// =============================================================================
// TOKEN ACCOUNT STRUCTURE
// =============================================================================

/// Token account data structure.
///
/// # Memory Layout (165 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 32   │ mint             │ Pubkey                      │
/// │ 32     │ 32   │ owner            │ Pubkey                      │
/// │ 64     │ 8    │ amount           │ u64                         │
/// │ 72     │ 36   │ delegate         │ OptionalField<Pubkey>       │
/// │ 108    │ 1    │ state            │ AccountState (u8)           │
/// │ 109    │ 12   │ is_native        │ OptionalField<u64>          │
/// │ 121    │ 8    │ delegated_amount │ u64                         │
/// │ 129    │ 36   │ close_authority  │ OptionalField<Pubkey>       │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ Total  │ 165  │                  │                             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Account {
    /// The mint associated with this account
    pub mint: Pubkey,

    /// The owner of this account
    pub owner: Pubkey,

    /// The amount of tokens this account holds
    pub amount: u64,

    /// If `delegate` is set then `delegated_amount` is the amount it may move
    pub delegate: OptionalField<Pubkey>,

    /// The account's state
    pub state: AccountState,

    /// Set for wrapped-SOL accounts; holds the rent-exempt reserve in lamports
    pub is_native: OptionalField<u64>,

    /// The amount delegated
    pub delegated_amount: u64,

    /// Optional authority to close the account
    pub close_authority: OptionalField<Pubkey>,
}

impl Account {
    pub fn is_frozen(&self) -> bool {
        self.state == AccountState::Frozen
    }

    pub fn is_native(&self) -> bool {
        self.is_native.is_some()
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Account {
    /// 32 + 32 + 8 + 36 + 1 + 12 + 8 + 36
    const LEN: usize = 165;

    fn decode(dec: &mut Decoder) -> CodecResult<Self> {
        let mint = dec.read_pubkey()?;
        let owner = dec.read_pubkey()?;
        let amount = dec.read_u64()?;
        let delegate = OptionalField::decode(dec)?;
        let state = AccountState::from_u8(dec.read_u8()?);
        let is_native = OptionalField::decode(dec)?;
        let delegated_amount = dec.read_u64()?;
        let close_authority = OptionalField::decode(dec)?;

        Ok(Account {
            mint,
            owner,
            amount,
            delegate,
            state,
            is_native,
            delegated_amount,
            close_authority,
        })
    }

    fn encode<W: Write>(&self, enc: &mut Encoder<W>) -> CodecResult<()> {
        enc.write_pubkey(&self.mint)?;
        enc.write_pubkey(&self.owner)?;
        enc.write_u64(self.amount)?;
        self.delegate.encode(enc)?;
        enc.write_u8(self.state.to_u8())?;
        self.is_native.encode(enc)?;
        enc.write_u64(self.delegated_amount)?;
        self.close_authority.encode(enc)
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

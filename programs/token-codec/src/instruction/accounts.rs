//! Account Role List
//!
//! The seven account slots of a create instruction, each with its address
//! and read/write/signer flags. Slots are named fields rather than an
//! anonymous array, but keep a fixed index so validation can scan them in
//! ascending order.

use crate::ids::{RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
use solana_program::instruction::AccountMeta;

/// An address plus its writable and signer flags.
pub type AccountRole = AccountMeta;

/// Slot indices, in wire order.
pub mod slot {
    pub const PAYER: usize = 0;
    pub const ASSOCIATED_TOKEN_ACCOUNT: usize = 1;
    pub const WALLET: usize = 2;
    pub const MINT: usize = 3;
    pub const SYSTEM_PROGRAM: usize = 4;
    pub const TOKEN_PROGRAM: usize = 5;
    pub const RENT_SYSVAR: usize = 6;
}

/// Account roles of a `Create` / `CreateIdempotent` instruction.
///
/// A slot is `None` until the builder (or the caller) fills it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRoleList {
    pub payer: Option<AccountRole>,
    pub associated_token_account: Option<AccountRole>,
    pub wallet: Option<AccountRole>,
    pub mint: Option<AccountRole>,
    pub system_program: Option<AccountRole>,
    pub token_program: Option<AccountRole>,
    pub rent_sysvar: Option<AccountRole>,
}

impl AccountRoleList {
    /// Number of slots.
    pub const LEN: usize = 7;

    /// Slot names in index order, for display.
    pub const NAMES: [&'static str; Self::LEN] = [
        "payer",
        "associatedTokenAccount",
        "wallet",
        "tokenMint",
        "systemProgram",
        "tokenProgram",
        "sysVarRent",
    ];

    /// Every slot unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Slots with well-known addresses filled in as read-only, non-signer
    /// roles: system program, classic token program and rent sysvar.
    pub fn for_create() -> Self {
        Self {
            system_program: Some(AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false)),
            token_program: Some(AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false)),
            rent_sysvar: Some(AccountMeta::new_readonly(RENT_SYSVAR_ID, false)),
            ..Self::default()
        }
    }

    fn slot(&self, index: usize) -> Option<&Option<AccountRole>> {
        match index {
            slot::PAYER => Some(&self.payer),
            slot::ASSOCIATED_TOKEN_ACCOUNT => Some(&self.associated_token_account),
            slot::WALLET => Some(&self.wallet),
            slot::MINT => Some(&self.mint),
            slot::SYSTEM_PROGRAM => Some(&self.system_program),
            slot::TOKEN_PROGRAM => Some(&self.token_program),
            slot::RENT_SYSVAR => Some(&self.rent_sysvar),
            _ => None,
        }
    }

    fn slot_mut(&mut self, index: usize) -> Option<&mut Option<AccountRole>> {
        match index {
            slot::PAYER => Some(&mut self.payer),
            slot::ASSOCIATED_TOKEN_ACCOUNT => Some(&mut self.associated_token_account),
            slot::WALLET => Some(&mut self.wallet),
            slot::MINT => Some(&mut self.mint),
            slot::SYSTEM_PROGRAM => Some(&mut self.system_program),
            slot::TOKEN_PROGRAM => Some(&mut self.token_program),
            slot::RENT_SYSVAR => Some(&mut self.rent_sysvar),
            _ => None,
        }
    }

    /// Role at `index`; `None` when unset or out of range.
    pub fn get(&self, index: usize) -> Option<&AccountRole> {
        self.slot(index).and_then(Option::as_ref)
    }

    /// Replace the role at `index`. Returns `false` for an out-of-range index.
    pub fn set(&mut self, index: usize, role: Option<AccountRole>) -> bool {
        match self.slot_mut(index) {
            Some(slot) => {
                *slot = role;
                true
            }
            None => false,
        }
    }

    /// All slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&AccountRole>> + '_ {
        (0..Self::LEN).map(move |index| self.get(index))
    }

    /// Lowest unset slot, if any.
    pub fn first_missing(&self) -> Option<usize> {
        self.iter().position(|role| role.is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// The roles in index order, or the index of the first unset slot.
    pub fn to_vec(&self) -> Result<Vec<AccountRole>, usize> {
        self.iter()
            .enumerate()
            .map(|(index, role)| role.cloned().ok_or(index))
            .collect()
    }
}

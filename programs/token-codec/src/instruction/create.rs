//! Create / CreateIdempotent Builders
//!
//! # Usage
//!
//! ```ignore
//! let ix = create_instruction(&payer, &wallet, &mint, &TOKEN_PROGRAM_ID)
//!     .validate_and_build()?;
//! let instruction = ix.into_instruction()?;
//! ```
//!
//! # build vs validate_and_build
//!
//! `build` always returns an instruction, even with unset slots, so callers
//! can assemble and inspect partial instructions. `validate_and_build`
//! refuses to produce one while any slot is unset.
//!
//! Both derive the associated token account address first when slot 1 is
//! unset or holds the zero key.

use crate::address::{derive_associated_token_address, AddressDeriver, ProgramAddressDeriver};
use crate::error::{CodecError, CodecResult};
use crate::ids::ASSOCIATED_TOKEN_PROGRAM_ID;
use crate::instruction::accounts::{AccountRole, AccountRoleList};
use crate::instruction::AssociatedTokenInstruction;
use log::{debug, warn};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use std::fmt;

// =============================================================================
// BUILDER
// =============================================================================

/// Owned builder for the two create instructions.
///
/// Setters take and return the builder, so a chain never aliases the role
/// list.
#[derive(Clone, Debug)]
pub struct CreateBuilder<D = ProgramAddressDeriver> {
    kind: AssociatedTokenInstruction,
    accounts: AccountRoleList,
    deriver: D,
}

impl CreateBuilder<ProgramAddressDeriver> {
    /// Builder for the strict `Create` instruction.
    pub fn create() -> Self {
        Self::new(AssociatedTokenInstruction::Create)
    }

    /// Builder for `CreateIdempotent`.
    pub fn create_idempotent() -> Self {
        Self::new(AssociatedTokenInstruction::CreateIdempotent)
    }

    pub fn new(kind: AssociatedTokenInstruction) -> Self {
        Self::with_deriver(kind, ProgramAddressDeriver)
    }
}

impl<D: AddressDeriver> CreateBuilder<D> {
    /// Builder that derives addresses with `deriver` instead of the runtime
    /// search.
    pub fn with_deriver(kind: AssociatedTokenInstruction, deriver: D) -> Self {
        Self {
            kind,
            accounts: AccountRoleList::for_create(),
            deriver,
        }
    }

    pub fn kind(&self) -> AssociatedTokenInstruction {
        self.kind
    }

    pub fn accounts(&self) -> &AccountRoleList {
        &self.accounts
    }

    /// Direct access to the slots, e.g. to clear one.
    pub fn accounts_mut(&mut self) -> &mut AccountRoleList {
        &mut self.accounts
    }

    // =========================================================================
    // SETTERS
    // =========================================================================

    /// [WRITE, SIGNER] funding account.
    pub fn payer(mut self, payer: Pubkey) -> Self {
        self.accounts.payer = Some(AccountMeta::new(payer, true));
        self
    }

    /// [WRITE] address to create. Leave unset (or zero) to derive it.
    pub fn associated_token_account(mut self, address: Pubkey) -> Self {
        self.accounts.associated_token_account = Some(AccountMeta::new(address, false));
        self
    }

    /// [] wallet that will own the new token account.
    pub fn wallet(mut self, wallet: Pubkey) -> Self {
        self.accounts.wallet = Some(AccountMeta::new_readonly(wallet, false));
        self
    }

    /// [] token mint.
    pub fn mint(mut self, mint: Pubkey) -> Self {
        self.accounts.mint = Some(AccountMeta::new_readonly(mint, false));
        self
    }

    /// [] token program; defaults to the classic token program.
    pub fn token_program(mut self, token_program: Pubkey) -> Self {
        self.accounts.token_program = Some(AccountMeta::new_readonly(token_program, false));
        self
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    pub fn get_payer(&self) -> Option<&AccountRole> {
        self.accounts.payer.as_ref()
    }

    pub fn get_associated_token_account(&self) -> Option<&AccountRole> {
        self.accounts.associated_token_account.as_ref()
    }

    pub fn get_wallet(&self) -> Option<&AccountRole> {
        self.accounts.wallet.as_ref()
    }

    pub fn get_mint(&self) -> Option<&AccountRole> {
        self.accounts.mint.as_ref()
    }

    pub fn get_token_program(&self) -> Option<&AccountRole> {
        self.accounts.token_program.as_ref()
    }

    // =========================================================================
    // BUILD / VALIDATE
    // =========================================================================

    /// Fill slot 1 from the derivation when it is unset or the zero key.
    ///
    /// Unset seed slots contribute the zero key; validation reports them
    /// afterwards.
    fn derive_if_unset(&mut self) {
        let needs_derivation = match self.accounts.associated_token_account.as_ref() {
            None => true,
            Some(role) => role.pubkey == Pubkey::default(),
        };
        if !needs_derivation {
            return;
        }

        let seed_key = |role: &Option<AccountRole>| {
            role.as_ref().map(|r| r.pubkey).unwrap_or_default()
        };
        let wallet = seed_key(&self.accounts.wallet);
        let mint = seed_key(&self.accounts.mint);
        let token_program = seed_key(&self.accounts.token_program);

        let address =
            derive_associated_token_address(&self.deriver, &wallet, &mint, &token_program);
        debug!("Derived associated token account {}", address);
        self.accounts.associated_token_account = Some(AccountMeta::new(address, false));
    }

    /// Derive slot 1 if needed, then check every slot is set.
    ///
    /// # Errors
    ///
    /// `MissingAccountRole { index }` for the lowest unset slot.
    pub fn validate(&mut self) -> CodecResult<()> {
        self.derive_if_unset();

        if let Some(index) = self.accounts.first_missing() {
            warn!(
                "{}: account {} ({}) is not set",
                self.kind.name(),
                index,
                AccountRoleList::NAMES[index]
            );
            return Err(CodecError::MissingAccountRole { index });
        }
        Ok(())
    }

    /// Finish the instruction without checking for unset slots.
    pub fn build(mut self) -> BuiltInstruction {
        self.derive_if_unset();
        BuiltInstruction {
            kind: self.kind,
            accounts: self.accounts,
        }
    }

    /// `validate`, then `build`.
    pub fn validate_and_build(mut self) -> CodecResult<BuiltInstruction> {
        self.validate()?;
        Ok(self.build())
    }
}

/// `Create` builder with payer, wallet, mint and token program filled in.
pub fn create_instruction(
    payer: &Pubkey,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> CreateBuilder {
    CreateBuilder::create()
        .payer(*payer)
        .wallet(*wallet)
        .mint(*mint)
        .token_program(*token_program)
}

/// `CreateIdempotent` builder with payer, wallet, mint and token program
/// filled in.
pub fn create_idempotent_instruction(
    payer: &Pubkey,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> CreateBuilder {
    CreateBuilder::create_idempotent()
        .payer(*payer)
        .wallet(*wallet)
        .mint(*mint)
        .token_program(*token_program)
}

// =============================================================================
// BUILT INSTRUCTION
// =============================================================================

/// A finished create instruction: role list, discriminant, empty params.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltInstruction {
    kind: AssociatedTokenInstruction,
    accounts: AccountRoleList,
}

impl BuiltInstruction {
    pub fn kind(&self) -> AssociatedTokenInstruction {
        self.kind
    }

    pub fn discriminant(&self) -> u8 {
        self.kind.discriminant()
    }

    pub fn accounts(&self) -> &AccountRoleList {
        &self.accounts
    }

    /// Encoded parameters. Always empty for both create variants.
    pub fn params(&self) -> &[u8] {
        &[]
    }

    /// Full instruction data: discriminant then params.
    pub fn data(&self) -> Vec<u8> {
        let mut data = self.kind.pack();
        data.extend_from_slice(self.params());
        data
    }

    /// Convert into a runtime instruction for the transaction layer.
    ///
    /// # Errors
    ///
    /// `MissingAccountRole` if this came from a lenient `build` with unset
    /// slots.
    pub fn into_instruction(self) -> CodecResult<Instruction> {
        let accounts = self
            .accounts
            .to_vec()
            .map_err(|index| CodecError::MissingAccountRole { index })?;

        Ok(Instruction {
            program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
            accounts,
            data: self.data(),
        })
    }
}

impl TryFrom<BuiltInstruction> for Instruction {
    type Error = CodecError;

    fn try_from(built: BuiltInstruction) -> Result<Self, Self::Error> {
        built.into_instruction()
    }
}

/// Tree dump, one line per account:
///
/// ```text
/// Program: AssociatedTokenAccount ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL
/// └─ Instruction: Create
///    ├─ Params[len=0]
///    └─ Accounts[len=7]
///       ├─ payer                  [WRITE, SIGNER] <pubkey>
///       ...
/// ```
impl fmt::Display for BuiltInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Program: AssociatedTokenAccount {}",
            ASSOCIATED_TOKEN_PROGRAM_ID
        )?;
        writeln!(f, "└─ Instruction: {}", self.kind.name())?;
        writeln!(f, "   ├─ Params[len={}]", self.params().len())?;
        writeln!(f, "   └─ Accounts[len={}]", AccountRoleList::LEN)?;

        for (index, role) in self.accounts.iter().enumerate() {
            let branch = if index + 1 == AccountRoleList::LEN { "└─" } else { "├─" };
            let name = AccountRoleList::NAMES[index];
            match role {
                Some(role) => {
                    let flags = match (role.is_writable, role.is_signer) {
                        (true, true) => "[WRITE, SIGNER]",
                        (true, false) => "[WRITE]",
                        (false, true) => "[SIGNER]",
                        (false, false) => "[]",
                    };
                    writeln!(f, "      {} {:<22} {:<15} {}", branch, name, flags, role.pubkey)?;
                }
                None => writeln!(f, "      {} {:<22} <unset>", branch, name)?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

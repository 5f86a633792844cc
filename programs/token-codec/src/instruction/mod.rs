//! Associated Token Account Instructions
//!
//! Builders for the two account-creating instructions of the associated
//! token account program, and parsing of their instruction data.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][params: empty]
//! ```
//!
//! # Discriminant Values
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | Create |
//! | 1 | CreateIdempotent |
//!
//! Both take the same seven accounts and no parameters. They differ only in
//! what happens at execution time when the associated account already
//! exists: `Create` fails, `CreateIdempotent` succeeds without doing
//! anything if the existing account is a token account of the expected
//! mint and owner.

pub mod accounts;
pub mod create;

pub use accounts::{AccountRole, AccountRoleList};
pub use create::{
    create_idempotent_instruction, create_instruction, BuiltInstruction, CreateBuilder,
};

use crate::error::{CodecError, CodecResult};

// =============================================================================
// INSTRUCTION KIND
// =============================================================================

/// Instructions handled by the builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssociatedTokenInstruction {
    /// Create the associated token account; fails if it already exists.
    ///
    /// # Account Requirements
    ///
    /// | # | Account | Writable | Signer | Description |
    /// |---|---------|----------|--------|-------------|
    /// | 0 | payer | ✓ | ✓ | Funding account |
    /// | 1 | associated_token_account | ✓ | | Address to be created |
    /// | 2 | wallet | | | Owner of the new account |
    /// | 3 | mint | | | Token mint |
    /// | 4 | system_program | | | System program |
    /// | 5 | token_program | | | SPL Token program |
    /// | 6 | rent_sysvar | | | Rent sysvar |
    Create,

    /// Same accounts as `Create`, but a no-op when the account already
    /// exists as a token account for the same wallet and mint.
    CreateIdempotent,
}

impl AssociatedTokenInstruction {
    /// One-byte tag written as instruction data.
    pub fn discriminant(self) -> u8 {
        match self {
            AssociatedTokenInstruction::Create => 0,
            AssociatedTokenInstruction::CreateIdempotent => 1,
        }
    }

    /// Human-readable instruction name.
    pub fn name(self) -> &'static str {
        match self {
            AssociatedTokenInstruction::Create => "Create",
            AssociatedTokenInstruction::CreateIdempotent => "CreateIdempotent",
        }
    }

    /// Parse instruction data.
    ///
    /// Empty data is a `Create`: the first release of the program took no
    /// data at all and such instructions are still accepted. Bytes after the
    /// discriminant are ignored since neither variant has parameters.
    pub fn unpack(input: &[u8]) -> CodecResult<Self> {
        match input.split_first() {
            None => Ok(AssociatedTokenInstruction::Create),
            Some((&0, _)) => Ok(AssociatedTokenInstruction::Create),
            Some((&1, _)) => Ok(AssociatedTokenInstruction::CreateIdempotent),
            Some(_) => Err(CodecError::InvalidInstruction),
        }
    }

    /// Instruction data: the discriminant followed by zero parameter bytes.
    pub fn pack(self) -> Vec<u8> {
        vec![self.discriminant()]
    }
}

impl TryFrom<u8> for AssociatedTokenInstruction {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AssociatedTokenInstruction::unpack(&[value])
    }
}

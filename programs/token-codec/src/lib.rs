//! # SPL Token Codec
//!
//! Byte-exact codecs for SPL Token state records and builders for the
//! associated token account `Create` / `CreateIdempotent` instructions.
//!
//! ## Overview
//!
//! This crate allows you to:
//! - Decode and encode Mint, Account and Multisig records
//! - Read and write fixed-width optional fields
//! - Build create instructions with their seven account roles
//! - Derive associated token account addresses
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 82 bytes | Defines a token type |
//! | Account | 165 bytes | Holds tokens for an owner |
//! | Multisig | 355 bytes | M-of-N authority |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | Create | Create the associated token account |
//! | 1 | CreateIdempotent | Create it unless it already exists |

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Associated address derivation
pub mod address;

/// Primitive and optional-field codecs
pub mod codec;

/// Error type with stable codes
pub mod error;

/// Well-known program and sysvar addresses
pub mod ids;

/// Instruction kinds, account role list and builders
pub mod instruction;

/// Account state structures (Mint, Account, Multisig)
pub mod state;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use address::{
    get_associated_token_address, get_associated_token_address_with_program_id, AddressDeriver,
    ProgramAddressDeriver,
};
pub use codec::{Decoder, Encoder, FixedSize, OptionalField};
pub use error::{CodecError, CodecResult};
pub use instruction::{
    create_idempotent_instruction, create_instruction, AccountRole, AccountRoleList,
    AssociatedTokenInstruction, BuiltInstruction, CreateBuilder,
};
pub use state::{Account, AccountState, Mint, Multisig, Pack, MAX_SIGNERS};

// =============================================================================
// PROGRAM ID
// =============================================================================

// Owning program of every derived associated token address.
solana_program::declare_id!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

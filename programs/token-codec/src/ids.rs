//! Well-Known Program and Sysvar Addresses
//!
//! Constants the instruction builders pre-populate account slots with.
//! They are plain `const`s: initialized at compile time, never mutated.

use solana_program::{pubkey, pubkey::Pubkey};

/// System program, which allocates and funds the new account.
pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");

/// Classic SPL Token program.
pub const TOKEN_PROGRAM_ID: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// Token-2022 program. Pass it to `token_program` on the builder to target it.
pub const TOKEN_2022_PROGRAM_ID: Pubkey = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

/// Rent sysvar.
pub const RENT_SYSVAR_ID: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");

/// The associated token account program; owner of every derived address.
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

#[cfg(test)]
mod tests {
    use super::*;

    use solana_program::{system_program, sysvar};

    #[test]
    fn test_ids_match_runtime_definitions() {
        assert_eq!(SYSTEM_PROGRAM_ID, system_program::id());
        assert_eq!(RENT_SYSVAR_ID, sysvar::rent::id());
        assert_eq!(ASSOCIATED_TOKEN_PROGRAM_ID, crate::id());
        assert_ne!(TOKEN_PROGRAM_ID, TOKEN_2022_PROGRAM_ID);
    }
}

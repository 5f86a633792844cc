//! Associated Address Derivation
//!
//! The builders never hash anything themselves. They hand the seeds to an
//! [`AddressDeriver`], which by default is the runtime's program-derived
//! address search.
//!
//! # Seeds
//!
//! ```text
//! [wallet, token_program, mint]  against  ASSOCIATED_TOKEN_PROGRAM_ID
//! ```
//!
//! The order matters: swapping mint and token program gives a different
//! address.

use crate::ids::{ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID};
use solana_program::pubkey::Pubkey;

// =============================================================================
// DERIVER TRAIT
// =============================================================================

/// Pure, deterministic address derivation.
///
/// Returns `(address, bump, found)`. Same seeds and program id must always
/// give the same answer.
pub trait AddressDeriver {
    fn derive(&self, seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8, bool);
}

/// Default deriver backed by `Pubkey::try_find_program_address`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgramAddressDeriver;

impl AddressDeriver for ProgramAddressDeriver {
    fn derive(&self, seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8, bool) {
        match Pubkey::try_find_program_address(seeds, program_id) {
            Some((address, bump)) => (address, bump, true),
            None => (Pubkey::default(), 0, false),
        }
    }
}

impl<F> AddressDeriver for F
where
    F: Fn(&[&[u8]], &Pubkey) -> (Pubkey, u8, bool),
{
    fn derive(&self, seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8, bool) {
        self(seeds, program_id)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Seed list for an associated token address.
pub fn associated_token_seeds<'a>(
    wallet: &'a Pubkey,
    mint: &'a Pubkey,
    token_program: &'a Pubkey,
) -> [&'a [u8]; 3] {
    [wallet.as_ref(), token_program.as_ref(), mint.as_ref()]
}

/// Derive an associated token address with an explicit deriver.
///
/// Bump and found flag are dropped.
pub fn derive_associated_token_address<D: AddressDeriver + ?Sized>(
    deriver: &D,
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    let seeds = associated_token_seeds(wallet, mint, token_program);
    let (address, _bump, _found) = deriver.derive(&seeds, &ASSOCIATED_TOKEN_PROGRAM_ID);
    address
}

/// Associated token address for `wallet` and `mint` under the given token
/// program.
pub fn get_associated_token_address_with_program_id(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    derive_associated_token_address(&ProgramAddressDeriver, wallet, mint, token_program)
}

/// Associated token address under the classic token program.
pub fn get_associated_token_address(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(wallet, mint, &TOKEN_PROGRAM_ID)
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TOKEN_2022_PROGRAM_ID;

    #[test]
    fn test_default_deriver_matches_runtime_search() {
        let wallet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (expected, bump) = Pubkey::find_program_address(
            &[wallet.as_ref(), TOKEN_PROGRAM_ID.as_ref(), mint.as_ref()],
            &ASSOCIATED_TOKEN_PROGRAM_ID,
        );
        let (address, derived_bump, found) = ProgramAddressDeriver.derive(
            &associated_token_seeds(&wallet, &mint, &TOKEN_PROGRAM_ID),
            &ASSOCIATED_TOKEN_PROGRAM_ID,
        );

        assert!(found);
        assert_eq!(address, expected);
        assert_eq!(derived_bump, bump);
        assert_eq!(get_associated_token_address(&wallet, &mint), expected);
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let wallet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(
            get_associated_token_address(&wallet, &mint),
            get_associated_token_address(&wallet, &mint)
        );
    }

    #[test]
    fn test_token_program_changes_address() {
        let wallet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_ne!(
            get_associated_token_address(&wallet, &mint),
            get_associated_token_address_with_program_id(&wallet, &mint, &TOKEN_2022_PROGRAM_ID)
        );
    }

    #[test]
    fn test_closure_deriver_sees_seed_order() {
        let wallet = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let program = Pubkey::new_unique();

        let deriver = |seeds: &[&[u8]], program_id: &Pubkey| {
            assert_eq!(seeds.len(), 3);
            assert_eq!(seeds[0], wallet.as_ref());
            assert_eq!(seeds[1], program.as_ref());
            assert_eq!(seeds[2], mint.as_ref());
            assert_eq!(*program_id, ASSOCIATED_TOKEN_PROGRAM_ID);
            (Pubkey::new_from_array([7; 32]), 255u8, true)
        };

        assert_eq!(
            derive_associated_token_address(&deriver, &wallet, &mint, &program),
            Pubkey::new_from_array([7; 32])
        );
    }
}

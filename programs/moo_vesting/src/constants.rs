use anchor_lang::prelude::*;

#[constant]
/// Seed for vesting state PDA derivation
/// - Used in: ["vesting", token_mint, admin]
/// - One vesting distribution per (token, admin) pair
pub const VESTING_SEED: &str = "vesting";

/// Seed for token vault PDA derivation
/// - Used in: ["vault", vesting_key]
/// - The vault is a token account owned by the vesting PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", vesting_key, claimant_key]
/// - Tracks the cumulative amount each claimant has withdrawn
pub const CLAIM_SEED: &str = "claim";

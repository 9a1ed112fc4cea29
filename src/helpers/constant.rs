/// PDA seed of the admin state account.
pub const STATE_SEED: &[u8] = b"state_account";

/// PDA seed of the oracle info account.
pub const ORACLE_INFO_SEED: &[u8] = b"oracle_info";

/// Discriminator of the `verify` instruction on the external verifier
/// program (discriminator 0 is its own `initialize`).
pub const VERIFY_IX_DISCRIMINATOR: u8 = 1;

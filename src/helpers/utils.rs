use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{self, Pubkey},
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};
use sha3::{Digest, Keccak256};

use crate::state::{OracleInfo, OracleState, RequestId};
use crate::ID;

// Load oracle state from account via manual deserialize
pub fn get_oracle_state(account: &AccountInfo) -> Result<OracleState, ProgramError> {
    if *account.owner() != ID {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = unsafe { account.borrow_data_unchecked() };
    OracleState::deserialize(data)
}

// Write oracle state back into account via manual serialize
pub fn set_oracle_state(account: &AccountInfo, state: &OracleState) -> Result<(), ProgramError> {
    let data = unsafe { account.borrow_mut_data_unchecked() };
    state.serialize(data)
}

pub fn get_oracle_info(account: &AccountInfo) -> Result<OracleInfo, ProgramError> {
    if *account.owner() != ID {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = unsafe { account.borrow_data_unchecked() };
    OracleInfo::deserialize(data)
}

pub fn set_oracle_info(account: &AccountInfo, info: &OracleInfo) -> Result<(), ProgramError> {
    let data = unsafe { account.borrow_mut_data_unchecked() };
    info.serialize(data)
}

/// Derive the canonical PDA for a single static seed.
pub fn expected_pda(seed: &[u8]) -> (Pubkey, u8) {
    pubkey::find_program_address(&[seed], &ID)
}

/// Create a program-owned PDA, sized exactly and funded for rent exemption.
///
/// A pre-funded target makes the system program reject `CreateAccount`
/// with `AccountAlreadyInUse`, so in that case the account is topped up
/// to rent exemption and then allocated and assigned under the PDA
/// signature.
pub fn create_pda_account(
    payer: &AccountInfo,
    new_account: &AccountInfo,
    space: usize,
    seed: &[u8],
    bump: u8,
) -> ProgramResult {
    if new_account.data_len() > 0 {
        return Err(ProgramError::AccountAlreadyInitialized);
    }
    let rent = Rent::get()?;
    let required_lamports = rent.minimum_balance(space);

    let bump_seed = [bump];
    let seeds = [Seed::from(seed), Seed::from(&bump_seed[..])];

    let current_lamports = new_account.lamports();
    if current_lamports == 0 {
        let signer = Signer::from(&seeds[..]);
        return CreateAccount {
            from: payer,
            to: new_account,
            lamports: required_lamports,
            space: space as u64,
            owner: &ID,
        }
        .invoke_signed(&[signer]);
    }

    if current_lamports < required_lamports {
        Transfer {
            from: payer,
            to: new_account,
            lamports: required_lamports - current_lamports,
        }
        .invoke()?;
    }
    let signer = Signer::from(&seeds[..]);
    Allocate {
        account: new_account,
        space: space as u64,
    }
    .invoke_signed(&[signer])?;
    let signer = Signer::from(&seeds[..]);
    Assign {
        account: new_account,
        owner: &ID,
    }
    .invoke_signed(&[signer])
}

/// Keccak-256 digest binding the app id, the oracle request and the
/// claimed outcome. The outcome is hashed as the ASCII literal
/// `"true"`/`"false"` for parity with the oracle network's signers.
pub fn outcome_message_hash(
    app_id: &[u8; 32],
    request_id: &RequestId,
    outcome: bool,
) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(app_id);
    hasher.update(request_id);
    hasher.update(if outcome { &b"true"[..] } else { &b"false"[..] });
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_framing_matches_concatenation() {
        let app_id = [0x11u8; 32];
        let request_id = [0x22u8; 32];

        let mut concat = std::vec::Vec::new();
        concat.extend_from_slice(&app_id);
        concat.extend_from_slice(&request_id);
        concat.extend_from_slice(b"true");
        let mut hasher = Keccak256::new();
        hasher.update(&concat);
        let expected: [u8; 32] = hasher.finalize().into();

        assert_eq!(outcome_message_hash(&app_id, &request_id, true), expected);
    }

    #[test]
    fn outcome_flag_changes_hash() {
        let app_id = [0u8; 32];
        let request_id = [0u8; 32];
        assert_ne!(
            outcome_message_hash(&app_id, &request_id, true),
            outcome_message_hash(&app_id, &request_id, false)
        );
    }

    #[test]
    fn request_id_changes_hash() {
        let app_id = [0u8; 32];
        assert_ne!(
            outcome_message_hash(&app_id, &[1u8; 32], true),
            outcome_message_hash(&app_id, &[2u8; 32], true)
        );
    }
}

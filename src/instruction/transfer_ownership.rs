use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

use crate::error::{to_program_error, OracleError};
use crate::helpers::{expected_pda, get_oracle_state, set_oracle_state, STATE_SEED};

pub fn process_transfer_ownership(accounts: &[AccountInfo], new_owner: Pubkey) -> ProgramResult {
    let [state_account_info, owner_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !owner_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let (state_pda, _bump) = expected_pda(STATE_SEED);
    if *state_account_info.key() != state_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    let mut state = get_oracle_state(state_account_info)?;
    if !state.initialized {
        return Err(to_program_error(OracleError::NotInitialized));
    }
    if state.owner != *owner_info.key() {
        return Err(to_program_error(OracleError::OwnerMismatch));
    }

    state.owner = new_owner;
    set_oracle_state(state_account_info, &state)?;

    log!("ownership transferred");
    Ok(())
}

use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::error::{to_program_error, OracleError};
use crate::helpers::{
    expected_pda, get_oracle_info, get_oracle_state, set_oracle_info, ORACLE_INFO_SEED,
    STATE_SEED,
};
use crate::state::SetVerifierData;

pub fn process_set_verifier(accounts: &[AccountInfo], args: SetVerifierData) -> ProgramResult {
    let [state_account_info, oracle_info_account, owner_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !owner_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let (state_pda, _bump) = expected_pda(STATE_SEED);
    if *state_account_info.key() != state_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    let (info_pda, _bump) = expected_pda(ORACLE_INFO_SEED);
    if *oracle_info_account.key() != info_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    let state = get_oracle_state(state_account_info)?;
    if !state.initialized {
        return Err(to_program_error(OracleError::NotInitialized));
    }
    if state.owner != *owner_info.key() {
        return Err(to_program_error(OracleError::OwnerMismatch));
    }

    let mut oracle_info = get_oracle_info(oracle_info_account)?;
    if !oracle_info.initialized {
        return Err(to_program_error(OracleError::NotInitialized));
    }
    oracle_info.app_info = args.app_info;
    oracle_info.verifier_program = args.verifier_program;
    set_oracle_info(oracle_info_account, &oracle_info)?;

    log!("verifier binding updated");
    Ok(())
}

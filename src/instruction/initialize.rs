use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::error::{to_program_error, OracleError};
use crate::helpers::{
    create_pda_account, expected_pda, set_oracle_info, set_oracle_state, ORACLE_INFO_SEED,
    STATE_SEED,
};
use crate::state::{InitializeData, OracleInfo, OracleState};

pub fn process_initialize(accounts: &[AccountInfo], args: InitializeData) -> ProgramResult {
    let [state_account_info, oracle_info_account, owner_info, _system_program, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !owner_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let (state_pda, state_bump) = expected_pda(STATE_SEED);
    if *state_account_info.key() != state_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    let (info_pda, info_bump) = expected_pda(ORACLE_INFO_SEED);
    if *oracle_info_account.key() != info_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    // A populated state PDA means a previous initialize already ran.
    if state_account_info.data_len() > 0 {
        return Err(to_program_error(OracleError::AlreadyInitialized));
    }

    create_pda_account(
        owner_info,
        state_account_info,
        OracleState::size_of(),
        STATE_SEED,
        state_bump,
    )?;
    create_pda_account(
        owner_info,
        oracle_info_account,
        OracleInfo::size_of(),
        ORACLE_INFO_SEED,
        info_bump,
    )?;

    set_oracle_state(
        state_account_info,
        &OracleState {
            initialized: true,
            owner: args.owner,
        },
    )?;
    set_oracle_info(
        oracle_info_account,
        &OracleInfo {
            initialized: true,
            app_info: args.app_info,
            verifier_program: args.verifier_program,
        },
    )?;

    log!("oracle state initialized");
    Ok(())
}

use pinocchio::{
    account_info::AccountInfo,
    cpi::invoke,
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    ProgramResult,
};
use pinocchio_log::log;

use crate::error::{to_program_error, OracleError};
use crate::helpers::{
    expected_pda, get_oracle_info, outcome_message_hash, ORACLE_INFO_SEED,
    VERIFY_IX_DISCRIMINATOR,
};
use crate::state::SetOutcomeData;

// verify ix data: disc || request id || msg hash || s || nonce || group x || parity
const VERIFY_IX_LEN: usize = 1 + 32 + 32 + 32 + 32 + 32 + 1;

pub fn process_set_outcome(accounts: &[AccountInfo], args: SetOutcomeData) -> ProgramResult {
    let [oracle_info_account, user_info, verifier_program_info, system_program_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !user_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let (info_pda, _bump) = expected_pda(ORACLE_INFO_SEED);
    if *oracle_info_account.key() != info_pda {
        return Err(ProgramError::InvalidSeeds);
    }

    let oracle_info = get_oracle_info(oracle_info_account)?;
    if !oracle_info.initialized {
        return Err(to_program_error(OracleError::NotInitialized));
    }
    if *verifier_program_info.key() != oracle_info.verifier_program {
        return Err(to_program_error(OracleError::VerifierMismatch));
    }

    let msg_hash =
        outcome_message_hash(&oracle_info.app_info.app_id, &args.request_id, args.outcome);

    let mut data = [0u8; VERIFY_IX_LEN];
    data[0] = VERIFY_IX_DISCRIMINATOR;
    data[1..33].copy_from_slice(&args.request_id);
    data[33..65].copy_from_slice(&msg_hash);
    data[65..97].copy_from_slice(&args.sign.signature);
    data[97..129].copy_from_slice(&args.sign.nonce);
    data[129..161].copy_from_slice(&oracle_info.app_info.group_pub_key.x);
    data[161] = oracle_info.app_info.group_pub_key.parity;

    let account_metas = [
        AccountMeta::writable_signer(user_info.key()),
        AccountMeta::readonly(system_program_info.key()),
    ];
    let ix = Instruction {
        program_id: verifier_program_info.key(),
        accounts: &account_metas,
        data: &data,
    };
    // The verifier aborts the transaction when the signature is invalid.
    invoke(&ix, &[user_info, system_program_info])?;

    log!("outcome accepted: {}", args.outcome as u8);
    Ok(())
}

use crate::instruction::{self, OracleInstruction};
use crate::state::{InitializeData, SetOutcomeData, SetVerifierData};
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Enforce correct program id
    let expected_id =
        Pubkey::try_from(&crate::ID[..]).map_err(|_| ProgramError::IncorrectProgramId)?;
    if *program_id != expected_id {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Decode OracleInstruction via bincode when building with std (host/dev)
    #[cfg(feature = "std")]
    {
        if let Some(wire_ix) = instruction::wire::try_decode(instruction_data) {
            return dispatch_wire_instruction(accounts, wire_ix);
        }
    }

    // Fallback to legacy single-byte discriminator + raw payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match OracleInstruction::try_from(disc)? {
        OracleInstruction::Initialize => {
            msg!("Instruction: Initialize");
            let args = InitializeData::parse(payload)?;
            instruction::initialize::process_initialize(accounts, args)
        }
        OracleInstruction::SetOutcome => {
            msg!("Instruction: SetOutcome");
            let args = SetOutcomeData::parse(payload)?;
            instruction::set_outcome::process_set_outcome(accounts, args)
        }
        OracleInstruction::SetVerifier => {
            msg!("Instruction: SetVerifier");
            let args = SetVerifierData::parse(payload)?;
            instruction::set_verifier::process_set_verifier(accounts, args)
        }
        OracleInstruction::TransferOwnership => {
            msg!("Instruction: TransferOwnership");
            if payload.len() != 32 {
                return Err(ProgramError::InvalidInstructionData);
            }
            let new_owner =
                Pubkey::try_from(payload).map_err(|_| ProgramError::InvalidInstructionData)?;
            instruction::transfer_ownership::process_transfer_ownership(accounts, new_owner)
        }
    }
}

#[cfg(feature = "std")]
fn dispatch_wire_instruction(
    accounts: &[AccountInfo],
    ix: instruction::wire::OracleInstruction,
) -> ProgramResult {
    use instruction::wire::Decoded;

    match ix.into_args()? {
        Decoded::Initialize(args) => {
            msg!("Instruction: Initialize");
            instruction::initialize::process_initialize(accounts, args)
        }
        Decoded::SetOutcome(args) => {
            msg!("Instruction: SetOutcome");
            instruction::set_outcome::process_set_outcome(accounts, args)
        }
        Decoded::SetVerifier(args) => {
            msg!("Instruction: SetVerifier");
            instruction::set_verifier::process_set_verifier(accounts, args)
        }
        Decoded::TransferOwnership(new_owner) => {
            msg!("Instruction: TransferOwnership");
            instruction::transfer_ownership::process_transfer_ownership(accounts, new_owner)
        }
    }
}
